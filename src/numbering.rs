//! Numeral schemes, separators and the per-level counters used to number headings.
//!
//! Every configuration code here is parsed into a closed enum. Unknown codes fall back to the
//! documented default instead of failing, so a stale settings file still yields a usable TOC.

/// Deepest heading level a document can carry.
pub const MAX_LEVEL: u8 = 6;

const ROMAN_TABLE: [(usize, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// How a counter value is rendered in a formatted heading id.
pub enum NumeralScheme {
    #[default]
    /// Plain Arabic digits.
    Decimal,
    /// Single letter `a`..`z`, clamped at `z`.
    LowerAlpha,
    /// Single letter `A`..`Z`, clamped at `Z`.
    UpperAlpha,
    /// Subtractive Roman numerals in lower case.
    LowerRoman,
    /// Subtractive Roman numerals in upper case.
    UpperRoman,
}

impl NumeralScheme {
    #[must_use]
    /// Parses a settings code, falling back to [`NumeralScheme::Decimal`].
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "lower-alpha" | "a" => Self::LowerAlpha,
            "upper-alpha" | "A" => Self::UpperAlpha,
            "lower-roman" | "i" => Self::LowerRoman,
            "upper-roman" | "I" => Self::UpperRoman,
            _ => Self::Decimal,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Character joining a parent's formatted id to a child's numeral.
pub enum Separator {
    /// Closing parenthesis, `1)a`.
    Paren,
    #[default]
    /// Full stop, `1.a`.
    Dot,
    /// Hyphen, `1-a`.
    Dash,
}

impl Separator {
    #[must_use]
    /// Parses a settings code, falling back to [`Separator::Dot`].
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "paren" | ")" => Self::Paren,
            "dash" | "-" => Self::Dash,
            _ => Self::Dot,
        }
    }

    #[must_use]
    /// The literal separator character.
    pub fn as_char(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Dot => '.',
            Self::Dash => '-',
        }
    }
}

#[must_use]
/// Renders `n` in the given numeral scheme.
pub fn format_number(n: usize, scheme: NumeralScheme) -> String {
    match scheme {
        NumeralScheme::Decimal => n.to_string(),
        NumeralScheme::LowerAlpha => alpha(n).to_string(),
        NumeralScheme::UpperAlpha => alpha(n).to_ascii_uppercase().to_string(),
        NumeralScheme::LowerRoman => roman(n).to_ascii_lowercase(),
        NumeralScheme::UpperRoman => roman(n),
    }
}

fn alpha(n: usize) -> char {
    let offset = u8::try_from(n.clamp(1, 26) - 1).unwrap_or(25);
    char::from(b'a' + offset)
}

fn roman(mut n: usize) -> String {
    let mut out = String::new();
    for (value, symbol) in ROMAN_TABLE {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Numbering options for a single build.
pub struct NumberingConfig {
    /// Deepest heading level included in the tree.
    pub levels: u8,
    /// Whether formatted display ids are generated at all.
    pub display_enabled: bool,
    /// Joins parent and child formatted ids.
    pub separator: Separator,
    /// Numeral scheme for levels 1 through 6.
    pub level_formats: [NumeralScheme; MAX_LEVEL as usize],
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            levels: 3,
            display_enabled: false,
            separator: Separator::Dot,
            level_formats: [NumeralScheme::Decimal; MAX_LEVEL as usize],
        }
    }
}

impl NumberingConfig {
    #[must_use]
    /// Maximum included level, clamped into `1..=6`.
    pub fn max_level(&self) -> u8 {
        self.levels.clamp(1, MAX_LEVEL)
    }

    #[must_use]
    /// Numeral scheme configured for `level`, decimal when out of range.
    pub fn scheme_for(&self, level: u8) -> NumeralScheme {
        usize::from(level)
            .checked_sub(1)
            .and_then(|i| self.level_formats.get(i))
            .copied()
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default)]
/// One monotonically increasing counter per heading level.
///
/// The counters never reset when the ancestor chain changes: the second level-2 heading in a
/// document is numbered 2 even when it sits under a different level-1 parent.
pub struct LevelCounters {
    counts: [usize; MAX_LEVEL as usize],
}

impl LevelCounters {
    #[must_use]
    /// Fresh counters, all at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter for `level` and returns its new value.
    pub fn bump(&mut self, level: u8) -> usize {
        let Some(slot) = usize::from(level)
            .checked_sub(1)
            .and_then(|i| self.counts.get_mut(i))
        else {
            return 0;
        };
        *slot += 1;
        *slot
    }
}

#[cfg(test)]
#[path = "tests/numbering.rs"]
mod tests;
