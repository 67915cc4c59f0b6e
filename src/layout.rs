//! Level styling and the tab-leader width estimate.
//!
//! No font metrics are available, so the width of a TOC entry is approximated from its length
//! in UTF-16 code units, its font size and a per-style glyph factor. The number of leader
//! characters is whatever fills the gap to 90% of the container width, floored by a minimum
//! that depends on how long the title is.

/// Font size of leader runs, in points.
pub const LEADER_FONT_SIZE: u32 = 12;
/// Reference font leader runs are set in.
pub const LEADER_FONT_FAMILY: &str = "Courier New";

const TARGET_RATIO: f64 = 0.90;
const INDENT_FACTOR: f64 = 1.2;
const PADDING_FACTOR: f64 = 0.5;
const MIN_EXACT_DOTS: i64 = 5;
const MIN_DOT_REFERENCE_SIZE: f64 = 14.0;

/// Title-length buckets (exclusive upper bound, minimum leader count).
const MIN_DOTS_BY_LENGTH: [(usize, u32); 4] = [(8, 50), (15, 40), (25, 30), (40, 20)];
const MIN_DOTS_LONG_TITLE: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Character repeated between a title and its page number.
pub enum LeaderChar {
    /// Non-breaking space, an invisible leader.
    None,
    #[default]
    /// Full stop.
    Dot,
    /// Hyphen.
    Dash,
    /// Underscore.
    Underscore,
}

impl LeaderChar {
    #[must_use]
    /// Parses a settings code, falling back to [`LeaderChar::Dot`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "none" | "space" | "\u{a0}" => Self::None,
            "dash" | "-" => Self::Dash,
            "underscore" | "_" => Self::Underscore,
            _ => Self::Dot,
        }
    }

    #[must_use]
    /// The literal leader character.
    pub fn as_char(self) -> char {
        match self {
            Self::None => '\u{a0}',
            Self::Dot => '.',
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }

    #[must_use]
    /// Width of one leader glyph as a fraction of the leader font size.
    pub fn width_fraction(self) -> f64 {
        match self {
            Self::None | Self::Dot => 0.3,
            Self::Dash => 0.45,
            Self::Underscore => 0.52,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Page geometry and leader options for rendering.
pub struct LayoutConfig {
    /// Width of the container the TOC is laid out in, in pixels.
    pub container_width: f64,
    /// Leader character between title and page number.
    pub leader: LeaderChar,
    /// Whether deeper levels are indented.
    pub indent_enabled: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_width: 200.0,
            leader: LeaderChar::Dot,
            indent_enabled: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Emphasis and size of a run of text.
pub struct RunStyle {
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
    /// Font size in points.
    pub font_size: u32,
    /// Explicit font family, if any.
    pub font_family: Option<&'static str>,
}

impl RunStyle {
    #[must_use]
    /// Style of a TOC title at `level`.
    ///
    /// Level 4 is both bold and italic.
    pub fn for_level(level: u8) -> Self {
        Self {
            bold: level <= 4,
            italic: level >= 4,
            font_size: font_size_for_level(level),
            font_family: None,
        }
    }

    #[must_use]
    /// Fixed style of leader runs.
    pub fn leader() -> Self {
        Self {
            bold: false,
            italic: false,
            font_size: LEADER_FONT_SIZE,
            font_family: Some(LEADER_FONT_FAMILY),
        }
    }

    fn glyph_factor(self) -> f64 {
        match (self.bold, self.italic) {
            (true, true) => 0.75,
            (true, false) => 0.70,
            (false, true) => 0.60,
            (false, false) => 0.65,
        }
    }
}

#[must_use]
/// Title font size for a heading level, 12pt for anything unexpected.
pub fn font_size_for_level(level: u8) -> u32 {
    match level {
        1 => 18,
        2 => 16,
        3 => 14,
        6 => 10,
        _ => 12,
    }
}

#[must_use]
/// Leader floor for a title of `title_len` UTF-16 code units at `font_size`.
pub fn min_dots(title_len: usize, font_size: u32) -> usize {
    let base = MIN_DOTS_BY_LENGTH
        .iter()
        .find(|(limit, _)| title_len < *limit)
        .map_or(MIN_DOTS_LONG_TITLE, |(_, dots)| *dots);
    let scaled = f64::from(base) * (MIN_DOT_REFERENCE_SIZE / f64::from(font_size));
    round_to_count(scaled)
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
/// Number of leader characters for a TOC entry.
///
/// The estimate is at least 5 and never below [`min_dots`] for the title's length.
pub fn leader_count(title: &str, level: u8, config: &LayoutConfig) -> usize {
    let style = RunStyle::for_level(level);
    let font_size = f64::from(style.font_size);
    // Lengths are UTF-16 code units, so characters outside the BMP count twice.
    let title_len = title.encode_utf16().count();

    let indentation = if config.indent_enabled {
        f64::from(level.saturating_sub(1)) * font_size * INDENT_FACTOR
    } else {
        0.0
    };
    let padding = font_size * PADDING_FACTOR;
    let target = config.container_width * TARGET_RATIO;
    let title_width = title_len as f64 * font_size * style.glyph_factor() + indentation + padding;

    let dot_width = f64::from(LEADER_FONT_SIZE) * config.leader.width_fraction();
    let available = target - title_width;
    let exact = round_signed(available / dot_width).max(MIN_EXACT_DOTS);
    let exact = usize::try_from(exact).unwrap_or(0);

    exact.max(min_dots(title_len, style.font_size))
}

#[must_use]
/// The leader run text for a TOC entry.
pub fn leader_text(title: &str, level: u8, config: &LayoutConfig) -> String {
    config
        .leader
        .as_char()
        .to_string()
        .repeat(leader_count(title, level, config))
}

#[allow(clippy::cast_possible_truncation)]
fn round_signed(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

fn round_to_count(value: f64) -> usize {
    usize::try_from(round_signed(value)).unwrap_or(0)
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
