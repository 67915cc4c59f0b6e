//! TOC settings loaded from a TOML file, falling back to defaults.
//!
//! We look for a tocsmith.toml in the working directory unless a path is given explicitly. The
//! settings mirror the host editor's TOC dialog and are translated into the numbering and layout
//! options the builder and renderer consume. Unknown codes never fail here: they fall back to the
//! documented defaults when converted.

use crate::error::TocError;
use crate::layout::{LayoutConfig, LeaderChar};
use crate::numbering::{NumberingConfig, NumeralScheme, Separator};
use crate::render::DEFAULT_TITLE;
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// File name searched for in the working directory.
pub const CONFIG_FILE: &str = "tocsmith.toml";

#[derive(Facet, Clone, Debug)]
/// TOC display settings.
pub struct Config {
    #[facet(default = 3)]
    /// Deepest heading level included.
    pub levels: u8,
    #[facet(default = false)]
    /// Indent entries by depth.
    pub indent_levels: bool,
    #[facet(default = DEFAULT_TITLE.to_string())]
    /// Heading printed above the entries.
    pub title: String,
    #[facet(default = "dot".to_string())]
    /// Leader code: `none`, `dot`, `dash` or `underscore`.
    pub tab_leader_format: String,
    #[facet(default = false)]
    /// Prefix entries with formatted heading numbers.
    pub show_heading_numbers: bool,
    #[facet(default = "dot".to_string())]
    /// Separator code: `paren`, `dot` or `dash`.
    pub number_separator: String,
    #[facet(default = "decimal".to_string())]
    /// Numeral scheme for level 1.
    pub level1_format: String,
    #[facet(default = "decimal".to_string())]
    /// Numeral scheme for level 2.
    pub level2_format: String,
    #[facet(default = "decimal".to_string())]
    /// Numeral scheme for level 3.
    pub level3_format: String,
    #[facet(default = "decimal".to_string())]
    /// Numeral scheme for level 4.
    pub level4_format: String,
    #[facet(default = "decimal".to_string())]
    /// Numeral scheme for level 5.
    pub level5_format: String,
    #[facet(default = "decimal".to_string())]
    /// Numeral scheme for level 6.
    pub level6_format: String,
    #[facet(default = 200)]
    /// Width of the layout container in pixels.
    pub container_width: u32,
}

impl Config {
    /// Load settings from `path`, or from tocsmith.toml in the working directory if present.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::Config`] if an explicitly named file cannot be read, if tocsmith.toml
    /// exists but cannot be read, or if any file that was found does not parse.
    pub fn load(path: Option<&Path>) -> Result<Self, TocError> {
        let contents = match path {
            Some(path) => fs::read_to_string(path)
                .map_err(|e| TocError::Config(format!("{}: {e}", path.display())))?,
            None => read_if_present(Path::new(CONFIG_FILE))?,
        };
        Self::parse(&contents)
    }

    /// Parse settings from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::Config`] if the text is not valid settings TOML.
    pub fn parse(contents: &str) -> Result<Self, TocError> {
        facet_toml::from_str::<Self>(contents).map_err(|e| TocError::Config(e.to_string()))
    }

    #[must_use]
    /// Numbering options for the builder.
    pub fn numbering(&self) -> NumberingConfig {
        NumberingConfig {
            levels: self.levels,
            display_enabled: self.show_heading_numbers,
            separator: Separator::from_code(&self.number_separator),
            level_formats: [
                &self.level1_format,
                &self.level2_format,
                &self.level3_format,
                &self.level4_format,
                &self.level5_format,
                &self.level6_format,
            ]
            .map(|code| NumeralScheme::from_code(code)),
        }
    }

    #[must_use]
    /// Layout options for the renderer.
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            container_width: f64::from(self.container_width),
            leader: LeaderChar::from_code(&self.tab_leader_format),
            indent_enabled: self.indent_levels,
        }
    }
}

/// Reads `path`, treating a missing file as empty.
fn read_if_present(path: &Path) -> Result<String, TocError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(TocError::Config(format!("{}: {e}", path.display()))),
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
