use super::Config;
use crate::layout::LeaderChar;
use crate::numbering::{NumeralScheme, Separator};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = Config::parse("").unwrap();

    assert_eq!(config.levels, 3);
    assert_eq!(config.title, "TABLE OF CONTENTS");
    assert_eq!(config.container_width, 200);
    assert!(!config.show_heading_numbers);

    let numbering = config.numbering();
    assert!(!numbering.display_enabled);
    assert_eq!(numbering.separator, Separator::Dot);
    assert_eq!(numbering.level_formats, [NumeralScheme::Decimal; 6]);

    let layout = config.layout();
    assert_eq!(layout.leader, LeaderChar::Dot);
    assert!(!layout.indent_enabled);
    assert!((layout.container_width - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "levels = 4\nindent_levels = true\nshow_heading_numbers = true\nnumber_separator = \"paren\"\nlevel1_format = \"upper-roman\"\nlevel2_format = \"bogus\"\ntab_leader_format = \"dash\"\ncontainer_width = 480"
    )
    .unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    let numbering = config.numbering();
    assert_eq!(numbering.levels, 4);
    assert!(numbering.display_enabled);
    assert_eq!(numbering.separator, Separator::Paren);
    assert_eq!(numbering.level_formats[0], NumeralScheme::UpperRoman);
    assert_eq!(numbering.level_formats[1], NumeralScheme::Decimal);

    let layout = config.layout();
    assert_eq!(layout.leader, LeaderChar::Dash);
    assert!(layout.indent_enabled);
    assert!((layout.container_width - 480.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_explicit_file_is_error() {
    assert!(Config::load(Some(Path::new("/nonexistent/tocsmith.toml"))).is_err());
}

#[test]
fn test_missing_default_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let contents = super::read_if_present(&dir.path().join("tocsmith.toml")).unwrap();
    assert!(contents.is_empty());
}

#[test]
fn test_unreadable_default_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists but cannot be read as a file.
    assert!(super::read_if_present(dir.path()).is_err());

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe]).unwrap();
    let err = super::read_if_present(file.path()).unwrap_err();
    assert!(matches!(err, crate::error::TocError::Config(_)));
}
