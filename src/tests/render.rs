use super::{layout_lines, render_text, render_toc, Mark, Paragraph, TextRun, DEFAULT_TITLE};
use crate::builder::build_forest;
use crate::heading::HeadingRecord;
use crate::layout::{LayoutConfig, RunStyle};
use crate::numbering::NumberingConfig;
use serde_json::json;

fn forest(entries: &[(u8, &str)]) -> Vec<crate::builder::TreeNode> {
    let headings: Vec<HeadingRecord> = entries
        .iter()
        .enumerate()
        .map(|(i, (level, text))| HeadingRecord::new(*level, text, i))
        .collect();
    let config = NumberingConfig {
        levels: 6,
        ..NumberingConfig::default()
    };
    build_forest(&headings, &config)
}

#[test]
fn test_empty_forest_renders_empty_doc() {
    let document = render_toc(&[], &LayoutConfig::default(), DEFAULT_TITLE);
    assert!(document.content.is_empty());
    assert_eq!(
        serde_json::to_value(&document).unwrap(),
        json!({ "type": "doc", "content": [] })
    );
}

#[test]
fn test_document_assembly_order() {
    let trees = forest(&[(1, "A"), (2, "B"), (3, "C"), (1, "D")]);
    let document = render_toc(&trees, &LayoutConfig::default(), "Contents");

    let texts: Vec<String> = document.content.iter().map(Paragraph::text).collect();
    assert!(document.content[0].is_spacer());
    assert_eq!(texts[1], "CONTENTS");
    assert!(texts[2].starts_with("A "));
    assert!(texts[3].starts_with("B "));
    assert!(texts[4].starts_with("C "));
    assert!(document.content[5].is_spacer());
    assert!(texts[6].starts_with("D "));
    assert!(document.content[7].is_spacer());
    assert_eq!(document.content.len(), 8);
    assert_eq!(document.content[4].attrs.level, Some(3));
}

#[test]
fn test_line_runs() {
    let trees = forest(&[(1, "Intro")]);
    let lines = layout_lines(&trees, &LayoutConfig::default());
    let line = &lines[0];

    assert_eq!(line.title_run.text, "Intro ");
    assert_eq!(line.leader_run.text, ".".repeat(39));
    assert_eq!(line.leader_count(), 39);
    assert_eq!(line.trailing_run.text, " TDB");
    assert!(line.title_run.has_mark(&Mark::Bold));
    assert!(!line.title_run.has_mark(&Mark::Italic));
    assert_eq!(line.trailing_run.marks, line.title_run.marks);
    assert!(!line.leader_run.has_mark(&Mark::Bold));
}

#[test]
fn test_level_four_title_is_bold_and_italic() {
    let trees = forest(&[(1, "A"), (2, "B"), (3, "C"), (4, "D")]);
    let lines = layout_lines(&trees, &LayoutConfig::default());

    let level4 = &lines[3].title_run;
    assert!(level4.has_mark(&Mark::Bold));
    assert!(level4.has_mark(&Mark::Italic));
}

#[test]
fn test_leader_run_serialises_fixed_style() {
    let trees = forest(&[(2, "Solo")]);
    let lines = layout_lines(&trees, &LayoutConfig::default());
    let value = serde_json::to_value(&lines[0].leader_run).unwrap();

    assert_eq!(value["type"], "text");
    assert_eq!(
        value["marks"],
        json!([{ "type": "textStyle", "attrs": { "fontSize": "12pt", "fontFamily": "Courier New" } }])
    );
}

#[test]
fn test_title_run_serialisation() {
    let run = TextRun::styled("x", RunStyle::for_level(1));
    assert_eq!(
        serde_json::to_value(&run).unwrap(),
        json!({
            "type": "text",
            "text": "x",
            "marks": [{ "type": "bold" }, { "type": "textStyle", "attrs": { "fontSize": "18pt" } }]
        })
    );
    assert_eq!(
        serde_json::to_value(Paragraph::spacer()).unwrap(),
        json!({ "type": "paragraph", "attrs": {} })
    );
}

#[test]
fn test_text_rendering() {
    let trees = forest(&[(1, "Intro")]);
    let document = render_toc(&trees, &LayoutConfig::default(), DEFAULT_TITLE);
    let text = render_text(&document);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "TABLE OF CONTENTS");
    assert_eq!(lines[2], format!("Intro {} TDB", ".".repeat(39)));
    assert_eq!(lines[3], "");
}
