use super::{content_nodes, extract_headings, extract_markup_headings, plain_text, slice_between};
use crate::error::TocError;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use serde_json::json;

#[test]
fn test_headings_in_document_order_including_nested() {
    let document = json!({
        "type": "doc",
        "content": [
            { "type": "heading", "attrs": { "level": 1 }, "content": [{ "type": "text", "text": "One" }] },
            { "type": "blockquote", "content": [
                { "type": "heading", "attrs": { "level": 2 }, "content": [{ "type": "text", "text": "Quoted" }] }
            ] },
            { "type": "heading", "attrs": { "level": 2 }, "content": [
                { "type": "text", "text": " Two " },
                { "type": "text", "text": "parts " }
            ] },
        ]
    });
    let headings = extract_headings(&document, 3).unwrap();

    let texts: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(texts, vec!["One", "Quoted", "Two parts"]);
    assert!(headings.windows(2).all(|w| w[0].position < w[1].position));
}

#[test]
fn test_filters_level_and_empty_content() {
    let document = json!([
        { "type": "heading", "attrs": { "level": 4 }, "content": [{ "type": "text", "text": "Too deep" }] },
        { "type": "heading", "attrs": { "level": 1 }, "content": [] },
        { "type": "heading", "attrs": { "level": 1 } },
        { "type": "heading", "attrs": {}, "content": [{ "type": "text", "text": "No level" }] },
        { "type": "heading", "attrs": { "level": 2 }, "content": [{ "type": "text", "text": "Kept" }] },
        { "type": "image", "attrs": { "src": "x.png" } },
    ]);
    let headings = extract_headings(&document, 3).unwrap();

    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].text, "Kept");
    assert_eq!(headings[0].level, 2);
}

#[test]
fn test_malformed_documents_are_errors() {
    assert!(matches!(
        content_nodes(&json!(42)),
        Err(TocError::MalformedInput(_))
    ));
    assert!(matches!(
        extract_headings(&json!({ "type": "doc" }), 3),
        Err(TocError::MalformedInput(_))
    ));
}

#[test]
fn test_plain_text_joins_runs() {
    let node = json!({ "content": [{ "text": "Hello " }, { "content": [{ "text": "world" }] }] });
    assert_eq!(plain_text(&node), "Hello world");
}

#[test]
fn test_slice_between_markers() {
    let nodes = vec![
        json!({ "type": "paragraph", "content": [{ "text": "Preface" }] }),
        json!({ "type": "paragraph", "content": [{ "text": "START" }] }),
        json!({ "type": "heading", "attrs": { "level": 1 }, "content": [{ "text": "Inside" }] }),
        json!({ "type": "paragraph", "content": [{ "text": "END" }] }),
        json!({ "type": "heading", "attrs": { "level": 1 }, "content": [{ "text": "Outside" }] }),
    ];

    let section = slice_between(&nodes, "START", "END");
    assert_eq!(section.len(), 1);
    assert_eq!(plain_text(&section[0]), "Inside");

    assert!(slice_between(&nodes, "MISSING", "END").is_empty());
    assert_eq!(slice_between(&nodes, "START", "MISSING").len(), 3);
}

#[test]
fn test_markdown_headings() {
    let source = "# Title\n\nSome text.\n\n## Sub section\n\nMore.\n\nUnderlined\n----------\n\n### Third\n";
    let headings = extract_markup_headings(source, &MarkdownFormat).unwrap();

    let summary: Vec<(u8, &str)> = headings.iter().map(|h| (h.level, h.text.as_str())).collect();
    assert_eq!(
        summary,
        vec![(1, "Title"), (2, "Sub section"), (2, "Underlined"), (3, "Third")]
    );
    assert_eq!(headings[3].position, 3);
}

#[test]
fn test_markdown_without_headings() {
    let headings = extract_markup_headings("just a paragraph\n", &MarkdownFormat).unwrap();
    assert!(headings.is_empty());
}

#[test]
fn test_markdown_titles_are_plain_text() {
    let source = "## Title ##\n\n# Hello *world*\n\n## [Setup](http://x.y) guide ##\n\n### Use `cargo` **now**\n\n# C#\n";
    let headings = extract_markup_headings(source, &MarkdownFormat).unwrap();

    let texts: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Title", "Hello world", "Setup guide", "Use cargo now", "C#"]
    );
}

#[test]
fn test_closing_sequence_only_for_atx() {
    let format = MarkdownFormat;
    assert_eq!(format.strip_closing_sequence("atx_heading", "Title ##  "), "Title");
    assert_eq!(format.strip_closing_sequence("atx_heading", "##"), "");
    assert_eq!(format.strip_closing_sequence("atx_heading", "C#"), "C#");
    assert_eq!(
        format.strip_closing_sequence("setext_heading", "Title ##"),
        "Title ##"
    );
}
