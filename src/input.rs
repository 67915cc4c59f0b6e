//! Heading extraction from the supported input shapes.
//!
//! Two sources feed the builder: a JSON document content tree in the editor's node shape
//! (`{ type, attrs: { level }, content: [{ text }, ...] }`) and markup files parsed with
//! tree-sitter through a [`Format`]. Both produce [`HeadingRecord`]s in document order.

use crate::error::TocError;
use crate::formats::Format;
use crate::heading::HeadingRecord;
use serde_json::Value;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

/// Returns the top-level node array of a document object or bare array.
///
/// # Errors
///
/// Returns [`TocError::MalformedInput`] if the value is neither an array nor an object with a
/// `content` array.
pub fn content_nodes(document: &Value) -> Result<&[Value], TocError> {
    match document {
        Value::Array(nodes) => Ok(nodes),
        Value::Object(map) => match map.get("content") {
            Some(Value::Array(nodes)) => Ok(nodes),
            Some(_) => Err(TocError::MalformedInput(
                "document `content` is not an array".to_string(),
            )),
            None => Err(TocError::MalformedInput(
                "document has no `content` array".to_string(),
            )),
        },
        other => Err(TocError::MalformedInput(format!(
            "expected a document object or node array, found {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Collects every heading at or above `max_level` from a document content tree.
///
/// Nodes are visited depth-first so headings nested inside containers keep their document
/// order. Headings with empty inline content are skipped.
///
/// # Errors
///
/// Returns [`TocError::MalformedInput`] if the document structure is not recognisable.
pub fn extract_headings(document: &Value, max_level: u8) -> Result<Vec<HeadingRecord>, TocError> {
    let nodes = content_nodes(document)?;
    let mut headings = Vec::new();
    let mut position = 0;
    collect_headings(nodes, max_level, &mut position, &mut headings);
    Ok(headings)
}

fn collect_headings(
    nodes: &[Value],
    max_level: u8,
    position: &mut usize,
    headings: &mut Vec<HeadingRecord>,
) {
    for node in nodes {
        let index = *position;
        *position += 1;

        if node.get("type").and_then(Value::as_str) != Some("heading") {
            if let Some(Value::Array(children)) = node.get("content") {
                collect_headings(children, max_level, position, headings);
            }
            continue;
        }

        let Some(level) = heading_level(node) else {
            log::debug!("Skipping heading without a usable level at position {index}");
            continue;
        };
        if level > max_level {
            continue;
        }
        let has_content = node
            .get("content")
            .and_then(Value::as_array)
            .is_some_and(|runs| !runs.is_empty());
        if !has_content {
            continue;
        }

        headings.push(HeadingRecord::new(level, &plain_text(node), index));
    }
}

fn heading_level(node: &Value) -> Option<u8> {
    let level = node.get("attrs")?.get("level")?.as_u64()?;
    u8::try_from(level).ok().filter(|l| (1..=6).contains(l))
}

#[must_use]
/// Concatenates every `text` field under `node`, in order.
pub fn plain_text(node: &Value) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

fn push_text(node: &Value, out: &mut String) {
    if let Some(text) = node.get("text").and_then(Value::as_str) {
        out.push_str(text);
    }
    if let Some(children) = node.get("content").and_then(Value::as_array) {
        for child in children {
            push_text(child, out);
        }
    }
}

#[must_use]
/// Slices `nodes` to the section between two named boundary markers.
///
/// The result starts after the first node whose trimmed text equals `start` and stops before
/// the next node whose trimmed text equals `end`. A missing start marker yields an empty slice;
/// a missing end marker runs to the end of the array.
pub fn slice_between<'a>(nodes: &'a [Value], start: &str, end: &str) -> &'a [Value] {
    let Some(begin) = nodes.iter().position(|n| plain_text(n).trim() == start) else {
        return &[];
    };
    let rest = &nodes[begin + 1..];
    let stop = rest
        .iter()
        .position(|n| plain_text(n).trim() == end)
        .unwrap_or(rest.len());
    &rest[..stop]
}

/// Parses markup source with tree-sitter and returns its headings in document order.
///
/// Titles are reduced to their plain text: closing decorations are dropped and, for formats
/// with an inline grammar, markup such as emphasis delimiters and link destinations is removed.
///
/// # Errors
///
/// Returns [`TocError::Parse`] if a grammar cannot be loaded, the query does not compile or
/// tree-sitter produces no tree.
pub fn extract_markup_headings(
    source: &str,
    format: &impl Format,
) -> Result<Vec<HeadingRecord>, TocError> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| TocError::Parse(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| TocError::Parse("tree-sitter produced no syntax tree".to_string()))?;
    let query = Query::new(&language, format.heading_query())
        .map_err(|e| TocError::Parse(e.to_string()))?;

    let bytes = source.as_bytes();
    let mut found: Vec<(usize, u8, String)> = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), bytes);
    while let Some(m) = matches.next() {
        for capture in m.captures {
            if let Some((level, title)) = heading_parts(capture.node, bytes, format) {
                found.push((capture.node.start_byte(), level, title));
            }
        }
    }
    found.sort_by_key(|(start, _, _)| *start);

    let mut inline_parser = match format.inline_language() {
        Some(inline) => {
            let mut parser = Parser::new();
            parser
                .set_language(&inline)
                .map_err(|e| TocError::Parse(e.to_string()))?;
            Some(parser)
        }
        None => None,
    };

    Ok(found
        .into_iter()
        .enumerate()
        .map(|(position, (_, level, title))| {
            let text = match inline_parser.as_mut() {
                Some(parser) => inline_plain_text(parser, &title, format),
                None => title,
            };
            HeadingRecord::new(level, &text, position)
        })
        .collect())
}

fn heading_parts(node: Node, bytes: &[u8], format: &impl Format) -> Option<(u8, String)> {
    let mut level = None;
    let mut text = None;
    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        let kind = child.kind();
        if let Some(l) = format.marker_level(kind) {
            level = Some(l);
        } else if format.is_title(kind) {
            text = child
                .utf8_text(bytes)
                .ok()
                .map(|title| format.strip_closing_sequence(node.kind(), title).to_string());
        }
    }
    // A bare `#` has no inline child and does not count as a heading.
    Some((level?, text?))
}

/// Reparses a title with the inline grammar and keeps only its text content.
fn inline_plain_text(parser: &mut Parser, title: &str, format: &impl Format) -> String {
    let Some(tree) = parser.parse(title, None) else {
        log::debug!("Inline parse failed for {title:?}, keeping raw text");
        return title.to_string();
    };
    let mut out = String::new();
    push_inline_text(tree.root_node(), title.as_bytes(), format, &mut out);
    out
}

fn push_inline_text(node: Node, bytes: &[u8], format: &impl Format, out: &mut String) {
    // Plain text has no node of its own: it is whatever lies between the children.
    let mut offset = node.start_byte();
    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        push_span(bytes, offset, child.start_byte(), out);
        offset = child.end_byte();

        let kind = child.kind();
        if !child.is_named() || format.is_inline_markup(kind) {
            continue;
        }
        if format.is_escape(kind) {
            push_span(bytes, child.start_byte() + 1, child.end_byte(), out);
        } else {
            push_inline_text(child, bytes, format, out);
        }
    }
    push_span(bytes, offset, node.end_byte(), out);
}

fn push_span(bytes: &[u8], start: usize, end: usize, out: &mut String) {
    if let Some(text) = bytes
        .get(start..end)
        .and_then(|span| std::str::from_utf8(span).ok())
    {
        out.push_str(text);
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
