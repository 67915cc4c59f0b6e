//! Format trait and implementations for heading-bearing source documents.
//!
//! A format supplies the tree-sitter grammar and the query that captures heading nodes, so the
//! extractor in [`crate::input`] stays independent of any particular markup language.

pub mod markdown;

/// Tree-sitter grammar and heading query for one markup language.
pub trait Format {
    /// Grammar used to parse the source.
    fn language(&self) -> tree_sitter::Language;
    /// Query whose captures are heading nodes.
    fn heading_query(&self) -> &str;
    /// Heading level for a heading's marker child, if `kind` names one.
    fn marker_level(&self, kind: &str) -> Option<u8>;
    /// Whether a child node of `kind` holds the heading text.
    fn is_title(&self, kind: &str) -> bool;

    /// Grammar for the inline content of a title, when titles carry inline markup.
    fn inline_language(&self) -> Option<tree_sitter::Language> {
        None
    }
    /// Whether an inline node of `kind` is pure markup and contributes no text.
    fn is_inline_markup(&self, _kind: &str) -> bool {
        false
    }
    /// Whether an inline node of `kind` is an escape whose text follows a one-byte prefix.
    fn is_escape(&self, _kind: &str) -> bool {
        false
    }
    /// Title text with any trailing heading decoration removed.
    fn strip_closing_sequence<'a>(&self, _heading_kind: &str, title: &'a str) -> &'a str {
        title
    }
}
