//! Markdown format implementation using tree-sitter-md.
//!
//! Both ATX (`#` prefixed) and setext (underlined) headings are recognised. Titles are reparsed
//! with the inline grammar so emphasis, code-span and link syntax drop out of the heading text.

use crate::formats::Format;

/// Tree-sitter queries for ATX and setext markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading)] @heading"
    }

    fn marker_level(&self, kind: &str) -> Option<u8> {
        match kind {
            "atx_h1_marker" | "setext_h1_underline" => Some(1),
            "atx_h2_marker" | "setext_h2_underline" => Some(2),
            "atx_h3_marker" => Some(3),
            "atx_h4_marker" => Some(4),
            "atx_h5_marker" => Some(5),
            "atx_h6_marker" => Some(6),
            _ => None,
        }
    }

    fn is_title(&self, kind: &str) -> bool {
        matches!(kind, "inline" | "paragraph")
    }

    fn inline_language(&self) -> Option<tree_sitter::Language> {
        Some(tree_sitter_md::INLINE_LANGUAGE.into())
    }

    fn is_inline_markup(&self, kind: &str) -> bool {
        matches!(
            kind,
            "emphasis_delimiter"
                | "code_span_delimiter"
                | "link_destination"
                | "link_title"
                | "link_label"
                | "html_tag"
        )
    }

    fn is_escape(&self, kind: &str) -> bool {
        kind == "backslash_escape"
    }

    /// Drops an ATX closing sequence: a run of `#` preceded by a space, or making up the title.
    fn strip_closing_sequence<'a>(&self, heading_kind: &str, title: &'a str) -> &'a str {
        if heading_kind != "atx_heading" {
            return title;
        }
        let trimmed = title.trim_end();
        let without = trimmed.trim_end_matches('#');
        if without.len() == trimmed.len() {
            trimmed
        } else if without.is_empty() || without.ends_with([' ', '\t']) {
            without.trim_end()
        } else {
            trimmed
        }
    }
}
