//! Heading representation shared by every input format.
//!
//! A heading record is the flat, document-ordered view of a section title: its nesting level
//! and the plain text of its inline runs. The builder turns a list of these into a tree.

/// Placeholder used when a heading carries no visible text.
pub const NAMELESS: &str = "Nameless";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Flat heading entry extracted from a document, in document order.
pub struct HeadingRecord {
    /// Nesting depth in the document hierarchy (1 for top-level).
    pub level: u8,
    /// Heading text without markup, trimmed.
    pub text: String,
    /// Index of the heading in document order.
    pub position: usize,
}

impl HeadingRecord {
    #[must_use]
    /// Creates a record, normalising blank text to [`NAMELESS`].
    pub fn new(level: u8, text: &str, position: usize) -> Self {
        let trimmed = text.trim();
        let text = if trimmed.is_empty() {
            NAMELESS.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            level,
            text,
            position,
        }
    }
}
