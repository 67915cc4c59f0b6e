//! Turns a TOC forest into styled output lines and an insertable document.
//!
//! The output mirrors the host editor's content model: a `doc` node holding `paragraph` nodes,
//! each carrying a `level` attribute and a list of styled `text` runs. Every heading becomes one
//! paragraph of three runs: the title, a computed leader, and a placeholder for the page number.

use crate::builder::TreeNode;
use crate::layout::{leader_text, LayoutConfig, RunStyle};
use serde::Serialize;

/// Default heading shown above the entries.
pub const DEFAULT_TITLE: &str = "TABLE OF CONTENTS";
/// Text standing in for the page number until the host editor substitutes a live field.
pub const PAGE_PLACEHOLDER: &str = " TDB";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
/// Formatting applied to a text run.
pub enum Mark {
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
    /// Size and family.
    TextStyle {
        /// Font attributes.
        attrs: TextStyleAttrs,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Attributes of a `textStyle` mark.
pub struct TextStyleAttrs {
    /// Size with unit, e.g. `18pt`.
    pub font_size: String,
    /// Font family, omitted to inherit the document default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "text")]
/// A run of text with its marks.
pub struct TextRun {
    /// Literal text.
    pub text: String,
    /// Formatting marks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl TextRun {
    #[must_use]
    /// Creates a run with marks derived from `style`.
    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        let mut marks = Vec::new();
        if style.bold {
            marks.push(Mark::Bold);
        }
        if style.italic {
            marks.push(Mark::Italic);
        }
        marks.push(Mark::TextStyle {
            attrs: TextStyleAttrs {
                font_size: format!("{}pt", style.font_size),
                font_family: style.font_family.map(str::to_string),
            },
        });
        Self {
            text: text.into(),
            marks,
        }
    }

    #[must_use]
    /// Whether the run carries `mark`.
    pub fn has_mark(&self, mark: &Mark) -> bool {
        self.marks.contains(mark)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// Attributes of a paragraph node.
pub struct ParagraphAttrs {
    /// Heading level the line was generated from; absent on spacer lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "paragraph")]
/// A block of the output document.
pub struct Paragraph {
    /// Block attributes.
    pub attrs: ParagraphAttrs,
    /// Text runs; empty for spacer lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<TextRun>,
}

impl Paragraph {
    #[must_use]
    /// An empty line separating groups of entries.
    pub fn spacer() -> Self {
        Self {
            attrs: ParagraphAttrs::default(),
            content: Vec::new(),
        }
    }

    #[must_use]
    /// Whether this is a spacer line.
    pub fn is_spacer(&self) -> bool {
        self.content.is_empty()
    }

    #[must_use]
    /// All run texts concatenated.
    pub fn text(&self) -> String {
        self.content.iter().map(|run| run.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "doc")]
/// Generated TOC, insertable into the host document.
pub struct TocDocument {
    /// Lines of the table of contents.
    pub content: Vec<Paragraph>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One laid-out TOC entry.
pub struct TocLine {
    /// Heading level of the entry.
    pub level: u8,
    /// Label followed by a space, styled for the level.
    pub title_run: TextRun,
    /// Repeated leader characters in the fixed leader style.
    pub leader_run: TextRun,
    /// Page-number placeholder, styled like the title.
    pub trailing_run: TextRun,
}

impl TocLine {
    #[must_use]
    /// Lays out a single tree node.
    pub fn for_node(node: &TreeNode, layout: &LayoutConfig) -> Self {
        let style = RunStyle::for_level(node.level);
        Self {
            level: node.level,
            title_run: TextRun::styled(format!("{} ", node.combined_label), style),
            leader_run: TextRun::styled(
                leader_text(&node.combined_label, node.level, layout),
                RunStyle::leader(),
            ),
            trailing_run: TextRun::styled(PAGE_PLACEHOLDER, style),
        }
    }

    #[must_use]
    /// Number of leader characters on this line.
    pub fn leader_count(&self) -> usize {
        self.leader_run.text.chars().count()
    }
}

impl From<TocLine> for Paragraph {
    fn from(line: TocLine) -> Self {
        Self {
            attrs: ParagraphAttrs {
                level: Some(line.level),
            },
            content: vec![line.title_run, line.leader_run, line.trailing_run],
        }
    }
}

#[must_use]
/// Lays out every node of the forest, depth-first pre-order.
pub fn layout_lines(forest: &[TreeNode], layout: &LayoutConfig) -> Vec<TocLine> {
    forest
        .iter()
        .flat_map(TreeNode::pre_order)
        .map(|node| TocLine::for_node(node, layout))
        .collect()
}

#[must_use]
/// Renders the forest into an insertable document.
///
/// The document opens with a spacer and the upper-cased title. Each top-level node is followed
/// by its descendants and then a spacer. An empty forest renders to an empty document.
pub fn render_toc(forest: &[TreeNode], layout: &LayoutConfig, title: &str) -> TocDocument {
    if forest.is_empty() {
        return TocDocument::default();
    }

    let mut content = vec![
        Paragraph::spacer(),
        Paragraph {
            attrs: ParagraphAttrs { level: Some(1) },
            content: vec![TextRun::styled(title.to_uppercase(), RunStyle::for_level(1))],
        },
    ];

    for root in forest {
        content.extend(
            root.pre_order()
                .into_iter()
                .map(|node| Paragraph::from(TocLine::for_node(node, layout))),
        );
        content.push(Paragraph::spacer());
    }

    TocDocument { content }
}

#[must_use]
/// Plain-text view of a rendered document, one line per paragraph.
pub fn render_text(document: &TocDocument) -> String {
    let mut out = String::new();
    for paragraph in &document.content {
        out.push_str(&paragraph.text());
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
