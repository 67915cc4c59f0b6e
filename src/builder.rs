//! Rebuilds the heading hierarchy from a flat, document-ordered list of headings.
//!
//! Headings are first laid out in an index arena where each entry records its parent and child
//! indices, then folded into an owned tree once the pass is complete. Parentage is decided by the
//! most recent heading seen at each shallower level, so a level-4 heading with no level-3 above
//! it still attaches to the nearest level-2 ancestor.

use crate::heading::HeadingRecord;
use crate::input;
use crate::numbering::{format_number, LevelCounters, NumberingConfig, MAX_LEVEL};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// A heading placed in the table-of-contents tree.
pub struct TreeNode {
    /// Structural id in numeric-dot form, e.g. `2.1`.
    pub id: String,
    /// User-facing formatted id, present only when numbering display is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_id: Option<String>,
    /// Heading text.
    pub name: String,
    /// `display_id - name`, or just the name when there is no display id.
    pub combined_label: String,
    /// Heading level copied from the source document.
    pub level: u8,
    /// Directly nested headings in document order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    #[must_use]
    /// This node followed by all of its descendants, depth-first pre-order.
    pub fn pre_order(&self) -> Vec<&TreeNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.pre_order());
        }
        out
    }
}

/// Arena slot used while the tree is still being assembled.
struct Entry {
    node: TreeNode,
    children_indices: Vec<usize>,
}

#[must_use]
/// Builds the TOC forest straight from a document content tree.
///
/// Malformed input is logged and yields an empty forest; this never fails.
pub fn build_toc(document: &Value, config: &NumberingConfig) -> Vec<TreeNode> {
    match input::extract_headings(document, config.max_level()) {
        Ok(headings) => build_forest(&headings, config),
        Err(e) => {
            log::error!("Cannot build table of contents: {e}");
            Vec::new()
        }
    }
}

#[must_use]
/// Builds the TOC forest from heading records.
///
/// Headings deeper than the configured level are dropped. Counters live only for the duration
/// of this call, so identical input always produces identical ids.
pub fn build_forest(headings: &[HeadingRecord], config: &NumberingConfig) -> Vec<TreeNode> {
    let max_level = config.max_level();
    let mut included: Vec<&HeadingRecord> = headings
        .iter()
        .filter(|h| (1..=max_level).contains(&h.level))
        .collect();
    included.sort_by_key(|h| h.position);

    let mut arena: Vec<Entry> = Vec::with_capacity(included.len());
    let mut roots = Vec::new();
    // Indexed by level; slot 0 is unused.
    let mut last_seen: [Option<usize>; MAX_LEVEL as usize + 1] = [None; MAX_LEVEL as usize + 1];
    let mut standard_counters = LevelCounters::new();
    let mut display_counters = LevelCounters::new();

    for heading in included {
        let level = heading.level;
        let parent_index = (1..usize::from(level))
            .rev()
            .find_map(|l| last_seen[l]);

        if parent_index.is_none() && level > 1 {
            log::warn!(
                "Heading {:?} at level {level} has no ancestor, placing it at the top level",
                heading.text
            );
        }

        let parent = parent_index.map(|i| &arena[i].node);
        let id = generate_standard_id(
            level,
            parent.map(|p| p.id.as_str()),
            &mut standard_counters,
        );
        let display_id = config.display_enabled.then(|| {
            generate_heading_id(
                level,
                parent.and_then(|p| p.display_id.as_deref()),
                &mut display_counters,
                config,
            )
        });
        let combined_label = match &display_id {
            Some(display) => format!("{display} - {}", heading.text),
            None => heading.text.clone(),
        };

        let index = arena.len();
        arena.push(Entry {
            node: TreeNode {
                id,
                display_id,
                name: heading.text.clone(),
                combined_label,
                level,
                children: Vec::new(),
            },
            children_indices: Vec::new(),
        });

        match parent_index {
            Some(p) => arena[p].children_indices.push(index),
            None => roots.push(index),
        }

        last_seen[usize::from(level)] = Some(index);
        for slot in &mut last_seen[usize::from(level) + 1..] {
            *slot = None;
        }
    }

    roots.into_iter().map(|i| fold(&mut arena, i)).collect()
}

fn fold(arena: &mut [Entry], index: usize) -> TreeNode {
    let children_indices = std::mem::take(&mut arena[index].children_indices);
    let children = children_indices
        .into_iter()
        .map(|child| fold(arena, child))
        .collect();
    let mut node = std::mem::take(&mut arena[index].node);
    node.children = children;
    node
}

/// Produces the structural id for the next heading at `level`.
///
/// The per-level counter is bumped on every call and is never reset by a change of parent.
pub fn generate_standard_id(
    level: u8,
    parent_id: Option<&str>,
    counters: &mut LevelCounters,
) -> String {
    let count = counters.bump(level);
    match parent_id {
        Some(parent) if level > 1 => format!("{parent}.{count}"),
        _ => count.to_string(),
    }
}

/// Produces the formatted display id for the next heading at `level`.
///
/// Mirrors [`generate_standard_id`] but renders the counter in the level's numeral scheme and
/// joins it to the parent's formatted id with the configured separator.
pub fn generate_heading_id(
    level: u8,
    parent_display_id: Option<&str>,
    counters: &mut LevelCounters,
    config: &NumberingConfig,
) -> String {
    let count = counters.bump(level);
    let numeral = format_number(count, config.scheme_for(level));
    match parent_display_id {
        Some(parent) if level > 1 => format!("{parent}{}{numeral}", config.separator.as_char()),
        _ => numeral,
    }
}

#[cfg(test)]
#[path = "tests/builder.rs"]
mod tests;
