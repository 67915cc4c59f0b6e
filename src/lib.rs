//! tocsmith: table-of-contents generation for heading-structured documents.
//!
//! Headings are pulled from a JSON document content tree or a markdown file, rebuilt into a
//! numbered tree, and laid out as TOC lines whose dot leaders are sized to reach a target column
//! without any font measurement.
//!
//! ```
//! use tocsmith::builder::build_toc;
//! use tocsmith::layout::LayoutConfig;
//! use tocsmith::numbering::NumberingConfig;
//! use tocsmith::render::{render_toc, DEFAULT_TITLE};
//!
//! let document = serde_json::json!({
//!     "type": "doc",
//!     "content": [
//!         { "type": "heading", "attrs": { "level": 1 }, "content": [{ "type": "text", "text": "Intro" }] },
//!         { "type": "heading", "attrs": { "level": 2 }, "content": [{ "type": "text", "text": "Background" }] },
//!     ]
//! });
//!
//! let forest = build_toc(&document, &NumberingConfig::default());
//! assert_eq!(forest[0].children[0].id, "1.1");
//!
//! let toc = render_toc(&forest, &LayoutConfig::default(), DEFAULT_TITLE);
//! assert_eq!(toc.content.len(), 5);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod formats;
pub mod heading;
pub mod input;
pub mod layout;
pub mod numbering;
pub mod render;
