//! tocsmith: build a table of contents with dot leaders from a document's headings.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use tocsmith::builder::{build_forest, build_toc, TreeNode};
use tocsmith::config::Config;
use tocsmith::error::TocError;
use tocsmith::formats::markdown::MarkdownFormat;
use tocsmith::input;
use tocsmith::numbering::NumberingConfig;
use tocsmith::render::{render_text, render_toc};

#[derive(Clone, Copy, ValueEnum)]
enum InputKind {
    /// Editor document content tree as JSON
    Json,
    /// Markdown source
    Markdown,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputKind {
    /// Insertable document JSON
    #[default]
    Doc,
    /// Heading tree JSON
    Tree,
    /// Plain text lines
    Text,
}

#[derive(Parser)]
#[command(name = "tocsmith")]
#[command(about = "Table of contents with numbered headings and dot leaders", long_about = None)]
struct Args {
    /// Document to read; stdin when omitted
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Settings file (defaults to ./tocsmith.toml if present)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Input format; guessed from the file extension when omitted
    #[arg(long, short = 'i', value_enum)]
    input: Option<InputKind>,

    /// What to print
    #[arg(long, short = 'o', value_enum, default_value_t)]
    output: OutputKind,

    /// TOC title
    #[arg(long)]
    title: Option<String>,

    /// Deepest heading level to include
    #[arg(long, short = 'l')]
    levels: Option<u8>,

    /// Container width in pixels
    #[arg(long, short = 'w')]
    width: Option<u32>,

    /// Show formatted heading numbers
    #[arg(long, short = 'n')]
    numbers: bool,

    /// Only read nodes after the node with this text (JSON input)
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Stop reading at the node with this text (JSON input)
    #[arg(long, requires = "from")]
    to: Option<String>,
}

fn main() -> Result<(), TocError> {
    env_logger::init();
    let args = Args::parse();
    let mut cfg = Config::load(args.config.as_deref())?;

    // Override config with command line args
    if let Some(title) = &args.title {
        cfg.title.clone_from(title);
    }
    if let Some(levels) = args.levels {
        cfg.levels = levels;
    }
    if let Some(width) = args.width {
        cfg.container_width = width;
    }
    if args.numbers {
        cfg.show_heading_numbers = true;
    }

    let source = match &args.path {
        Some(path) => std::fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };

    let kind = args
        .input
        .unwrap_or_else(|| guess_input_kind(args.path.as_deref()));
    let numbering = cfg.numbering();
    let forest = match kind {
        InputKind::Json => json_forest(&source, &args, &numbering)?,
        InputKind::Markdown => {
            if args.from.is_some() {
                log::warn!("--from/--to only apply to JSON input, ignoring");
            }
            let headings = input::extract_markup_headings(&source, &MarkdownFormat)?;
            build_forest(&headings, &numbering)
        }
    };

    let rendered = match args.output {
        OutputKind::Doc => {
            let document = render_toc(&forest, &cfg.layout(), &cfg.title);
            serde_json::to_string_pretty(&document)?
        }
        OutputKind::Tree => serde_json::to_string_pretty(&forest)?,
        OutputKind::Text => render_text(&render_toc(&forest, &cfg.layout(), &cfg.title)),
    };
    println!("{rendered}");
    Ok(())
}

fn guess_input_kind(path: Option<&Path>) -> InputKind {
    match path.and_then(Path::extension).and_then(|e| e.to_str()) {
        Some("json") => InputKind::Json,
        _ => InputKind::Markdown,
    }
}

fn json_forest(
    source: &str,
    args: &Args,
    numbering: &NumberingConfig,
) -> Result<Vec<TreeNode>, TocError> {
    let document: Value = serde_json::from_str(source)?;
    let (Some(from), Some(to)) = (&args.from, &args.to) else {
        return Ok(build_toc(&document, numbering));
    };
    let section = input::slice_between(input::content_nodes(&document)?, from, to);
    log::debug!("Section between {from:?} and {to:?} holds {} nodes", section.len());
    Ok(build_toc(&Value::Array(section.to_vec()), numbering))
}
