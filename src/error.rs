//! Error type shared by the input, configuration and CLI layers.
//!
//! The builder and renderer never fail: they log and degrade to a default. Only the edges
//! that touch files, parsers or user-supplied settings hand a `TocError` back to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
/// Failures raised while reading documents or settings.
pub enum TocError {
    /// Input was not a recognisable document content structure.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// Tree-sitter could not parse the source or compile a query.
    #[error("parse error: {0}")]
    Parse(String),
    /// A settings file could not be read or deserialised.
    #[error("config error: {0}")]
    Config(String),
    /// Underlying filesystem or stdin failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// JSON text could not be decoded or encoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
