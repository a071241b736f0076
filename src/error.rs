//! Error types for termpick
//!
//! Library errors use `thiserror`. Cancellation is not an error: sessions
//! report it through [`crate::runtime::Outcome::Cancelled`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for termpick operations
pub type PromptResult<T> = Result<T, PromptError>;

/// Main error type for prompt sessions
#[derive(Error, Debug)]
pub enum PromptError {
    /// The terminal refused to enter raw input mode; no session can start
    #[error("failed to enable raw terminal mode: {0}")]
    RawMode(#[source] std::io::Error),

    /// IO error while reading keys or drawing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A tree session was started without any root nodes
    #[error("tree has no root nodes to display")]
    EmptyTree,

    /// The loader failed to produce the root nodes
    #[error("failed to load root nodes: {0:#}")]
    RootLoad(anyhow::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}
