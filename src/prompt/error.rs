//! Error types for the console prompt.

use thiserror::Error;

/// Unrecoverable console failures.
///
/// Malformed input never shows up here; it is handled by re-prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
