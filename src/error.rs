//! Top-level error for the order desk binary.

use crate::config::ConfigError;
use crate::prompt::PromptError;
use thiserror::Error;

/// Failures that end the program with a non-zero exit code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}
