//! Error types for the Order builder.

use crate::model::MenuError;
use thiserror::Error;

/// Recoverable rejections raised while assembling an order.
///
/// These never abort an order; the message is shown and the field is asked again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The pizza count is outside `1..=max`.
    #[error("Must be a number between 1 and {max}")]
    PizzaCount { max: u32 },

    /// The selection does not name a menu item.
    #[error(transparent)]
    Menu(#[from] MenuError),
}
