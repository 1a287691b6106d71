//! Error types for loading the shop configuration.

use crate::model::Money;
use thiserror::Error;

/// Errors that can occur while loading or validating the shop configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed into a [`ShopConfig`](super::ShopConfig).
    #[error("Invalid shop configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The menu has no items.
    #[error("Menu must contain at least one item")]
    EmptyMenu,

    /// Two menu items share a name, which would make order lines ambiguous.
    #[error("Duplicate menu item: {0}")]
    DuplicateItem(String),

    /// A menu item has an empty name.
    #[error("Menu item names must not be blank")]
    BlankItemName,

    /// `max_pizzas` must allow at least one pizza per order.
    #[error("max_pizzas must be at least 1, got {0}")]
    MaxPizzas(u32),

    /// A menu item name is wider than the receipt's item column.
    #[error("Menu item name is longer than {max} characters: {name}")]
    ItemNameTooLong { name: String, max: usize },

    /// An amount the receipt must print would overflow its column.
    #[error("{what} of {amount} exceeds the receipt limit of {max}")]
    AmountTooLarge {
        what: &'static str,
        amount: Money,
        max: Money,
    },
}
