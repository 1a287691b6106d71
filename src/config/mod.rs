//! # Shop Configuration
//!
//! The menu, order limit and delivery charge are fixed for the lifetime of the
//! process. They ship inside the binary as `config/menu.toml` and are loaded
//! once at startup:
//!
//! ```rust
//! use order_collector::config;
//!
//! let shop = config::load_embedded().unwrap();
//! assert_eq!(shop.max_pizzas, 5);
//! assert_eq!(shop.menu.select(1).unwrap().name, "Beef & Onion");
//! ```
//!
//! Loading is two steps: [`ShopConfig`] is the raw deserialized document, and
//! [`ShopConfig::build`] validates it into a [`Shop`] with a sorted [`Menu`].

pub mod error;

pub use error::*;

use crate::model::{Menu, MenuItem, Money, Shop};
use crate::receipt::{MAX_COLUMN_AMOUNT, NAME_WIDTH};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

/// The shop document compiled into the binary.
pub const EMBEDDED_MENU: &str = include_str!("../../config/menu.toml");

/// Raw shop document as written in TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopConfig {
    pub name: String,
    pub max_pizzas: u32,
    pub delivery_charge: Money,
    pub menu: Vec<MenuItem>,
}

impl ShopConfig {
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Validates the document and sorts the menu.
    pub fn build(self) -> Result<Shop, ConfigError> {
        if self.max_pizzas == 0 {
            return Err(ConfigError::MaxPizzas(self.max_pizzas));
        }
        if self.menu.is_empty() {
            return Err(ConfigError::EmptyMenu);
        }
        let mut seen = HashSet::new();
        for item in &self.menu {
            if item.name.trim().is_empty() {
                return Err(ConfigError::BlankItemName);
            }
            if item.name.chars().count() > NAME_WIDTH {
                return Err(ConfigError::ItemNameTooLong {
                    name: item.name.clone(),
                    max: NAME_WIDTH,
                });
            }
            if !seen.insert(item.name.as_str()) {
                return Err(ConfigError::DuplicateItem(item.name.clone()));
            }
        }

        // A full order of the dearest pizza is the widest line the receipt prints.
        let dearest = self.menu.iter().map(|item| item.price).max().unwrap_or(Money::ZERO);
        let widest_line = dearest * self.max_pizzas;
        if widest_line > MAX_COLUMN_AMOUNT {
            return Err(ConfigError::AmountTooLarge {
                what: "max_pizzas x dearest price",
                amount: widest_line,
                max: MAX_COLUMN_AMOUNT,
            });
        }
        if self.delivery_charge > MAX_COLUMN_AMOUNT {
            return Err(ConfigError::AmountTooLarge {
                what: "delivery_charge",
                amount: self.delivery_charge,
                max: MAX_COLUMN_AMOUNT,
            });
        }

        let shop = Shop {
            name: self.name,
            menu: Menu::new(self.menu),
            max_pizzas: self.max_pizzas,
            delivery_charge: self.delivery_charge,
        };
        debug!(
            shop = %shop.name,
            items = shop.menu.len(),
            max_pizzas = shop.max_pizzas,
            delivery_charge = %shop.delivery_charge,
            "Shop loaded"
        );
        Ok(shop)
    }
}

/// Loads and validates a shop from a TOML document.
pub fn load_str(document: &str) -> Result<Shop, ConfigError> {
    ShopConfig::from_toml_str(document)?.build()
}

/// Loads the shop compiled into the binary.
pub fn load_embedded() -> Result<Shop, ConfigError> {
    load_str(EMBEDDED_MENU)
}
