use crate::model::{Menu, Money};

/// Validated, immutable shop settings for a session.
///
/// Built once at startup by [`ShopConfig::build`](crate::config::ShopConfig::build).
#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    pub name: String,
    pub menu: Menu,
    /// Largest number of pizzas a single order may contain.
    pub max_pizzas: u32,
    /// Flat surcharge for delivery orders.
    pub delivery_charge: Money,
}
