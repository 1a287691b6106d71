//! A completed customer order.
//!
//! Orders are assembled by the [`OrderBuilder`](crate::order_builder::OrderBuilder)
//! and are immutable once built. The total is computed at construction, so
//! `total == lines subtotal + delivery charge (Delivery only)` always holds.
use crate::model::{MenuItem, Money};
use std::fmt::Display;

/// Type-safe identifier for Orders in the session log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(pub usize);

impl From<usize> for OrderId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// How the customer gets the pizzas.
///
/// Address and phone only exist for deliveries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fulfillment {
    Pickup,
    Delivery { address: String, phone: String },
}

impl Fulfillment {
    pub fn is_delivery(&self) -> bool {
        matches!(self, Fulfillment::Delivery { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Fulfillment::Pickup => "Pickup",
            Fulfillment::Delivery { .. } => "Delivery",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl OrderLine {
    pub fn subtotal(&self) -> Money {
        self.item.price * self.quantity
    }
}

/// Order lines, one per distinct item, in first-selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLines(Vec<OrderLine>);

impl OrderLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one of `item`, bumping the quantity if it is already ordered.
    pub fn add(&mut self, item: &MenuItem) {
        match self.0.iter_mut().find(|line| line.item.name == item.name) {
            Some(line) => line.quantity += 1,
            None => self.0.push(OrderLine {
                item: item.clone(),
                quantity: 1,
            }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderLine> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of pizzas across all lines.
    pub fn pizza_count(&self) -> u32 {
        self.0.iter().map(|line| line.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.0.iter().map(OrderLine::subtotal).sum()
    }
}

impl<'a> IntoIterator for &'a OrderLines {
    type Item = &'a OrderLine;
    type IntoIter = std::slice::Iter<'a, OrderLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    customer: String,
    fulfillment: Fulfillment,
    lines: OrderLines,
    delivery_charge: Money,
    total: Money,
}

impl Order {
    /// Creates a new Order and computes its total.
    ///
    /// # Arguments
    /// * `customer` - Customer name
    /// * `fulfillment` - Pickup or delivery details
    /// * `lines` - Aggregated pizza lines
    /// * `delivery_charge` - Shop surcharge; applied only for deliveries
    pub fn new(
        customer: impl Into<String>,
        fulfillment: Fulfillment,
        lines: OrderLines,
        delivery_charge: Money,
    ) -> Self {
        let delivery_charge = if fulfillment.is_delivery() {
            delivery_charge
        } else {
            Money::ZERO
        };
        let total = lines.subtotal() + delivery_charge;
        Self {
            customer: customer.into(),
            fulfillment,
            lines,
            delivery_charge,
            total,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn fulfillment(&self) -> &Fulfillment {
        &self.fulfillment
    }

    pub fn lines(&self) -> &OrderLines {
        &self.lines
    }

    /// Charge applied to this order; zero for pickups.
    pub fn delivery_charge(&self) -> Money {
        self.delivery_charge
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hawaiian() -> MenuItem {
        MenuItem::new("Hawaiian", Money::from_cents(850))
    }

    #[test]
    fn test_repeated_item_increments_quantity() {
        let mut lines = OrderLines::new();
        lines.add(&hawaiian());
        lines.add(&MenuItem::new("Italiano", Money::from_cents(1350)));
        lines.add(&hawaiian());

        assert_eq!(lines.len(), 2);
        let first = lines.iter().next().unwrap();
        assert_eq!(first.item.name, "Hawaiian");
        assert_eq!(first.quantity, 2);
        assert_eq!(lines.pizza_count(), 3);
    }

    #[test]
    fn test_pickup_total_has_no_delivery_charge() {
        let mut lines = OrderLines::new();
        lines.add(&hawaiian());
        lines.add(&hawaiian());

        let order = Order::new("alice", Fulfillment::Pickup, lines, Money::from_cents(300));
        assert_eq!(order.delivery_charge(), Money::ZERO);
        assert_eq!(order.total(), Money::from_cents(1700));
    }

    #[test]
    fn test_delivery_total_includes_charge() {
        let mut lines = OrderLines::new();
        lines.add(&hawaiian());
        lines.add(&hawaiian());

        let fulfillment = Fulfillment::Delivery {
            address: "12 queen st".to_string(),
            phone: "0211234567".to_string(),
        };
        let order = Order::new("alice", fulfillment, lines, Money::from_cents(300));
        assert_eq!(order.delivery_charge(), Money::from_cents(300));
        assert_eq!(order.total(), Money::from_cents(2000));
    }

    #[test]
    fn test_order_id_display() {
        assert_eq!(OrderId::from(3).to_string(), "order_3");
    }
}
