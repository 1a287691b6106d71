use crate::model::{Order, OrderId};

/// Append-only record of the orders completed in this session.
///
/// Lives only as long as the process; nothing is persisted.
#[derive(Debug, Default)]
pub struct OrderLog {
    orders: Vec<Order>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed order and returns its sequence id (1-based).
    pub fn append(&mut self, order: Order) -> OrderId {
        self.orders.push(order);
        OrderId(self.orders.len())
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        id.0.checked_sub(1).and_then(|index| self.orders.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrderId, &Order)> {
        self.orders
            .iter()
            .enumerate()
            .map(|(i, order)| (OrderId(i + 1), order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Fulfillment, Money, OrderLines};

    fn order(customer: &str) -> Order {
        Order::new(customer, Fulfillment::Pickup, OrderLines::new(), Money::ZERO)
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let mut log = OrderLog::new();
        assert_eq!(log.append(order("alice")), OrderId(1));
        assert_eq!(log.append(order("bob")), OrderId(2));
        assert_eq!(log.len(), 2);
        assert_eq!(log.get(OrderId(2)).unwrap().customer(), "bob");
        assert!(log.get(OrderId(0)).is_none());
        assert!(log.get(OrderId(3)).is_none());
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let mut log = OrderLog::new();
        log.append(order("alice"));
        log.append(order("bob"));
        let ids: Vec<_> = log.iter().map(|(id, o)| (id.to_string(), o.customer().to_string())).collect();
        assert_eq!(
            ids,
            [
                ("order_1".to_string(), "alice".to_string()),
                ("order_2".to_string(), "bob".to_string())
            ]
        );
    }
}
