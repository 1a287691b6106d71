//! # Receipt Formatting
//!
//! Pure rendering of orders to fixed-width text. Every row is 58 columns:
//!
//! ```text
//! | Name: alice                                            |
//! | Order type: Pickup                                     |
//! |                                                        |
//! | Order summary:               Price each:     Subtotal: |
//! |     2x Hawaiian                   $ 8.50        $17.00 |
//! |                                                 ------ |
//! |                                          Total: $17.00 |
//! ```

use crate::model::{Fulfillment, Money, Order, OrderLog};

/// Width of the content between `| ` and ` |`.
pub const INNER_WIDTH: usize = 54;
/// Full width of a receipt row.
pub const RECEIPT_WIDTH: usize = INNER_WIDTH + 4;
/// Widest item name the summary column holds.
pub const NAME_WIDTH: usize = 22;
/// Largest amount the price, subtotal and charge columns hold.
pub const MAX_COLUMN_AMOUNT: Money = Money::from_cents(99_99);

fn row(content: &str) -> String {
    format!("| {:<width$} |\n", content, width = INNER_WIDTH)
}

/// Renders one order as a receipt block (each row newline-terminated).
///
/// Rows stay [`RECEIPT_WIDTH`] wide as long as item names fit [`NAME_WIDTH`]
/// and amounts stay within [`MAX_COLUMN_AMOUNT`]; shop loading enforces both.
pub fn format_receipt(order: &Order) -> String {
    let mut out = String::new();

    out.push_str(&row(&format!("Name: {}", order.customer())));
    out.push_str(&row(&format!("Order type: {}", order.fulfillment().label())));
    if let Fulfillment::Delivery { address, phone } = order.fulfillment() {
        out.push_str(&row(&format!("Delivery address: {address}")));
        out.push_str(&row(&format!("Customer phone number: {phone}")));
    }
    out.push_str(&row(""));
    out.push_str(&row(&format!(
        "Order summary:{:15}Price each:{:5}Subtotal:",
        "", ""
    )));
    for line in order.lines() {
        out.push_str(&row(&format!(
            "{:>5}x {:<name_width$}{:5}${:>5}{:8}${:>5}",
            line.quantity,
            line.item.name,
            "",
            line.item.price,
            "",
            line.subtotal(),
            name_width = NAME_WIDTH
        )));
    }
    if order.fulfillment().is_delivery() {
        out.push_str(&row(&format!(
            "{:4}Delivery charge{:29}${:>5}",
            "",
            "",
            order.delivery_charge()
        )));
    }
    out.push_str(&row(&format!("{:48}------", "")));
    out.push_str(&row(&format!("{:40} Total: ${}", "", order.total())));

    out
}

/// Renders every logged order, separated by divider rows.
pub fn format_order_log(log: &OrderLog) -> String {
    if log.is_empty() {
        return "No orders have been saved yet.\n".to_string();
    }

    let title = " ALL ORDERS ";
    let side = "-".repeat((RECEIPT_WIDTH - title.len()) / 2);
    let divider = format!("|{}|\n", "-".repeat(RECEIPT_WIDTH - 2));

    let mut out = format!("{side}{title}{side}\n");
    for (i, (_, order)) in log.iter().enumerate() {
        if i > 0 {
            out.push_str(&divider);
        }
        out.push_str(&format_receipt(order));
    }
    out.push_str(&"-".repeat(RECEIPT_WIDTH));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItem, OrderLines};

    fn lines() -> OrderLines {
        let mut lines = OrderLines::new();
        let hawaiian = MenuItem::new("Hawaiian", Money::from_cents(850));
        lines.add(&hawaiian);
        lines.add(&hawaiian);
        lines.add(&MenuItem::new("Seafood Deluxe", Money::from_cents(1350)));
        lines
    }

    fn delivery() -> Order {
        let fulfillment = Fulfillment::Delivery {
            address: "12 queen st".to_string(),
            phone: "0211234567".to_string(),
        };
        Order::new("alice", fulfillment, lines(), Money::from_cents(300))
    }

    #[test]
    fn test_every_row_is_fixed_width() {
        let receipt = format_receipt(&delivery());
        for line in receipt.lines() {
            assert_eq!(line.chars().count(), RECEIPT_WIDTH, "row: {line:?}");
            assert!(line.starts_with("| ") && line.ends_with(" |"));
        }
    }

    #[test]
    fn test_pickup_receipt_rows() {
        let order = Order::new("alice", Fulfillment::Pickup, lines(), Money::from_cents(300));
        let receipt = format_receipt(&order);
        let rows: Vec<_> = receipt.lines().map(|l| l.trim_end_matches(" |").trim_end()).collect();

        assert_eq!(
            rows,
            [
                "| Name: alice",
                "| Order type: Pickup",
                "|",
                "| Order summary:               Price each:     Subtotal:",
                "|     2x Hawaiian                   $ 8.50        $17.00",
                "|     1x Seafood Deluxe             $13.50        $13.50",
                "|                                                 ------",
                "|                                          Total: $30.50",
            ]
        );
    }

    #[test]
    fn test_delivery_receipt_shows_contact_and_charge() {
        let receipt = format_receipt(&delivery());
        assert!(receipt.contains("Order type: Delivery"));
        assert!(receipt.contains("Delivery address: 12 queen st"));
        assert!(receipt.contains("Customer phone number: 0211234567"));
        assert!(receipt.contains("    Delivery charge                             $ 3.00"));
        assert!(receipt.contains("Total: $33.50"));
    }

    #[test]
    fn test_widest_order_the_shop_allows_stays_fixed_width() {
        let widest = MenuItem::new("x".repeat(NAME_WIDTH), Money::from_cents(19_99));
        let mut lines = OrderLines::new();
        for _ in 0..5 {
            lines.add(&widest);
        }
        let fulfillment = Fulfillment::Delivery {
            address: "9".repeat(36),
            phone: "0".repeat(11),
        };
        let order = Order::new("a".repeat(48), fulfillment, lines, MAX_COLUMN_AMOUNT);
        assert_eq!(order.lines().iter().next().unwrap().subtotal(), Money::from_cents(99_95));

        for line in format_receipt(&order).lines() {
            assert_eq!(line.chars().count(), RECEIPT_WIDTH, "row: {line:?}");
        }
    }

    #[test]
    fn test_order_log_dividers() {
        let mut log = OrderLog::new();
        assert_eq!(format_order_log(&log), "No orders have been saved yet.\n");

        log.append(delivery());
        log.append(Order::new("bob", Fulfillment::Pickup, lines(), Money::from_cents(300)));
        let text = format_order_log(&log);
        let rows: Vec<_> = text.lines().collect();

        assert_eq!(rows[0], format!("{} ALL ORDERS {}", "-".repeat(23), "-".repeat(23)));
        assert_eq!(text.matches(&format!("|{}|", "-".repeat(56))).count(), 1);
        assert_eq!(*rows.last().unwrap(), "-".repeat(58));
        assert_eq!(text.matches("| Name: ").count(), 2);
    }
}
