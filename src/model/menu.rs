use crate::model::Money;
use serde::Deserialize;

/// A single orderable pizza.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Money,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Rejected menu selection. Recoverable: the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("Pizza selection number must correspond to those listed above (1-{len})")]
    OutOfRange { index: usize, len: usize },
}

/// The fixed catalog for a session.
///
/// Items are sorted by `(price, name)` on construction and never change
/// afterwards; customers pick them by their 1-based position.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(mut items: Vec<MenuItem>) -> Self {
        items.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| a.name.cmp(&b.name)));
        Self { items }
    }

    /// Looks up an item by its 1-based menu number.
    pub fn select(&self, number: usize) -> Result<&MenuItem, MenuError> {
        number
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .ok_or(MenuError::OutOfRange {
                index: number,
                len: self.items.len(),
            })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Menu listing shown before selections, one `NN: name ($price)` row per item.
    pub fn listing(&self) -> String {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{:02}: {} (${})", i + 1, item.name, item.price))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
