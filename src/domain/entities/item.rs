//! Stock item entity.

use serde::{Deserialize, Serialize};

/// Unique item identifier.
///
/// Derived from the creation-time Unix timestamp in milliseconds; the
/// inventory bumps colliding values so ids stay unique for the lifetime of
/// the collection, including across reloads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One stock record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Item name, non-empty after trimming.
    pub name: String,
    /// Units on hand, never negative.
    pub stock_quantity: u32,
    /// Unit price. Stored for forward compatibility, unused by any feature.
    #[serde(default)]
    pub price: f64,
}

impl Item {
    /// Creates a new item with zero price.
    ///
    /// The name is stored trimmed. Validation of non-emptiness happens in
    /// [`Inventory::add`](crate::domain::Inventory::add); this constructor
    /// is deliberately infallible for deserialization and tests.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, stock_quantity: u32) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
            stock_quantity,
            price: 0.0,
        }
    }

    /// Returns true when the item has no units on hand.
    #[must_use]
    pub const fn is_out_of_stock(&self) -> bool {
        self.stock_quantity == 0
    }

    /// Returns true when the item has at least one unit on hand.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}
