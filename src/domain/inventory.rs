//! The authoritative item collection.

use chrono::Utc;
use tracing::debug;

use super::entities::{Item, ItemId};
use super::errors::ValidationError;

/// Which way a quantity adjustment goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Add one unit.
    Increase,
    /// Remove one unit; no-op at zero.
    Decrease,
}

/// Insertion-ordered collection of stock items.
///
/// Owns the only write path to the items. The presentation layer requests
/// mutations and re-derives its view model afterwards; it never reaches
/// into the collection directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an inventory from previously persisted items.
    #[must_use]
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Returns the items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the number of unique items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when no items are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counts items with at least one unit on hand.
    #[must_use]
    pub fn in_stock_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_in_stock()).count()
    }

    /// Returns true when at least one item has zero units on hand.
    #[must_use]
    pub fn has_zero_stock(&self) -> bool {
        self.items.iter().any(Item::is_out_of_stock)
    }

    /// Parses a quantity field into a non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidQuantity` for empty, non-numeric,
    /// or negative input.
    pub fn parse_quantity(input: &str) -> Result<u32, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::invalid_quantity(input));
        }
        trimmed
            .parse::<u32>()
            .map_err(|_| ValidationError::invalid_quantity(input))
    }

    /// Appends a new item with a fresh unique id and zero price.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` when the name trims to nothing.
    /// The collection is left unchanged on any error.
    pub fn add(&mut self, name: &str, quantity: u32) -> Result<ItemId, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let id = self.fresh_id();
        debug!(%id, name, quantity, "Adding item");
        self.items.push(Item::new(id, name, quantity));
        Ok(id)
    }

    /// Deletes the item with the given id.
    ///
    /// Returns true when an item was removed, false for an unknown id.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    /// Adjusts an item's quantity by one unit in the given direction.
    ///
    /// Increase is unbounded (saturating at the type's limit); decrease is
    /// a no-op at zero, preserving the never-negative invariant.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownId` when no item matches.
    pub fn adjust_quantity(
        &mut self,
        id: ItemId,
        direction: Direction,
    ) -> Result<(), ValidationError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ValidationError::UnknownId)?;

        match direction {
            Direction::Increase => item.stock_quantity = item.stock_quantity.saturating_add(1),
            Direction::Decrease => {
                if item.stock_quantity > 0 {
                    item.stock_quantity -= 1;
                }
            }
        }
        Ok(())
    }

    /// Replaces an item's name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` when the new name trims to
    /// nothing, or `ValidationError::UnknownId` when no item matches. The
    /// item is left unchanged on any error.
    pub fn rename(&mut self, id: ItemId, new_name: &str) -> Result<(), ValidationError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ValidationError::UnknownId)?;

        item.name = new_name.to_string();
        Ok(())
    }

    /// Removes every item whose quantity is zero.
    ///
    /// Returns the number of items removed. Idempotent: a second call with
    /// no intervening mutations removes nothing.
    pub fn clear_zero_stock(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(Item::is_in_stock);
        let removed = before - self.items.len();
        if removed > 0 {
            debug!(removed, "Cleared zero-stock items");
        }
        removed
    }

    // Creation-time millis, bumped past the current max on collision so
    // same-millisecond adds and clock regressions still yield unique ids.
    fn fresh_id(&self) -> ItemId {
        let candidate = Utc::now().timestamp_millis();
        let max_taken = self.items.iter().map(|item| item.id.0).max();
        match max_taken {
            Some(max) if candidate <= max => ItemId(max + 1),
            _ => ItemId(candidate),
        }
    }
}
