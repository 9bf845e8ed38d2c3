//! Input validation error types.

use thiserror::Error;

/// Why a requested mutation was rejected.
///
/// The interactive layer discards these silently (the mutation simply does
/// not happen); they exist so the store's contracts are observable in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name was empty after trimming whitespace.
    #[error("item name is empty after trimming")]
    EmptyName,

    /// Quantity input did not parse as a non-negative integer.
    #[error("quantity is not a valid non-negative integer: {input:?}")]
    InvalidQuantity {
        /// The rejected raw input.
        input: String,
    },

    /// No item with the given id exists.
    #[error("unknown item id")]
    UnknownId,
}

impl ValidationError {
    /// Creates an invalid-quantity error.
    #[must_use]
    pub fn invalid_quantity(input: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            input: input.into(),
        }
    }
}
