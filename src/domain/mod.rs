//! Domain layer with the core inventory entities and operations.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// The authoritative item collection.
pub mod inventory;

pub use entities::{Item, ItemId};
pub use errors::ValidationError;
pub use inventory::{Direction, Inventory};
