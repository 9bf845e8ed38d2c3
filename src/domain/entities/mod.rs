//! Domain entity definitions.

mod item;

pub use item::{Item, ItemId};
