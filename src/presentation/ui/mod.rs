//! UI screens.

mod app;
mod inventory_screen;

pub use app::App;
pub use inventory_screen::{Focus, InventoryAction, InventoryScreen};
