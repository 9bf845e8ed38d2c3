//! Reusable widgets.

mod footer_bar;
mod input;
mod item_list;

pub use footer_bar::{FooterBar, Hint};
pub use input::TextInput;
pub use item_list::ItemList;
