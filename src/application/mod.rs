//! Application layer deriving what the UI shows from store state.

/// View-model derivation.
pub mod view_model;

pub use view_model::{
    LOW_STOCK_THRESHOLD, SortOrder, StockFilter, ViewModel, derive_view_model,
};
