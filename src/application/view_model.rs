//! Pure derivation of the displayed list from store state.

use crate::domain::{Inventory, Item};

/// Quantity below which an item counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Which subset of the collection is shown.
///
/// Filters are mutually exclusive and always evaluated against the full
/// collection, never against a previously filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockFilter {
    /// Every item.
    #[default]
    All,
    /// Items with quantity > 0.
    InStock,
    /// Items with quantity < [`LOW_STOCK_THRESHOLD`].
    LowStock,
}

impl StockFilter {
    /// Returns the next filter in the cycle All → InStock → LowStock → All.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::InStock,
            Self::InStock => Self::LowStock,
            Self::LowStock => Self::All,
        }
    }

    /// Returns the control label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
        }
    }

    fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::InStock => item.stock_quantity > 0,
            Self::LowStock => item.stock_quantity < LOW_STOCK_THRESHOLD,
        }
    }
}

/// How the filtered list is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Insertion order, explicitly left untouched.
    #[default]
    Default,
    /// Lexicographic ascending by name, case-insensitive, stable.
    NameAsc,
    /// Descending by quantity; ties keep their relative order.
    QuantityDesc,
}

impl SortOrder {
    /// Returns the next order in the cycle Default → NameAsc → QuantityDesc.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Default => Self::NameAsc,
            Self::NameAsc => Self::QuantityDesc,
            Self::QuantityDesc => Self::Default,
        }
    }

    /// Returns the control label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::NameAsc => "Name (A-Z)",
            Self::QuantityDesc => "Most Stock",
        }
    }
}

/// The derived list and summary values shown to the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    /// The filtered, sorted items to display.
    pub entries: Vec<Item>,
    /// Unique item count over the full collection.
    pub total_items: usize,
    /// Items with quantity > 0, shown on the In-Stock filter control.
    pub in_stock_count: usize,
    /// Whether clearing zero-stock items would remove anything.
    pub can_clear_zero: bool,
}

/// Computes the display list from the full collection and view settings.
///
/// Pure and side-effect-free; the orchestrator calls this after every
/// mutation and on every filter or sort change. Sorting is stable in all
/// modes, and `SortOrder::Default` performs no reordering at all.
#[must_use]
pub fn derive_view_model(inventory: &Inventory, filter: StockFilter, sort: SortOrder) -> ViewModel {
    let mut entries: Vec<Item> = inventory
        .items()
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();

    match sort {
        SortOrder::Default => {}
        SortOrder::NameAsc => {
            entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortOrder::QuantityDesc => {
            entries.sort_by(|a, b| b.stock_quantity.cmp(&a.stock_quantity));
        }
    }

    ViewModel {
        entries,
        total_items: inventory.len(),
        in_stock_count: inventory.in_stock_count(),
        can_clear_zero: inventory.has_zero_stock(),
    }
}
