//! Sorting engine
//!
//! Holds the `(order_by, ascending)` pair for one grid view and derives the
//! ordered item list from it. The derivation is pure: same items, columns,
//! and sort state always produce the same output, with no caching here.

use super::columns::{ColumnSet, GridError};
use super::compare::{compare_by, stable_sort};

/// Current sort key and direction for a grid view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sorter {
    order_by: String,
    ascending: bool,
}

impl Sorter {
    /// Start sorted ascending on the given default column.
    pub fn new(default_column: impl Into<String>) -> Self {
        Self {
            order_by: default_column.into(),
            ascending: true,
        }
    }

    pub fn order_by(&self) -> &str {
        &self.order_by
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Handle a header click: the active column flips direction, any other
    /// column becomes the new key and resets to ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.order_by == column {
            self.ascending = !self.ascending;
        } else {
            self.order_by = column.to_string();
            self.ascending = true;
        }
    }

    /// Derive the ordered view of `items` under the current sort state.
    pub fn ordered<T: Clone>(&self, items: &[T], columns: &ColumnSet<T>) -> Result<Vec<T>, GridError> {
        let column = columns.get(&self.order_by)?.clone();
        Ok(stable_sort(
            items,
            compare_by(move |item: &T| column.value_of(item), true),
            self.ascending,
        ))
    }
}
