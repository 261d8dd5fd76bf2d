//! Generic data-grid pipeline
//!
//! Every tabular screen in Mercury (collections, files, metadata views,
//! user lists) runs its items through the same pipeline: sort the fetched
//! collection, slice the ordered result into pages, and track which of the
//! displayed rows are selected. The pieces are independent and purely
//! functional over the item collection; nothing here performs I/O.

pub mod columns;
pub mod compare;
pub mod pagination;
pub mod selection;
pub mod sorting;
pub mod value;

pub use columns::{Column, ColumnSet, GridError};
pub use compare::{compare_by, comparing, stable_sort};
pub use pagination::Pager;
pub use selection::Selection;
pub use sorting::Sorter;
pub use value::{compare_values, CellValue};
