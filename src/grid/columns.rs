//! Column descriptors for grid views
//!
//! A [`ColumnSet`] maps stable string keys to value extractors. Sort state
//! refers to columns by key; resolving an unknown key is a configuration
//! error and fails fast with a typed error instead of panicking.

use std::fmt;
use std::sync::Arc;

use super::value::CellValue;

/// Errors produced by the grid pipeline.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Unknown column: {key}")]
    UnknownColumn { key: String },
}

/// A single sortable column: key, display label, and value extractor.
#[derive(Clone)]
pub struct Column<T> {
    pub key: String,
    pub label: String,
    extractor: Arc<dyn Fn(&T) -> CellValue + Send + Sync>,
}

impl<T> Column<T> {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        extractor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            extractor: Arc::new(extractor),
        }
    }

    /// Extract the sortable value from an item.
    pub fn value_of(&self, item: &T) -> CellValue {
        (self.extractor)(item)
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish()
    }
}

/// Ordered collection of columns, looked up by key.
#[derive(Clone, Debug)]
pub struct ColumnSet<T> {
    columns: Vec<Column<T>>,
}

impl<T> ColumnSet<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self { columns }
    }

    /// Resolve a column by key.
    pub fn get(&self, key: &str) -> Result<&Column<T>, GridError> {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| GridError::UnknownColumn { key: key.to_string() })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }

    /// Columns in declaration order, for header rendering.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
