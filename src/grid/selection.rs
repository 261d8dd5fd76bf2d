//! Selection engine
//!
//! Tracks which rows of a grid view are checked or opened, by opaque item
//! key. One state machine serves both the single-select screens (detail
//! drawers) and the multi-select ones (bulk actions); the mode is fixed at
//! construction.

/// Selection state over opaque item keys, preserving insertion order.
#[derive(Clone, Debug, Default)]
pub struct Selection<K: PartialEq + Clone> {
    selected: Vec<K>,
    allow_multiple: bool,
}

impl<K: PartialEq + Clone> Selection<K> {
    /// Single-select mode: selecting replaces the previous selection.
    pub fn single() -> Self {
        Self {
            selected: Vec::new(),
            allow_multiple: false,
        }
    }

    /// Multi-select mode: selections accumulate in insertion order.
    pub fn multiple() -> Self {
        Self {
            selected: Vec::new(),
            allow_multiple: true,
        }
    }

    pub fn allow_multiple(&self) -> bool {
        self.allow_multiple
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    pub fn select(&mut self, key: K) {
        if self.allow_multiple {
            if !self.selected.contains(&key) {
                self.selected.push(key);
            }
        } else {
            self.selected = vec![key];
        }
    }

    pub fn deselect(&mut self, key: &K) {
        self.selected.retain(|k| k != key);
    }

    pub fn toggle(&mut self, key: K) {
        if self.is_selected(&key) {
            self.deselect(&key);
        } else {
            self.select(key);
        }
    }

    /// Replace the selection with the whole collection. No-op in single
    /// mode, where "select all" has no meaning.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = K>) {
        if !self.allow_multiple {
            return;
        }
        self.selected = keys.into_iter().collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// All selected keys in insertion order.
    pub fn selected(&self) -> &[K] {
        &self.selected
    }

    /// The sole selected key, for single-select consumers.
    pub fn single_selected(&self) -> Option<&K> {
        self.selected.first()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
