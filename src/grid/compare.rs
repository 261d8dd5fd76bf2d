//! Comparator building blocks and the decorated stable sort
//!
//! These are the primitives every grid view is ordered with: build a
//! comparator from a value extractor, compose comparators, and sort without
//! disturbing the relative order of equal elements.

use std::cmp::Ordering;

use super::value::{compare_values, CellValue};

/// Build a comparator from a cell-value extractor.
///
/// With `ascending = false` the sign of every result is inverted.
pub fn compare_by<T, F>(extractor: F, ascending: bool) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> CellValue,
{
    move |a, b| {
        let ord = compare_values(&extractor(a), &extractor(b));
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    }
}

/// Combine comparators left to right: the first nonzero result wins.
pub fn comparing<T>(comparators: Vec<Box<dyn Fn(&T, &T) -> Ordering>>) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| {
        comparators
            .iter()
            .map(|cmp| cmp(a, b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

/// Sort a slice into a new vector, guaranteeing stability by decorating each
/// element with its original index and tiebreaking on it.
///
/// The direction flag inverts the combined result, index tiebreak included:
/// a descending sort is the exact reverse of the ascending one, so equal
/// elements come out in reversed original order as well. Callers relying on
/// "newest duplicate first" in descending views depend on this.
pub fn stable_sort<T, F>(items: &[T], comparator: F, ascending: bool) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut decorated: Vec<(usize, &T)> = items.iter().enumerate().collect();
    decorated.sort_by(|x, y| {
        let ord = comparator(x.1, y.1).then(x.0.cmp(&y.0));
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    decorated.into_iter().map(|(_, item)| item.clone()).collect()
}
