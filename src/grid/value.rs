//! Cell values and primitive comparison
//!
//! Grid items are schema-flexible records; columns extract a [`CellValue`]
//! from each item so the sorting layer never touches item internals.
//! String comparison is case- and accent-insensitive, matching how the
//! Mercury UI orders names typed by users in different locales.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// A single sortable cell value extracted from a grid item.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent or null field
    Empty,
    Bool(bool),
    Number(f64),
    DateTime(DateTime<Utc>),
    Text(String),
}

impl CellValue {
    /// Rank used to order values of different variants against each other.
    fn variant_rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::DateTime(_) => 3,
            CellValue::Text(_) => 4,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<usize> for CellValue {
    fn from(n: usize) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(dt: DateTime<Utc>) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(CellValue::Empty, Into::into)
    }
}

/// Latin diacritic folding table, built lazily on first string comparison.
static ACCENT_FOLD: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let groups: &[(&str, char)] = &[
        ("àáâãäåāăą", 'a'),
        ("çćĉċč", 'c'),
        ("ďđ", 'd'),
        ("èéêëēĕėęě", 'e'),
        ("ĝğġģ", 'g'),
        ("ĥħ", 'h'),
        ("ìíîïĩīĭįı", 'i'),
        ("ĵ", 'j'),
        ("ķ", 'k'),
        ("ĺļľŀł", 'l'),
        ("ñńņňŉ", 'n'),
        ("òóôõöøōŏő", 'o'),
        ("ŕŗř", 'r'),
        ("śŝşš", 's'),
        ("ţťŧ", 't'),
        ("ùúûüũūŭůűų", 'u'),
        ("ŵ", 'w'),
        ("ýÿŷ", 'y'),
        ("źżž", 'z'),
    ];

    let mut table = HashMap::new();
    for (accented, base) in groups {
        for c in accented.chars() {
            table.insert(c, *base);
        }
    }
    table
});

/// Fold a string for case- and accent-insensitive comparison.
pub fn fold_for_compare(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| *ACCENT_FOLD.get(&c).unwrap_or(&c))
        .collect()
}

/// Compare two cell values.
///
/// Text compares case- and accent-insensitively; same-variant values use
/// natural ordering (NaN sorts last). Values of different variants are
/// ordered by a fixed variant rank so the result stays a total order.
pub fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Text(x), CellValue::Text(y)) => fold_for_compare(x).cmp(&fold_for_compare(y)),
        (CellValue::Number(x), CellValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or_else(|| match (x.is_nan(), y.is_nan()) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            })
        }
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        (CellValue::DateTime(x), CellValue::DateTime(y)) => x.cmp(y),
        (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
        _ => a.variant_rank().cmp(&b.variant_rank()),
    }
}
