//! Name comparison rules.
//!
//! Provides [`NameOrder`] for choosing how record names are ordered, and
//! [`compare_ignore_case`], the comparison binary search relies on.
//!
//! Both rules are ordinal: characters compare by code point, never by locale
//! collation.

use std::cmp::Ordering;

/// How two record names are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameOrder {
    /// Compare the uppercase mapping of each character ordinally.
    #[default]
    IgnoreCase,
    /// Compare the raw characters ordinally.
    CaseSensitive,
}

impl NameOrder {
    /// Compares two names under this order.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            NameOrder::IgnoreCase => compare_ignore_case(a, b),
            NameOrder::CaseSensitive => a.cmp(b),
        }
    }

    /// Returns `true` if `names` is ascending (non-strictly) under this order.
    pub fn is_sorted<'a, I>(self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut names = names.into_iter();
        let Some(mut prev) = names.next() else {
            return true;
        };
        for name in names {
            if self.compare(prev, name) == Ordering::Greater {
                return false;
            }
            prev = name;
        }
        true
    }

    /// Returns the display name of this order.
    pub fn as_str(self) -> &'static str {
        match self {
            NameOrder::IgnoreCase => "ignore-case",
            NameOrder::CaseSensitive => "case-sensitive",
        }
    }
}

impl std::fmt::Display for NameOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two strings ordinally after folding each character to uppercase.
///
/// `"book"`, `"Book"` and `"BOOK"` compare equal. Folding is one character to
/// one character: a character whose uppercase form expands (such as `'ß'` to
/// `"SS"`) is kept as is, so `"straße"` and `"STRASSE"` differ.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    let a = a.chars().map(fold_case);
    let b = b.chars().map(fold_case);
    a.cmp(b)
}

fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}
