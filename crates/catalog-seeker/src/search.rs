//! Linear and binary name search.
//!
//! Both searches are pure: they borrow the records, never reorder them, and
//! report absence as `None`.
//!
//! | Strategy | Precondition | Name comparison | Cost |
//! |----------|--------------|-----------------|------|
//! | [`linear_search`] | none | exact, case-sensitive | O(n) |
//! | [`binary_search`] | sorted by name, ignoring case | case-insensitive | O(log n) |

use std::cmp::Ordering;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::CatalogError;
use crate::ordering::compare_ignore_case;
use crate::record::Record;

/// Returns the first record whose name equals `target_name` exactly.
///
/// Records are scanned in the given order, so with duplicate names the
/// earliest one wins. No ordering is required.
///
/// # Example
///
/// ```
/// use catalog_seeker::{linear_search, Record};
///
/// let records = vec![
///     Record::new(1, "Laptop", "Electronics"),
///     Record::new(2, "Book", "Education"),
/// ];
///
/// assert_eq!(linear_search(&records, "Book").map(|r| r.id), Some(2));
/// assert!(linear_search(&records, "book").is_none());
/// ```
pub fn linear_search<'a>(records: &'a [Record], target_name: &str) -> Option<&'a Record> {
    scan(records, target_name).0
}

/// Returns a record whose name equals `target_name`, ignoring case.
///
/// `sorted_records` must be ascending by name under
/// [`NameOrder::IgnoreCase`](crate::NameOrder::IgnoreCase), which is what
/// [`Catalog::sort_by_name`](crate::Catalog::sort_by_name) produces. The
/// ordering is not checked. On unsorted input the result may be wrong or
/// `None` even when a matching record exists, but the call never panics.
///
/// When several records share the name, whichever one the search lands on
/// first is returned.
///
/// # Example
///
/// ```
/// use catalog_seeker::{binary_search, Record};
///
/// let sorted = vec![
///     Record::new(3, "Book", "Education"),
///     Record::new(1, "Laptop", "Electronics"),
///     Record::new(4, "Shoes", "Footwear"),
/// ];
///
/// assert_eq!(binary_search(&sorted, "LAPTOP").map(|r| r.id), Some(1));
/// assert!(binary_search(&sorted, "Tablet").is_none());
/// ```
pub fn binary_search<'a>(sorted_records: &'a [Record], target_name: &str) -> Option<&'a Record> {
    bisect(sorted_records, target_name).0
}

fn scan<'a>(records: &'a [Record], target_name: &str) -> (Option<&'a Record>, usize) {
    let mut comparisons = 0;
    for record in records {
        comparisons += 1;
        if record.name == target_name {
            return (Some(record), comparisons);
        }
    }
    (None, comparisons)
}

fn bisect<'a>(records: &'a [Record], target_name: &str) -> (Option<&'a Record>, usize) {
    // Candidates are records[low..high]; `high` is one past the inclusive
    // upper bound, so `mid` is floor((low + inclusive_high) / 2).
    let mut low = 0;
    let mut high = records.len();
    let mut comparisons = 0;

    while low < high {
        let mid = low + (high - 1 - low) / 2;
        let record = &records[mid];
        comparisons += 1;

        let ordering = compare_ignore_case(&record.name, target_name);
        trace!(low, high, mid, name = %record.name, ?ordering, "binary search probe");

        match ordering {
            Ordering::Equal => return (Some(record), comparisons),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    (None, comparisons)
}

/// A search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Strategy {
    /// [`linear_search`]: exact match, any order.
    Linear,
    /// [`binary_search`]: case-insensitive match, sorted input.
    Binary,
}

impl Strategy {
    /// Every strategy, in the order they are usually demonstrated.
    pub const ALL: [Strategy; 2] = [Strategy::Linear, Strategy::Binary];

    /// Runs this strategy and reports how many names it compared.
    ///
    /// The match is always the same record the plain function returns.
    pub fn search<'a>(self, records: &'a [Record], target_name: &str) -> SearchReport<'a> {
        let (record, comparisons) = match self {
            Strategy::Linear => scan(records, target_name),
            Strategy::Binary => bisect(records, target_name),
        };
        debug!(
            strategy = %self,
            query = target_name,
            found = record.is_some(),
            comparisons,
            size = records.len(),
            "search finished"
        );
        SearchReport {
            strategy: self,
            record,
            comparisons,
        }
    }

    /// Returns `true` if this strategy requires input sorted by name.
    pub fn requires_sorted(self) -> bool {
        matches!(self, Strategy::Binary)
    }

    /// Returns the time complexity in big-O notation.
    pub fn complexity(self) -> &'static str {
        match self {
            Strategy::Linear => "O(n)",
            Strategy::Binary => "O(log n)",
        }
    }

    /// Returns the display name of this strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Linear => "linear",
            Strategy::Binary => "binary",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Strategy::Linear),
            "binary" => Ok(Strategy::Binary),
            _ => Err(CatalogError::UnknownStrategy(s.to_string())),
        }
    }
}

/// The outcome of a [`Strategy::search`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport<'a> {
    /// Strategy that produced this report.
    pub strategy: Strategy,
    /// The matching record, if any.
    pub record: Option<&'a Record>,
    /// Number of record names compared against the target.
    pub comparisons: usize,
}

impl SearchReport<'_> {
    /// Returns `true` if a record matched.
    pub fn is_found(&self) -> bool {
        self.record.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Record> {
        vec![
            Record::new(1, "Laptop", "Electronics"),
            Record::new(2, "T-Shirt", "Clothing"),
            Record::new(3, "Book", "Education"),
            Record::new(4, "Shoes", "Footwear"),
            Record::new(5, "Smartphone", "Electronics"),
        ]
    }

    fn sorted_products() -> Vec<Record> {
        vec![
            Record::new(3, "Book", "Education"),
            Record::new(1, "Laptop", "Electronics"),
            Record::new(4, "Shoes", "Footwear"),
            Record::new(5, "Smartphone", "Electronics"),
            Record::new(2, "T-Shirt", "Clothing"),
        ]
    }

    #[test]
    fn linear_finds_record() {
        let records = products();
        let found = linear_search(&records, "Book").unwrap();
        assert_eq!(found.id, 3);
        assert_eq!(found.category, "Education");
    }

    #[test]
    fn linear_not_found() {
        assert!(linear_search(&products(), "Tablet").is_none());
    }

    #[test]
    fn linear_is_case_sensitive() {
        assert!(linear_search(&products(), "book").is_none());
        assert!(linear_search(&products(), "BOOK").is_none());
    }

    #[test]
    fn linear_first_duplicate_wins() {
        let records = vec![
            Record::new(7, "Pen", "Office"),
            Record::new(8, "Pen", "Art"),
            Record::new(9, "Pen", "Office"),
        ];
        assert_eq!(linear_search(&records, "Pen").unwrap().id, 7);
    }

    #[test]
    fn linear_empty_target_matches_only_empty_name() {
        assert!(linear_search(&products(), "").is_none());

        let records = vec![
            Record::new(1, "Laptop", "Electronics"),
            Record::new(2, "", "Unnamed"),
        ];
        assert_eq!(linear_search(&records, "").unwrap().id, 2);
    }

    #[test]
    fn linear_empty_catalog() {
        assert!(linear_search(&[], "Book").is_none());
    }

    #[test]
    fn binary_finds_record() {
        let sorted = sorted_products();
        assert_eq!(binary_search(&sorted, "Book").unwrap().id, 3);
        assert_eq!(binary_search(&sorted, "T-Shirt").unwrap().id, 2);
        assert_eq!(binary_search(&sorted, "Shoes").unwrap().id, 4);
    }

    #[test]
    fn binary_ignores_case() {
        let sorted = sorted_products();
        assert_eq!(binary_search(&sorted, "book").unwrap().id, 3);
        assert_eq!(binary_search(&sorted, "SMARTPHONE").unwrap().id, 5);
    }

    #[test]
    fn binary_not_found() {
        let sorted = sorted_products();
        assert!(binary_search(&sorted, "tablet").is_none());
        assert!(binary_search(&sorted, "Aardvark").is_none());
        assert!(binary_search(&sorted, "Zebra").is_none());
    }

    #[test]
    fn binary_empty_catalog() {
        assert!(binary_search(&[], "Book").is_none());
        let report = Strategy::Binary.search(&[], "Book");
        assert_eq!(report.comparisons, 0);
    }

    #[test]
    fn binary_does_not_match_expanded_uppercase() {
        let sorted = vec![
            Record::new(1, "FILE", "Office"),
            Record::new(2, "STRASSE", "Maps"),
        ];
        assert!(binary_search(&sorted, "straße").is_none());
        assert!(binary_search(&sorted, "\u{FB01}le").is_none());
        assert_eq!(binary_search(&sorted, "strasse").unwrap().id, 2);
    }

    #[test]
    fn binary_single_element() {
        let one = vec![Record::new(1, "Laptop", "Electronics")];
        let hit = Strategy::Binary.search(&one, "laptop");
        assert_eq!(hit.record.map(|r| r.id), Some(1));
        assert_eq!(hit.comparisons, 1);

        for target in ["Apple", "Zebra"] {
            let miss = Strategy::Binary.search(&one, target);
            assert!(!miss.is_found());
            assert_eq!(miss.comparisons, 1);
        }
    }

    #[test]
    fn binary_duplicates_return_one_of_them() {
        let sorted = vec![
            Record::new(1, "Apple", "Fruit"),
            Record::new(2, "book", "A"),
            Record::new(3, "Book", "B"),
            Record::new(4, "BOOK", "C"),
            Record::new(5, "Zebra", "Toy"),
        ];
        let found = binary_search(&sorted, "Book").unwrap();
        assert!([2, 3, 4].contains(&found.id));
    }

    #[test]
    fn binary_on_unsorted_input_does_not_panic() {
        let mut reversed = sorted_products();
        reversed.reverse();
        for record in products() {
            let _ = binary_search(&reversed, &record.name);
        }
        let _ = binary_search(&reversed, "");
    }

    #[test]
    fn binary_midpoint_sequence() {
        let sorted = sorted_products();
        // mid 2 (Shoes) then mid 0 (Book)
        assert_eq!(Strategy::Binary.search(&sorted, "Book").comparisons, 2);
        // mid 2, 3, 4 then the range empties
        assert_eq!(Strategy::Binary.search(&sorted, "tablet").comparisons, 3);
    }

    #[test]
    fn linear_comparison_counts() {
        let records = products();
        assert_eq!(Strategy::Linear.search(&records, "Laptop").comparisons, 1);
        assert_eq!(Strategy::Linear.search(&records, "Book").comparisons, 3);
        assert_eq!(Strategy::Linear.search(&records, "Tablet").comparisons, 5);
    }

    #[test]
    fn report_matches_plain_functions() {
        let records = products();
        let sorted = sorted_products();
        for name in ["Book", "Tablet", "book", "T-Shirt", ""] {
            assert_eq!(
                Strategy::Linear.search(&records, name).record,
                linear_search(&records, name)
            );
            assert_eq!(
                Strategy::Binary.search(&sorted, name).record,
                binary_search(&sorted, name)
            );
        }
    }

    #[test]
    fn strategy_parse_and_display() {
        assert_eq!("linear".parse::<Strategy>(), Ok(Strategy::Linear));
        assert_eq!("Binary".parse::<Strategy>(), Ok(Strategy::Binary));
        assert_eq!(
            "hash".parse::<Strategy>(),
            Err(CatalogError::UnknownStrategy("hash".to_string()))
        );
        assert_eq!(Strategy::Linear.to_string(), "linear");
        assert_eq!(Strategy::Binary.to_string(), "binary");
    }

    #[test]
    fn strategy_metadata() {
        assert_eq!(Strategy::Linear.complexity(), "O(n)");
        assert_eq!(Strategy::Binary.complexity(), "O(log n)");
        assert!(!Strategy::Linear.requires_sorted());
        assert!(Strategy::Binary.requires_sorted());
        assert_eq!(Strategy::ALL, [Strategy::Linear, Strategy::Binary]);
    }
}
