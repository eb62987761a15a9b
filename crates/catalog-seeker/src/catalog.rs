//! The [`Catalog`] record container.
//!
//! A catalog is built once from a fixed list of records. Afterwards it can
//! only be read or reordered; records are never added, removed or changed.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::ordering::NameOrder;
use crate::record::Record;

/// An ordered, exclusively-owned sequence of [`Record`]s with unique ids.
///
/// Names may repeat. Scan order is the construction order until the catalog
/// is sorted.
///
/// # Example
///
/// ```
/// use catalog_seeker::{binary_search, linear_search, Catalog, Record};
///
/// let mut catalog = Catalog::new(vec![
///     Record::new(1, "Laptop", "Electronics"),
///     Record::new(2, "Book", "Education"),
/// ])?;
///
/// assert_eq!(linear_search(catalog.records(), "Book").map(|r| r.id), Some(2));
///
/// catalog.sort_by_name();
/// assert_eq!(binary_search(catalog.records(), "laptop").map(|r| r.id), Some(1));
/// # Ok::<(), catalog_seeker::CatalogError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Builds a catalog from a list of records.
    ///
    /// Returns [`CatalogError::DuplicateId`] for the first id seen twice.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId { id: record.id });
            }
        }
        debug!(records = records.len(), "catalog built");
        Ok(Catalog { records })
    }

    /// Returns the records in their current order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Consumes the catalog and returns its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Sorts ascending by name, ignoring case.
    ///
    /// This establishes the ordering [`binary_search`](crate::binary_search)
    /// requires. The sort is stable, so records with equal names keep their
    /// relative order.
    pub fn sort_by_name(&mut self) {
        self.sort_by_name_with(NameOrder::IgnoreCase);
    }

    /// Sorts ascending by name under the given order. Stable.
    pub fn sort_by_name_with(&mut self, order: NameOrder) {
        self.records.sort_by(|a, b| order.compare(&a.name, &b.name));
        debug!(records = self.records.len(), %order, "catalog sorted by name");
    }

    /// Returns this catalog sorted by name, ignoring case.
    pub fn sorted_by_name(mut self) -> Self {
        self.sort_by_name();
        self
    }

    /// Returns `true` if the records are ascending by name under `order`.
    ///
    /// This is an O(n) check. Searches never call it.
    pub fn is_sorted_by_name(&self, order: NameOrder) -> bool {
        order.is_sorted(self.records.iter().map(|r| r.name.as_str()))
    }
}

impl AsRef<[Record]> for Catalog {
    fn as_ref(&self) -> &[Record] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
