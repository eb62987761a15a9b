//! Catalog Seeker - name search over in-memory product catalogs.
//!
//! Catalog Seeker holds a fixed list of product [`Record`]s in a [`Catalog`]
//! and finds records by name with one of two classic strategies:
//!
//! - [`linear_search`]: scans in order, exact case-sensitive match, O(n)
//! - [`binary_search`]: halves a sorted range, case-insensitive match, O(log n)
//!
//! # Quick Start
//!
//! ```rust
//! use catalog_seeker::{binary_search, linear_search, Catalog, Record};
//!
//! let mut catalog = Catalog::new(vec![
//!     Record::new(1, "Laptop", "Electronics"),
//!     Record::new(2, "T-Shirt", "Clothing"),
//!     Record::new(3, "Book", "Education"),
//!     Record::new(4, "Shoes", "Footwear"),
//!     Record::new(5, "Smartphone", "Electronics"),
//! ])?;
//!
//! // No ordering needed for a linear scan
//! let book = linear_search(catalog.records(), "Book");
//! assert_eq!(book.map(|r| r.id), Some(3));
//!
//! // Binary search needs the catalog sorted by name first
//! catalog.sort_by_name();
//! let book = binary_search(catalog.records(), "Book");
//! assert_eq!(book.map(|r| r.id), Some(3));
//!
//! assert!(linear_search(catalog.records(), "Tablet").is_none());
//! # Ok::<(), catalog_seeker::CatalogError>(())
//! ```
//!
//! # Search Semantics
//!
//! A missing record is `None`, never an error.
//!
//! The two strategies deliberately compare names differently. Linear search
//! uses exact equality, so `"book"` does not find `"Book"`. Binary search
//! compares ignoring case, because it shares its comparison with
//! [`Catalog::sort_by_name`], the sort that establishes its precondition.
//!
//! Binary search trusts its caller: input that is not sorted by name (ignoring
//! case) yields an unspecified result, possibly `None` for a present name.
//! It never re-sorts and never panics.
//!
//! # Measuring
//!
//! [`Strategy::search`] runs either strategy and returns a [`SearchReport`]
//! with the number of names compared:
//!
//! ```rust
//! use catalog_seeker::{Record, Strategy};
//!
//! let sorted: Vec<Record> = (0..1024)
//!     .map(|i| Record::new(i, format!("item-{i:04}"), "bulk"))
//!     .collect();
//!
//! let linear = Strategy::Linear.search(&sorted, "item-1000");
//! let binary = Strategy::Binary.search(&sorted, "item-1000");
//! assert_eq!(linear.comparisons, 1001);
//! assert!(binary.comparisons <= 11);
//! ```

mod catalog;
mod error;
mod ordering;
mod record;
mod search;

// Re-export public API
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use ordering::{compare_ignore_case, NameOrder};
pub use record::Record;
pub use search::{binary_search, linear_search, SearchReport, Strategy};
