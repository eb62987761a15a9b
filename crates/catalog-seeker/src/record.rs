//! The catalog entry type.

use std::fmt;

/// A single product entry in a catalog.
///
/// `name` is the search key. `category` is carried along for display and is
/// never consulted by either search strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Caller-assigned identifier, unique within a catalog.
    pub id: u64,
    /// Display name and search key.
    pub name: String,
    /// Informational category label.
    pub category: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(id: u64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Record {
            id,
            name: name.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Category: {}",
            self.id, self.name, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_str_and_string() {
        let a = Record::new(1, "Laptop", "Electronics");
        let b = Record::new(1, String::from("Laptop"), String::from("Electronics"));
        assert_eq!(a, b);
    }

    #[test]
    fn display_format() {
        let record = Record::new(3, "Book", "Education");
        assert_eq!(record.to_string(), "ID: 3, Name: Book, Category: Education");
    }
}
