//! Catalog sources.
//!
//! A catalog comes either from the built-in demo list or from a JSON/YAML
//! file chosen by extension.

use std::path::{Path, PathBuf};

use catalog_seeker::{Catalog, CatalogError, Record};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON catalog {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML catalog {path}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported catalog format for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// On-disk file format of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(CatalogFormat::Json),
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            _ => None,
        }
    }
}

// The `products: [...]` form of a catalog file.
#[derive(Deserialize)]
struct ProductTable {
    products: Vec<Record>,
}

// The shape is read first so the records are then parsed straight from the
// text, keeping field names and positions in errors.
fn parse_json(content: &str) -> Result<Vec<Record>, serde_json::Error> {
    let shape: serde_json::Value = serde_json::from_str(content)?;
    if shape.is_object() {
        Ok(serde_json::from_str::<ProductTable>(content)?.products)
    } else {
        serde_json::from_str(content)
    }
}

fn parse_yaml(content: &str) -> Result<Vec<Record>, serde_yaml::Error> {
    let shape: serde_yaml::Value = serde_yaml::from_str(content)?;
    if shape.is_mapping() {
        Ok(serde_yaml::from_str::<ProductTable>(content)?.products)
    } else {
        serde_yaml::from_str(content)
    }
}

/// The built-in demo products, in their unsorted construction order.
pub fn demo_records() -> Vec<Record> {
    vec![
        Record::new(1, "Laptop", "Electronics"),
        Record::new(2, "T-Shirt", "Clothing"),
        Record::new(3, "Book", "Education"),
        Record::new(4, "Shoes", "Footwear"),
        Record::new(5, "Smartphone", "Electronics"),
    ]
}

/// Parses records from catalog file contents.
pub fn parse_records(
    content: &str,
    format: CatalogFormat,
    path: &Path,
) -> Result<Vec<Record>, LoadError> {
    match format {
        CatalogFormat::Json => parse_json(content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
        CatalogFormat::Yaml => parse_yaml(content).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Reads records from a JSON or YAML file.
pub fn read_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    let format = CatalogFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content, format, path)
}

/// Loads the catalog from `path`, or the demo catalog when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, LoadError> {
    let records = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading catalog file");
            read_records(path)?
        }
        None => {
            debug!("using built-in demo catalog");
            demo_records()
        }
    };
    Ok(Catalog::new(records)?)
}
