//! # Catalog Sources
//!
//! A [`CatalogSource`] yields the tools the directory shows. The catalog is
//! static: it is read once when the API is built and never written back.
//!
//! ## Implementations
//!
//! - [`bundled::BundledSource`]: the catalog compiled into the binary
//!   (`data/catalog.json`).
//! - [`fs::JsonFileSource`]: a catalog document on disk, for `--catalog PATH`.
//! - [`memory::InMemorySource`]: tools handed over directly; used by tests.
//!
//! ## Document Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "tools": [ { "id": "...", "name": "...", ... }, ... ]
//! }
//! ```
//!
//! Tool fields use camelCase keys (`shortDescription`, `launchDate`, ...).
//! Documents with any other `version` are rejected.

use crate::error::{DirectoryError, Result};
use crate::model::Tool;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod bundled;
pub mod fs;
pub mod memory;

/// Catalog document version this build understands.
pub const CATALOG_VERSION: u32 = 1;

/// On-disk shape of a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: u32,
    pub tools: Vec<Tool>,
}

impl CatalogDocument {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self {
            version: CATALOG_VERSION,
            tools,
        }
    }

    /// Parses and version-checks a JSON catalog document.
    pub fn from_json(content: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(content)?;
        if document.version != CATALOG_VERSION {
            return Err(DirectoryError::UnsupportedVersion {
                found: document.version,
                expected: CATALOG_VERSION,
            });
        }
        Ok(document)
    }
}

/// Anything that can hand over the full, ordered list of tools.
pub trait CatalogSource {
    /// Load every tool, in catalog order.
    fn load(&self) -> Result<Vec<Tool>>;

    /// Short human description of where the tools come from (for logs).
    fn describe(&self) -> String;
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn load(&self) -> Result<Vec<Tool>> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// The catalog file at `path`, or the bundled catalog when there is none.
pub fn open(path: Option<&Path>) -> Box<dyn CatalogSource> {
    match path {
        Some(path) => Box::new(fs::JsonFileSource::new(path)),
        None => Box::new(bundled::BundledSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_other_versions() {
        let err = CatalogDocument::from_json(r#"{"version": 2, "tools": []}"#).unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::UnsupportedVersion {
                found: 2,
                expected: 1
            }
        ));
    }

    #[test]
    fn open_without_path_is_bundled() {
        assert_eq!(open(None).describe(), "bundled catalog");
        assert_eq!(open(Some(Path::new("/tmp/x.json"))).describe(), "/tmp/x.json");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CatalogDocument::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DirectoryError::Serialization(_)));
    }

    #[test]
    fn rejects_relative_urls() {
        let doc = r#"{"version": 1, "tools": [{
            "id": "a", "name": "A", "shortDescription": "", "fullDescription": "",
            "category": "Text", "pricing": "Free", "rating": 4.0,
            "websiteUrl": "/relative", "imageUrl": "https://img.example/a.png",
            "launchDate": "2024-01-01"
        }]}"#;
        assert!(CatalogDocument::from_json(doc).is_err());
    }
}
