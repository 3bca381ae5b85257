use super::{CatalogDocument, CatalogSource};
use crate::error::Result;
use crate::model::Tool;

const BUNDLED_CATALOG: &str = include_str!("../../../data/catalog.json");

/// The catalog shipped inside the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSource;

impl CatalogSource for BundledSource {
    fn load(&self) -> Result<Vec<Tool>> {
        Ok(CatalogDocument::from_json(BUNDLED_CATALOG)?.tools)
    }

    fn describe(&self) -> String {
        "bundled catalog".to_string()
    }
}
