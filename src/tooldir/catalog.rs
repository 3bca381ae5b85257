//! The loaded, read-only set of tools.
//!
//! A [`Catalog`] is built once from whatever a [`CatalogSource`] returns and
//! never changes afterwards. It keeps the source order (which is the order
//! ties fall back to when sorting) and an id index for detail lookups.
//!
//! [`CatalogSource`]: crate::store::CatalogSource

use crate::error::{DirectoryError, Result};
use crate::model::Tool;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<Tool>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog, rejecting duplicate ids.
    pub fn new(tools: Vec<Tool>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(tools.len());
        for (position, tool) in tools.iter().enumerate() {
            if by_id.insert(tool.id.clone(), position).is_some() {
                return Err(DirectoryError::DuplicateId(tool.id.clone()));
            }
        }
        Ok(Self { tools, by_id })
    }

    /// All tools in source order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Looks a tool up by id. A miss is `None`, not an error: the detail
    /// view renders its own fallback.
    pub fn find_by_id(&self, id: &str) -> Option<&Tool> {
        self.by_id.get(id).map(|&position| &self.tools[position])
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::tool;

    #[test]
    fn finds_every_present_id() {
        let catalog = Catalog::new(vec![tool("a", "Alpha"), tool("b", "Beta")]).unwrap();
        for t in catalog.tools() {
            assert_eq!(catalog.find_by_id(&t.id), Some(t));
        }
    }

    #[test]
    fn missing_id_is_none() {
        let catalog = Catalog::new(vec![tool("a", "Alpha")]).unwrap();
        assert!(catalog.find_by_id("z").is_none());
        assert!(catalog.find_by_id("").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = Catalog::new(vec![tool("alpha", "Alpha")]).unwrap();
        assert!(catalog.find_by_id("Alpha").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![tool("a", "Alpha"), tool("a", "Again")]).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn keeps_source_order() {
        let catalog =
            Catalog::new(vec![tool("c", "C"), tool("a", "A"), tool("b", "B")]).unwrap();
        let ids: Vec<_> = catalog.tools().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(catalog.len(), 3);
        assert!(Catalog::default().is_empty());
    }
}
