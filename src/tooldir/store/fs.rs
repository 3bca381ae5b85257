use super::{CatalogDocument, CatalogSource};
use crate::error::Result;
use crate::model::Tool;
use std::fs;
use std::path::{Path, PathBuf};

/// A catalog document read from disk on load.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Tool>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(CatalogDocument::from_json(&content)?.tools)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
