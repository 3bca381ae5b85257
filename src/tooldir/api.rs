//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for directory operations, whichever UI drives it (one-shot CLI
//! commands or the interactive browser).
//!
//! ## Role
//!
//! - Loads the catalog once, at construction, from a [`CatalogSource`]
//! - Dispatches to the command functions in [`crate::commands`]
//! - Returns structured [`CmdResult`] values, never strings
//!
//! Filtering, sorting and lookups live in `query`, `catalog` and the commands.
//! Printing and styling live in the binary.
//!
//! ## Generic Over CatalogSource
//!
//! `DirectoryApi<S: CatalogSource>`:
//! - Production: `DirectoryApi<BundledSource>` or `DirectoryApi<JsonFileSource>`
//! - Testing: `DirectoryApi<InMemorySource>`

use crate::catalog::Catalog;
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::FilterCriteria;
use crate::store::CatalogSource;
use showroom::ColorMode;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct DirectoryApi<S: CatalogSource> {
    source: S,
    catalog: Catalog,
    config_dir: PathBuf,
}

impl<S: CatalogSource> DirectoryApi<S> {
    /// Loads and validates the catalog. Fails on unreadable or malformed
    /// catalogs and on duplicate ids.
    pub fn new(source: S, config_dir: impl Into<PathBuf>) -> Result<Self> {
        let catalog = Catalog::new(source.load()?)?;
        info!(
            source = %source.describe(),
            tools = catalog.len(),
            "catalog loaded"
        );
        Ok(Self {
            source,
            catalog,
            config_dir: config_dir.into(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn browse(&self, criteria: &FilterCriteria) -> Result<CmdResult> {
        commands::browse::run(&self.catalog, criteria)
    }

    pub fn show(&self, id: &str) -> Result<CmdResult> {
        commands::show::run(&self.catalog, id)
    }

    pub fn navigate(&self, path: &str, defaults: &FilterCriteria) -> Result<CmdResult> {
        commands::navigate::run(&self.catalog, path, defaults)
    }

    pub fn facets(&self) -> Result<CmdResult> {
        commands::facets::run(&self.catalog)
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn theme(&self, action: commands::config::ThemeAction) -> Result<CmdResult> {
        commands::config::theme(&self.config_dir, action, ColorMode::detect)
    }
}
