use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::facet_counts;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    Ok(CmdResult::default().with_facets(facet_counts(catalog.tools())))
}
