use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FilterCriteria;
use crate::query::evaluate;
use tracing::debug;

pub fn run(catalog: &Catalog, criteria: &FilterCriteria) -> Result<CmdResult> {
    let listed: Vec<_> = evaluate(catalog.tools(), criteria)
        .into_iter()
        .cloned()
        .collect();
    debug!(count = listed.len(), query = %criteria.query, "evaluated criteria");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(result_count_label(listed.len())));
    if listed.is_empty() {
        result.add_message(CmdMessage::warning(empty_hint(criteria)));
    }
    Ok(result.with_listed_tools(listed))
}

/// What to tell the user when nothing matched.
pub fn empty_hint(criteria: &FilterCriteria) -> &'static str {
    if criteria.has_active_filters() {
        "No tools found. Try adjusting your search query or categories, or clear all filters."
    } else {
        "No tools found. The catalog is empty."
    }
}

/// "1 Result", "7 Results".
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 Result".to_string()
    } else {
        format!("{} Results", count)
    }
}

/// The scope line shown next to the count.
pub fn scope_label(criteria: &FilterCriteria) -> String {
    if criteria.category.is_all() {
        "Showing all tools".to_string()
    } else {
        format!("Showing {} tools", criteria.category)
    }
}
