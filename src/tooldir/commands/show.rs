use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, Lookup};
use crate::error::Result;
use tracing::{debug, info};

pub fn run(catalog: &Catalog, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let lookup = match catalog.find_by_id(id) {
        Some(tool) => {
            debug!(id, "tool found");
            Lookup::Found(Box::new(tool.clone()))
        }
        None => {
            info!(id, "tool not found");
            result.add_message(CmdMessage::warning(format!("Tool not found: {}", id)));
            Lookup::NotFound(id.to_string())
        }
    };
    Ok(result.with_lookup(lookup))
}
