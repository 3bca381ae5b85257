use crate::catalog::Catalog;
use crate::commands::{browse, show, CmdResult};
use crate::error::Result;
use crate::model::FilterCriteria;
use crate::route::Route;
use tracing::debug;

/// Resolves `path` and runs the view it points at. The directory opens with
/// `defaults`.
pub fn run(catalog: &Catalog, path: &str, defaults: &FilterCriteria) -> Result<CmdResult> {
    let route = Route::parse(path);
    debug!(path, route = %route, "resolved route");
    match route {
        Route::Directory => browse::run(catalog, defaults),
        Route::Detail(id) => show::run(catalog, &id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Lookup;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn detail_route_runs_lookup() {
        let catalog = CatalogFixture::scenario().catalog();
        let result = run(&catalog, "/tool/a", &FilterCriteria::default()).unwrap();
        assert_eq!(
            result.lookup.as_ref().and_then(Lookup::tool).map(|t| t.id.as_str()),
            Some("a")
        );
        assert!(result.listed_tools.is_empty());
    }

    #[test]
    fn detail_route_for_unknown_id_is_not_found() {
        let catalog = CatalogFixture::scenario().catalog();
        let result = run(&catalog, "#/tool/z", &FilterCriteria::default()).unwrap();
        assert_eq!(result.lookup, Some(Lookup::NotFound("z".into())));
    }

    #[test]
    fn unknown_paths_fall_back_to_directory() {
        let catalog = CatalogFixture::scenario().catalog();
        let result = run(&catalog, "/pricing/free", &FilterCriteria::default()).unwrap();
        assert!(result.lookup.is_none());
        assert_eq!(result.listed_tools.len(), 2);
    }
}
