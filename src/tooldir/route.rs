//! Path routing for the two views.
//!
//! `/tool/{id}` opens a tool's detail page. Every other path, including
//! malformed detail paths, lands on the directory. A leading `#` (hash
//! routing) and a single trailing slash are accepted.

use std::fmt;

const DETAIL_PREFIX: &str = "tool";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Directory,
    Detail(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);

        let Some(rest) = path.strip_prefix('/') else {
            return Route::Directory;
        };

        let mut segments = rest.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(DETAIL_PREFIX), Some(id), None) if !id.is_empty() => {
                Route::Detail(id.to_string())
            }
            _ => Route::Directory,
        }
    }

    pub fn detail(id: impl Into<String>) -> Self {
        Route::Detail(id.into())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Directory => f.write_str("/"),
            Route::Detail(id) => write!(f, "/{}/{}", DETAIL_PREFIX, id),
        }
    }
}
