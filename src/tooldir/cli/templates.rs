//! # CLI Templates
//!
//! Output is rendered from minijinja templates kept in `templates/*.tmp`, so
//! the layout can be edited and diffed apart from the code. They are embedded
//! here as string constants.
//!
//! Rendering runs with `trim_blocks` and `lstrip_blocks`: a block tag on its
//! own line produces no output line. Lines should end in an expression, not a
//! block tag, or the line break is swallowed.
//!
//! Templates only use semantic style names (see `styles::names`). Layout math
//! that needs unicode widths or dates happens in `render.rs` and arrives as
//! ready strings.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const NOT_FOUND_TEMPLATE: &str = include_str!("templates/not_found.tmp");
pub const FACETS_TEMPLATE: &str = include_str!("templates/facets.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
