//! # CLI Behavior
//!
//! This is **one possible UI client** for tooldir, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting. For the overall architecture, see the crate-level
//! documentation of the `tooldir` library.
//!
//! ## Naked Execution (`tooldir`)
//!
//! Running `tooldir` with no arguments lists the whole catalog with the
//! configured default sort, the same as `tooldir list`.
//!
//! ## One-shot vs Interactive
//!
//! `list`, `show`, `open` and `facets` evaluate once and print. `browse`
//! opens a full-screen view where typing filters live: keystrokes go through
//! the debounced controller, so the list only re-evaluates once typing pauses.
//!
//! ## Output
//!
//! Text output is rendered from templates with the adaptive theme (light or
//! dark, from the `theme` preference). `--json` prints the underlying data
//! instead; `--no-color` drops ANSI codes.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print
//! - `render`: Template data and rendering
//! - `setup`: Argument parsing via clap, help text
//! - `styles`: Named styles for light and dark terminals
//! - `templates`: Output templates
//! - `tui`: The interactive browser

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;
mod tui;

pub use commands::run;
