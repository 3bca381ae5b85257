//! # Tooldir Architecture
//!
//! Tooldir is a **UI-agnostic tool directory library**: a static catalog of
//! tools, a query engine that filters and sorts it, and a controller that
//! turns raw input (keystrokes, facet picks) into committed criteria. The
//! `tooldir` binary is one client of it, offering one-shot commands and an
//! interactive browser.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, runs the browser    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the loaded Catalog       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - browse, show, navigate, facets, config                   │
//! │  - Returns CmdResult values, no I/O assumptions             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (query.rs, catalog.rs, controller.rs, route.rs)       │
//! │  - Pure evaluation, id lookup, debounced criteria           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sources (store/)                                           │
//! │  - CatalogSource trait                                      │
//! │  - Bundled, JSON file, in-memory (testing)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recomputation Is Explicit
//!
//! Nothing re-filters behind the caller's back. The [`controller::Controller`]
//! reports when its criteria changed (a setter, or a `poll` that committed
//! debounced text) and the caller then calls [`query::evaluate`] with the new
//! snapshot. Time is passed in explicitly (`*_at(.., Instant)` variants), so
//! the debounce is testable without sleeping.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values. It
//! never prints and never exits. Failures are limited to the boundary
//! (reading a catalog file, reading or writing config); an empty result set
//! and an unknown tool id are ordinary outcomes, not errors.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: thorough unit tests beside the code, built on
//!    `store::memory::fixtures`.
//! 2. **API** (`api.rs`): dispatch tests.
//! 3. **CLI**: integration tests in `tests/` that run the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic behind each command
//! - [`query`]: Filter and sort pipeline
//! - [`controller`]: Live criteria with debounced text input
//! - [`debounce`]: Single-slot debouncer
//! - [`catalog`]: The loaded catalog and id lookup
//! - [`route`]: `/tool/{id}` routing
//! - [`store`]: Catalog sources
//! - [`model`]: Core data types (`Tool`, `Category`, `FilterCriteria`)
//! - [`config`]: User preferences
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering and the interactive browser (binary only)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod model;
pub mod query;
pub mod route;
pub mod store;
