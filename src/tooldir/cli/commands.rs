//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_settings()`: Loads configuration and picks the presenter. `config`
//!   and `theme` run on settings alone, so a broken catalog never locks the
//!   user out of fixing it
//! - `init_context()`: Adds the loaded catalog (`AppContext`)
//! - `handle_*()`: Per-command handlers that call the API and print

use super::render::Presenter;
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands, ThemeArg,
};
use super::tui;
use clap::Parser;
use serde::Serialize;
use showroom::{stdout_supports_color, ColorMode};
use std::path::PathBuf;
use std::str::FromStr;
use tooldir::api::DirectoryApi;
use tooldir::commands;
use tooldir::commands::config::{ConfigAction, ThemeAction};
use tooldir::commands::{CmdMessage, CmdResult, Lookup, MessageLevel};
use tooldir::config::{config_dir, DirectoryConfig, ThemePreference};
use tooldir::controller::Controller;
use tooldir::error::Result;
use tooldir::model::{Facet, FilterCriteria, SortBy};
use tooldir::store::{self, CatalogSource};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// What every command needs, without touching the catalog.
struct Settings {
    dir: PathBuf,
    config: DirectoryConfig,
    presenter: Presenter,
    json: bool,
    use_color: bool,
}

impl Settings {
    /// Criteria the directory opens with.
    fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::default().with_sort(self.config.default_sort)
    }
}

struct AppContext {
    api: DirectoryApi<Box<dyn CatalogSource>>,
    settings: Settings,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // At top level use grouped help, for subcommands use clap's default
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    // Help needs no catalog
    if let Some(Commands::Help { command }) = &cli.command {
        return handle_help(command.as_deref());
    }

    let settings = init_settings(&cli)?;

    // Config and theme must keep working when the catalog does not load
    match &cli.command {
        Some(Commands::Config { key, value }) => {
            return handle_config(&settings, key.clone(), value.clone())
        }
        Some(Commands::Theme { action }) => return handle_theme(&settings, *action),
        _ => {}
    }

    let ctx = init_context(&cli, settings)?;

    match cli.command {
        Some(Commands::List {
            query,
            category,
            pricing,
            sort,
        }) => handle_list(&ctx, query, category, pricing, sort),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Open { path }) => handle_open(&ctx, &path),
        Some(Commands::Facets) => handle_facets(&ctx),
        Some(Commands::Browse { query }) => handle_browse(&ctx, query),
        // Handled before the catalog was loaded
        Some(Commands::Config { .. } | Commands::Theme { .. } | Commands::Help { .. }) => Ok(()),
        None => handle_list(&ctx, None, None, None, None),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,tooldir=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_settings(cli: &Cli) -> Result<Settings> {
    let dir = config_dir()?;
    let config = DirectoryConfig::load(&dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        DirectoryConfig::default()
    });

    let use_color = !cli.no_color && stdout_supports_color();
    let mode = if use_color {
        config.theme.resolve()
    } else {
        ColorMode::Light
    };

    Ok(Settings {
        dir,
        config,
        presenter: Presenter::new(mode, use_color),
        json: cli.json,
        use_color,
    })
}

fn init_context(cli: &Cli, settings: Settings) -> Result<AppContext> {
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| settings.config.catalog_path.clone());
    let api = DirectoryApi::new(store::open(catalog_path.as_deref()), settings.dir.clone())?;
    Ok(AppContext { api, settings })
}

fn handle_list(
    ctx: &AppContext,
    query: Option<String>,
    category: Option<String>,
    pricing: Option<String>,
    sort: Option<SortBy>,
) -> Result<()> {
    let criteria = FilterCriteria {
        query: query.unwrap_or_default(),
        category: parse_facet(category),
        pricing: parse_facet(pricing),
        sort_by: sort.unwrap_or(ctx.settings.config.default_sort),
    };
    let result = ctx.api.browse(&criteria)?;
    print_listing(&ctx.settings, &result, &criteria)
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.show(id)?;
    print_lookup(&ctx.settings, &result)
}

fn handle_open(ctx: &AppContext, path: &str) -> Result<()> {
    let criteria = ctx.settings.default_criteria();
    let result = ctx.api.navigate(path, &criteria)?;
    if result.lookup.is_some() {
        print_lookup(&ctx.settings, &result)
    } else {
        print_listing(&ctx.settings, &result, &criteria)
    }
}

fn handle_facets(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.facets()?;
    if let Some(facets) = &result.facets {
        if ctx.settings.json {
            print_json(facets)?;
        } else {
            print!("{}", ctx.settings.presenter.render_facets(facets));
        }
    }
    Ok(())
}

fn handle_browse(ctx: &AppContext, query: Option<String>) -> Result<()> {
    let settings = &ctx.settings;
    let mut controller =
        Controller::with_defaults(settings.default_criteria(), settings.config.debounce());
    if let Some(query) = query {
        controller.set_query_text(query);
        controller.flush();
    }
    let colors = settings
        .use_color
        .then(|| settings.config.theme.resolve());
    tui::run(ctx.api.catalog(), controller, colors)
}

fn handle_config(settings: &Settings, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = commands::config::run(&settings.dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            if settings.json {
                print_json(config)?;
            } else {
                print!("{}", settings.presenter.render_config(config));
            }
        }
    }
    print_messages(settings, &result.messages);
    Ok(())
}

fn handle_theme(settings: &Settings, action: Option<ThemeArg>) -> Result<()> {
    let action = match action {
        None => ThemeAction::Show,
        Some(ThemeArg::Toggle) => ThemeAction::Toggle,
        Some(ThemeArg::Light) => ThemeAction::Set(ThemePreference::Light),
        Some(ThemeArg::Dark) => ThemeAction::Set(ThemePreference::Dark),
        Some(ThemeArg::System) => ThemeAction::Set(ThemePreference::System),
    };
    let result = commands::config::theme(&settings.dir, action, ColorMode::detect)?;
    print_messages(settings, &result.messages);
    Ok(())
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(name) => print_help_for_command(name),
        None => print_grouped_help(),
    }
    Ok(())
}

/// Facet flags keep whatever the user typed: unknown values filter to
/// nothing instead of failing.
fn parse_facet<T: FromStr>(raw: Option<String>) -> Facet<T> {
    match raw {
        Some(raw) => match Facet::from_str(&raw) {
            Ok(facet) => facet,
            Err(never) => match never {},
        },
        None => Facet::All,
    }
}

fn print_listing(settings: &Settings, result: &CmdResult, criteria: &FilterCriteria) -> Result<()> {
    if settings.json {
        return print_json(&result.listed_tools);
    }
    print!(
        "{}",
        settings
            .presenter
            .render_tool_list(&result.listed_tools, criteria)
    );
    // The count is already the list heading
    let notices: Vec<CmdMessage> = result
        .messages
        .iter()
        .filter(|m| m.level != MessageLevel::Info)
        .cloned()
        .collect();
    if !notices.is_empty() {
        println!();
        print_messages(settings, &notices);
    }
    Ok(())
}

fn print_lookup(settings: &Settings, result: &CmdResult) -> Result<()> {
    match &result.lookup {
        Some(Lookup::Found(tool)) => {
            if settings.json {
                print_json(tool)?;
            } else {
                print!("{}", settings.presenter.render_tool_detail(tool));
            }
        }
        Some(Lookup::NotFound(id)) => {
            if settings.json {
                print_json(&NotFoundJson {
                    error: "not_found",
                    id,
                })?;
            } else {
                print!("{}", settings.presenter.render_not_found(id));
            }
        }
        None => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct NotFoundJson<'a> {
    error: &'static str,
    id: &'a str,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_messages(settings: &Settings, messages: &[CmdMessage]) {
    if messages.is_empty() {
        return;
    }
    print!("{}", settings.presenter.render_messages(messages));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tooldir::model::{Category, Pricing};

    #[test]
    fn parse_facet_keeps_unknown_values() {
        assert_eq!(parse_facet::<Category>(None), Facet::All);
        assert_eq!(parse_facet::<Category>(Some("All".into())), Facet::All);
        assert_eq!(
            parse_facet::<Category>(Some("3D".into())),
            Facet::Only(Category::ThreeD)
        );
        assert_eq!(
            parse_facet::<Pricing>(Some("Cheap".into())),
            Facet::Unrecognized("Cheap".into())
        );
    }
}
