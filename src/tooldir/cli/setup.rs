use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use tooldir::model::SortBy;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "tooldir",
    bin_name = "tooldir",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Browse, search and filter a directory of AI tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to read instead of the bundled one
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Print data as JSON instead of styled text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Directory,
    Interactive,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Directory => "Directory Commands:",
            CommandGroup::Interactive => "Interactive:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "show" | "open" | "facets" => Some(CommandGroup::Directory),
            "browse" => Some(CommandGroup::Interactive),
            "config" | "theme" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Directory,
            CommandGroup::Interactive,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("tooldir {version}\n"));
    output.push_str("Browse, search and filter a directory of AI tools\n");
    output.push('\n');
    output.push_str("Usage: tooldir [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading().bold()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str(&format!("{}\n", "Options:".bold()));
    output.push_str("      --catalog <PATH>  Catalog file to read instead of the bundled one\n");
    output.push_str("      --json            Print data as JSON instead of styled text\n");
    output.push_str("      --no-color        Disable colored output\n");
    output.push_str("  -v, --verbose         Verbose output\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

/// Prints help for the parsed subcommand (or the grouped help without one).
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::List { .. }) => "list",
        Some(Commands::Show { .. }) => "show",
        Some(Commands::Open { .. }) => "open",
        Some(Commands::Facets) => "facets",
        Some(Commands::Browse { .. }) => "browse",
        Some(Commands::Config { .. }) => "config",
        Some(Commands::Theme { .. }) => "theme",
        Some(Commands::Help { .. }) => "help",
        None => {
            print_grouped_help();
            return;
        }
    };
    print_help_for_command(name);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    /// Flip between light and dark
    Toggle,
    Light,
    Dark,
    /// Follow the OS appearance
    System,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools matching a search and filters
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Text to look for in names, descriptions and tags
        #[arg(short, long)]
        query: Option<String>,

        /// Category (Text, Image, Video, Code, Audio, Productivity, 3D or All)
        #[arg(short, long)]
        category: Option<String>,

        /// Pricing (Free, Freemium, Paid, Enterprise or All)
        #[arg(short, long)]
        pricing: Option<String>,

        /// Sort order: popular, newest or name
        #[arg(short, long)]
        sort: Option<SortBy>,
    },

    /// Show a tool's details
    #[command(alias = "s", display_order = 2)]
    Show {
        /// Tool id (e.g. quillmate)
        id: String,
    },

    /// Open a directory path (e.g. /tool/quillmate)
    #[command(alias = "o", display_order = 3)]
    Open {
        /// Path to resolve; anything other than /tool/{id} opens the directory
        path: String,
    },

    /// Count tools per category and pricing
    #[command(display_order = 4)]
    Facets,

    /// Browse interactively with live search
    #[command(alias = "b", display_order = 10)]
    Browse {
        /// Initial search text
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (theme, debounce-ms, default-sort, catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Show or change the color theme
    #[command(display_order = 21)]
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeArg>,
    },

    /// Print help for tooldir or a subcommand
    #[command(display_order = 22)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
