//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// nobelium blog theme CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: nobelium.toml)
    #[arg(short = 'C', long, global = true, default_value = "nobelium.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default config and sample site data
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Render every page of the site
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the posts matching a filter key as JSON
    #[command(visible_alias = "f")]
    Filter {
        #[command(flatten)]
        args: FilterArgs,
    },

    /// Replay a scroll trace through the scroll-spy
    Spy {
        #[command(flatten)]
        args: SpyArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Site data file (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Override site URL for deployment.
    ///
    /// The path component becomes the link prefix, e.g.
    /// `--site-url https://example.github.io/blog` prefixes every link with `/blog`.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Filter command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct FilterArgs {
    /// Filter key, matched case-insensitively against title, summary and tags
    #[arg(default_value = "")]
    pub key: String,

    /// Site data file (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Spy command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SpyArgs {
    /// Trace file (JSON). Use `-` to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub trace: PathBuf,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_filter(&self) -> bool {
        matches!(self.command, Commands::Filter { .. })
    }
    pub const fn is_spy(&self) -> bool {
        matches!(self.command, Commands::Spy { .. })
    }
}
