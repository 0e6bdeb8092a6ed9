//! nobelium - the nobelium blog theme as a static site builder.

#![allow(dead_code)]

mod article;
mod cli;
mod config;
mod embed;
mod layout;
mod logger;
mod page;
mod spy;
mod toc;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Init { force } => cli::init::init_site(&config, *force),
        Commands::Build { .. } => cli::build::build_site(&config, false).map(|_| ()),
        Commands::Filter { args } => cli::filter::run_filter(args, &config),
        Commands::Spy { args } => cli::spy::run_spy(args),
    }
}
