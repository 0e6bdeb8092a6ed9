//! Command-line interface module.

mod args;
pub mod build;
pub mod filter;
pub mod init;
pub mod spy;

pub use args::{BuildArgs, Cli, Commands, FilterArgs, SpyArgs};
