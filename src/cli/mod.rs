//! CLI module for contactbook
//!
//! Provides command-line interface for:
//! - serve: Open the store and serve the contact API
//! - migrate: Synchronize the contacts table and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{migrate, run, run_command, serve, Config};
pub use errors::{CliError, CliResult};
