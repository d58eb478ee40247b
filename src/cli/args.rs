//! CLI argument definitions using clap
//!
//! Commands:
//! - contactbook serve --config <path> [--port <port>]
//! - contactbook migrate --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// contactbook - CRUD contact manager over HTTP
#[derive(Parser, Debug)]
#[command(name = "contactbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the store and serve the contact API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./contactbook.json")]
        config: PathBuf,

        /// Override the configured HTTP port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Synchronize the contacts table with the schema and exit
    Migrate {
        /// Path to configuration file
        #[arg(long, default_value = "./contactbook.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_port() {
        let cli = Cli::try_parse_from(["contactbook", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./contactbook.json"));
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_migrate_with_config() {
        let cli = Cli::try_parse_from(["contactbook", "migrate", "--config", "/etc/cb.json"]).unwrap();
        assert!(matches!(cli.command, Command::Migrate { config } if config == PathBuf::from("/etc/cb.json")));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["contactbook", "serve", "--port", "http"]).is_err());
    }
}
