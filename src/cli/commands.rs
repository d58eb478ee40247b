//! CLI command implementations
//!
//! Boot sequence for `serve`:
//! 1. Load and validate the configuration file
//! 2. Open the store (synchronizes the contacts table)
//! 3. Build the HTTP server over the shared store handle
//! 4. Serve until the process exits

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::{ContactStore, SqliteContactStore, StoreConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store connection settings (required)
    pub database: StoreConfig,

    /// HTTP settings (optional, defaults to 0.0.0.0:8080 with open CORS)
    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.database.validate().map_err(CliError::config_error)?;
        self.http.validate().map_err(CliError::config_error)?;
        Ok(())
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Migrate { config } => migrate(&config),
    }
}

/// Open the store and log what the schema sync changed
fn open_store(config: &Config) -> CliResult<SqliteContactStore> {
    let store = SqliteContactStore::open(&config.database)?;

    let outcome = store.sync_outcome();
    let path = config.database.path.to_string_lossy();
    let added = outcome.added_columns.join(",");
    log_event_with_fields(
        Event::SchemaSynced,
        &[
            ("path", path.as_ref()),
            ("created_table", if outcome.created_table { "true" } else { "false" }),
            ("added_columns", added.as_str()),
        ],
    );

    Ok(store)
}

/// Synchronize the contacts table and exit
pub fn migrate(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("config", config_path.to_string_lossy().as_ref())],
    );

    open_store(&config)?;
    Ok(())
}

/// Serve the contact API
///
/// The store handle is opened once here and shared by every request until
/// the process exits.
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("config", config_path.to_string_lossy().as_ref())],
    );

    let store: Arc<dyn ContactStore> = Arc::new(open_store(&config)?);
    let server = HttpServer::new(config.http.clone(), store);

    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JournalMode, StoreError};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir, value: serde_json::Value) -> std::path::PathBuf {
        let config_path = temp_dir.path().join("contactbook.json");
        fs::write(&config_path, value.to_string()).unwrap();
        config_path
    }

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, json!({"database": {"path": "contacts.db"}}));

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.database.busy_timeout_ms, 5000);
        assert_eq!(config.database.journal_mode, JournalMode::Wal);
        assert_eq!(config.http.port, 8080);
        assert!(config.http.cors_origins.is_empty());
    }

    #[test]
    fn test_config_requires_database() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, json!({"http": {"port": 9000}}));

        let result = Config::load(&config_path);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_config_rejects_zero_busy_timeout() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(
            &temp_dir,
            json!({"database": {"path": "contacts.db", "busy_timeout_ms": 0}}),
        );

        assert!(matches!(Config::load(&config_path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_config_rejects_empty_host() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(
            &temp_dir,
            json!({"database": {"path": "contacts.db"}, "http": {"host": ""}}),
        );

        match Config::load(&config_path) {
            Err(CliError::Config(msg)) => assert!(msg.contains("http.host"), "{msg}"),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_rejects_malformed_cors_origin() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(
            &temp_dir,
            json!({
                "database": {"path": "contacts.db"},
                "http": {"cors_origins": ["http://ok.example", "bad\norigin"]}
            }),
        );

        match Config::load(&config_path) {
            Err(CliError::Config(msg)) => assert!(msg.contains("invalid cors origin"), "{msg}"),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(&temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_migrate_creates_database() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("data").join("contacts.db");
        let config_path = write_config(
            &temp_dir,
            json!({"database": {"path": db_path.to_string_lossy()}}),
        );

        migrate(&config_path).unwrap();
        assert!(db_path.exists());

        // Second run is a no-op
        migrate(&config_path).unwrap();
    }

    #[test]
    fn test_migrate_reports_store_failure() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened as a database file.
        let config_path = write_config(
            &temp_dir,
            json!({"database": {"path": temp_dir.path().to_string_lossy()}}),
        );

        let result = migrate(&config_path);
        assert!(matches!(result, Err(CliError::Store(StoreError::Persistence(_)))));
    }
}
