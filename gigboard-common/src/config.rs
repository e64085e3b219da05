//! Configuration loading and database path resolution
//!
//! Resolution priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (folded into the clap arg via `env`)
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)

use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Command-line / environment configuration for the web service
#[derive(Debug, Clone, Parser)]
#[command(name = "gigboard", about = "Venue, artist, and show listing service")]
pub struct ServeArgs {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "GIGBOARD_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port for the HTTP listener
    #[arg(long, env = "PORT", default_value_t = 5001)]
    pub port: u16,

    /// SQLite database file (created on first run if missing)
    #[arg(long, env = "GIGBOARD_DB")]
    pub database: Option<PathBuf>,

    /// Append log output to this file in addition to stderr
    #[arg(long, env = "GIGBOARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Development mode: log to stderr only, never to a file
    #[arg(long, env = "GIGBOARD_DEV")]
    pub dev: bool,
}

/// Optional TOML config file, read from the platform config directory
/// (`gigboard/gigboard.toml`). All fields are optional; a missing or
/// unparseable file degrades to defaults with a warning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub database: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl TomlConfig {
    /// Load from the default platform location, or return defaults
    pub fn load() -> Self {
        let Some(path) = default_config_file() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path, or return defaults
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring unparseable config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Ignoring unreadable config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Default config file location: `<config dir>/gigboard/gigboard.toml`
fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gigboard").join("gigboard.toml"))
}

/// OS-dependent default database location: `<data dir>/gigboard/gigboard.db`
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("gigboard"))
        .unwrap_or_else(|| PathBuf::from("./gigboard_data"))
        .join("gigboard.db")
}

/// Resolve the database path: CLI/env argument, then TOML file, then the
/// compiled default.
pub fn resolve_database_path(cli_arg: Option<&std::path::Path>, toml: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }
    if let Some(path) = &toml.database {
        return path.clone();
    }
    default_database_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_config_parses_known_fields() {
        let config: TomlConfig =
            toml::from_str("database = \"/tmp/gig.db\"\nlog_file = \"/tmp/gig.log\"").unwrap();
        assert_eq!(config.database, Some(PathBuf::from("/tmp/gig.db")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/gig.log")));
    }

    #[test]
    fn missing_config_file_degrades_to_defaults() {
        let config = TomlConfig::load_from(std::path::Path::new("/nonexistent/gigboard.toml"));
        assert!(config.database.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn cli_argument_wins_over_toml() {
        let toml = TomlConfig {
            database: Some(PathBuf::from("/from/toml.db")),
            log_file: None,
        };
        let resolved =
            resolve_database_path(Some(std::path::Path::new("/from/cli.db")), &toml);
        assert_eq!(resolved, PathBuf::from("/from/cli.db"));
    }

    #[test]
    fn toml_wins_over_compiled_default() {
        let toml = TomlConfig {
            database: Some(PathBuf::from("/from/toml.db")),
            log_file: None,
        };
        assert_eq!(resolve_database_path(None, &toml), PathBuf::from("/from/toml.db"));
    }

    #[test]
    fn default_database_path_is_nonempty() {
        assert!(!default_database_path().as_os_str().is_empty());
    }
}
