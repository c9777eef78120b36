//! Bootstrap configuration and data source resolution
//!
//! Configuration is read once at startup from an optional TOML file. A
//! missing file is not an error: built-in defaults apply. Each data source
//! path is resolved in priority order:
//!
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Overrides the config file location
pub const CONFIG_ENV_VAR: &str = "BOOKDASH_CONFIG";
pub const CATALOG_ENV_VAR: &str = "BOOKDASH_CATALOG";
pub const REVIEWS_ENV_VAR: &str = "BOOKDASH_REVIEWS";

/// File names of the trending books snapshot
pub const DEFAULT_CATALOG_FILE: &str = "Top-100 Trending Books.csv";
pub const DEFAULT_REVIEWS_FILE: &str = "customer reviews.csv";

/// Bootstrap configuration loaded from TOML
///
/// Read once at startup; the service must restart to pick up changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Book catalog CSV (optional)
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Customer reviews CSV (optional)
    #[serde(default)]
    pub reviews_path: Option<PathBuf>,

    /// HTTP bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5780
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            reviews_path: None,
            host: default_host(),
            port: default_port(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Resolved paths of the two startup data sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub catalog: PathBuf,
    pub reviews: PathBuf,
}

/// Parse a TOML config file
pub fn load_config_from(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    Ok(toml::from_str(&content)?)
}

/// Load bootstrap configuration
///
/// `BOOKDASH_CONFIG` names the file explicitly and must point at a readable
/// file. Otherwise `<config_dir>/bookdash/config.toml` is used when present,
/// and built-in defaults when not.
pub fn load_config() -> Result<TomlConfig> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(path);
        info!("Loading config from {} ({})", path.display(), CONFIG_ENV_VAR);
        return load_config_from(&path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            info!("Loading config from {}", path.display());
            load_config_from(&path)
        }
        _ => {
            info!("No config file found, using built-in defaults");
            Ok(TomlConfig::default())
        }
    }
}

/// Platform config file location, e.g. ~/.config/bookdash/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bookdash").join("config.toml"))
}

/// OS-dependent default folder holding the CSV snapshot
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("bookdash"))
        .unwrap_or_else(|| PathBuf::from("./bookdash_data"))
}

/// Resolve both data source paths in priority order
pub fn resolve_data_sources(
    cli_catalog: Option<&Path>,
    cli_reviews: Option<&Path>,
    config: &TomlConfig,
) -> DataSources {
    let data_dir = default_data_dir();
    DataSources {
        catalog: resolve_path(
            cli_catalog,
            CATALOG_ENV_VAR,
            config.catalog_path.as_deref(),
            || data_dir.join(DEFAULT_CATALOG_FILE),
        ),
        reviews: resolve_path(
            cli_reviews,
            REVIEWS_ENV_VAR,
            config.reviews_path.as_deref(),
            || data_dir.join(DEFAULT_REVIEWS_FILE),
        ),
    }
}

fn resolve_path(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    config_value: Option<&Path>,
    fallback: impl FnOnce() -> PathBuf,
) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    match std::env::var(env_var_name) {
        Ok(path) if !path.trim().is_empty() => return PathBuf::from(path),
        Ok(_) => warn!("{} is set but empty, ignoring", env_var_name),
        Err(_) => {}
    }

    // Priority 3: TOML config file
    if let Some(path) = config_value {
        return path.to_path_buf();
    }

    // Priority 4: OS-dependent compiled default
    fallback()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TomlConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5780);
        assert_eq!(config.logging.level, "info");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TomlConfig = toml::from_str("port = 8080\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_cli_argument_wins() {
        let config = TomlConfig {
            catalog_path: Some(PathBuf::from("/toml/books.csv")),
            ..TomlConfig::default()
        };
        let sources = resolve_data_sources(Some(Path::new("/cli/books.csv")), None, &config);
        assert_eq!(sources.catalog, PathBuf::from("/cli/books.csv"));
    }
}
