use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of the environment variables read by [`Config::load`].
pub const ENV_PREFIX: &str = "cadence";

/// Log filter used when neither RUST_LOG nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Number of recommendations returned when none is asked for.
pub const DEFAULT_TOP_K: usize = 10;

/// Configuration for cadence.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CADENCE_* prefix)
/// 3. Config file (~/.config/cadence/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the song catalog (`.json` or `.csv`).
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/catalog.json
    /// - ENV: CADENCE_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/catalog.json"
    /// - Default: ~/.local/share/cadence/catalog.json
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// How many songs to recommend.
    ///
    /// Can be set via:
    /// - CLI: -k 20
    /// - ENV: CADENCE_TOP_K
    /// - Config: top_k = 20
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Log filter used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            top_k: DEFAULT_TOP_K,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/cadence/config.toml
    /// Reads environment variables with CADENCE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path(), ENV_PREFIX)
    }

    /// Load configuration from an explicit file and environment prefix.
    ///
    /// A missing file is not an error; defaults fill whatever the file and
    /// environment leave unset.
    pub fn load_from(config_path: &Path, env_prefix: &str) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .with_context(|| format!("Failed to load config file {}", config_path.display()))?;
        }

        let env_opts = env::Options::with_top_level(env_prefix);
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Override the values that were given on the command line.
    #[must_use]
    pub fn with_overrides(mut self, catalog_path: Option<PathBuf>, top_k: Option<usize>) -> Self {
        if let Some(path) = catalog_path {
            self.catalog_path = path;
        }
        if let Some(k) = top_k {
            self.top_k = k;
        }
        self
    }
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_log_level() -> String {
    String::from(DEFAULT_LOG_LEVEL)
}

/// Get the default catalog path.
///
/// Returns: ~/.local/share/cadence/catalog.json (or platform equivalent)
fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cadence")
        .join("catalog.json")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/cadence/config.toml
/// - macOS: ~/Library/Application Support/cadence/config.toml
/// - Windows: %APPDATA%\cadence\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cadence")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Cadence Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CADENCE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the song catalog (.json or .csv)
#
# Song records with name, artist, img, preview, spotify_id and either a
# "context" string or valence/danceability audio features. A CSV export needs
# a header row; a JSON export is an array of records.
#
# Can also be set via:
# - CLI: cadence recommend --catalog /custom/catalog.json
# - Environment: CADENCE_CATALOG_PATH=/custom/catalog.json
#
# Default: Platform-specific data directory
#catalog_path = "/path/to/catalog.json"

# Number of songs to recommend
top_k = 10

# Log filter used when RUST_LOG is not set
log_level = "info"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.catalog_path.as_os_str().is_empty());
        assert_eq!(config.top_k, DEFAULT_TOP_K);
        assert_eq!(config.log_level, "info");
    }

    // Unique prefix so variables set on the host cannot leak in
    const TEST_ENV_PREFIX: &str = "cadence_config_test_unset";

    #[test]
    fn test_config_load_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml"), TEST_ENV_PREFIX).unwrap();
        assert_eq!(config.top_k, DEFAULT_TOP_K);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "catalog_path = \"/data/Music.csv\"\ntop_k = 5\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path, TEST_ENV_PREFIX).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/data/Music.csv"));
        assert_eq!(config.top_k, 5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "top_k = [not valid").unwrap();

        assert!(Config::load_from(&path, TEST_ENV_PREFIX).is_err());
    }

    #[test]
    fn test_config_with_overrides() {
        let custom_path = PathBuf::from("/tmp/catalog.json");
        let config = Config::default().with_overrides(Some(custom_path.clone()), Some(3));
        assert_eq!(config.catalog_path, custom_path);
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn test_config_overrides_absent_keep_values() {
        let config = Config::default().with_overrides(None, None);
        assert_eq!(config.top_k, DEFAULT_TOP_K);
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(config.top_k, 10);
    }
}
