//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Configuration is optional. It controls how the CLI prepares input
//! (which grouping separators to strip) and how results are printed.
//! The engine in [`crate::core::luhn`] never reads configuration.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file (first one found, see [`schema`])
//! 3. CLI flags (not handled here)
//!
//! # Example
//!
//! ```no_run
//! use luhncheck::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let config = result.config;
//!
//! println!("Separators: {:?}", config.separators());
//! println!("Format: {:?}", config.format());
//! ```

pub mod schema;

pub use schema::{LuhnConfig, OutputFormat, DEFAULT_SEPARATORS};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LUHN_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Where to look for a config file, in search order.
#[derive(Debug, Clone, Default)]
struct SearchPaths {
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
}

impl SearchPaths {
    fn from_env(explicit: Option<&Path>) -> Self {
        Self {
            explicit: explicit.map(Path::to_path_buf),
            env: std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            xdg_config_home: std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            home: dirs::home_dir(),
        }
    }
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Raw file contents
    pub file: LuhnConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An `explicit` path (from `--config`) must exist; every other location
    /// is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated, or if `explicit` does not exist.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        Self::load_from(SearchPaths::from_env(explicit))
    }

    fn load_from(paths: SearchPaths) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        // 1. --config: missing file is an error
        if let Some(path) = paths.explicit {
            return Self::read_validated(path, warnings);
        }

        // 2. $LUHN_CONFIG: missing file is a warning
        if let Some(path) = paths.env {
            if path.exists() {
                return Self::read_validated(path, warnings);
            }
            warnings.push(ConfigWarning {
                message: format!("{} points to a missing file, ignoring it", CONFIG_ENV),
                path,
            });
        }

        // 3. $XDG_CONFIG_HOME/luhn/config.toml
        if let Some(xdg_home) = paths.xdg_config_home {
            let path = xdg_home.join("luhn/config.toml");
            if path.exists() {
                return Self::read_validated(path, warnings);
            }
        }

        // 4. ~/.luhn/config.toml
        if let Some(home) = paths.home {
            let path = home.join(".luhn/config.toml");
            if path.exists() {
                return Self::read_validated(path, warnings);
            }
        }

        Ok(ConfigLoadResult {
            config: Config::default(),
            warnings,
        })
    }

    fn read_validated(
        path: PathBuf,
        warnings: Vec<ConfigWarning>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let file = Self::read_config(&path)?;
        file.validate()?;

        Ok(ConfigLoadResult {
            config: Config {
                file,
                path: Some(path),
            },
            warnings,
        })
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<LuhnConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Characters stripped from input before checking.
    ///
    /// Defaults to space and hyphen.
    pub fn separators(&self) -> &str {
        self.file
            .separators
            .as_deref()
            .unwrap_or(DEFAULT_SEPARATORS)
    }

    /// Output format.
    ///
    /// Defaults to text.
    pub fn format(&self) -> OutputFormat {
        self.file.format.unwrap_or_default()
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, contents: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_empty_defaults() {
        let result = Config::load_from(SearchPaths::default()).unwrap();
        let config = result.config;

        assert_eq!(config.separators(), " -");
        assert_eq!(config.format(), OutputFormat::Text);
        assert!(config.loaded_from().is_none());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn explicit_path_wins() {
        let temp = TempDir::new().unwrap();
        let explicit = write(temp.path(), "explicit.toml", "format = \"json\"");
        let env = write(temp.path(), "env.toml", "format = \"text\"");

        let result = Config::load_from(SearchPaths {
            explicit: Some(explicit.clone()),
            env: Some(env),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(result.config.format(), OutputFormat::Json);
        assert_eq!(result.config.loaded_from(), Some(explicit.as_path()));
    }

    #[test]
    fn explicit_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from(SearchPaths {
            explicit: Some(temp.path().join("nope.toml")),
            ..Default::default()
        });

        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn env_missing_warns_and_falls_through() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "xdg/luhn/config.toml", "separators = \".\"");

        let result = Config::load_from(SearchPaths {
            env: Some(temp.path().join("missing.toml")),
            xdg_config_home: Some(temp.path().join("xdg")),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(result.config.separators(), ".");
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains(CONFIG_ENV));
    }

    #[test]
    fn xdg_before_home() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "xdg/luhn/config.toml", "separators = \"/\"");
        write(temp.path(), "home/.luhn/config.toml", "separators = \".\"");

        let result = Config::load_from(SearchPaths {
            xdg_config_home: Some(temp.path().join("xdg")),
            home: Some(temp.path().join("home")),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(result.config.separators(), "/");
    }

    #[test]
    fn home_fallback() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "home/.luhn/config.toml", "format = \"json\"");

        let result = Config::load_from(SearchPaths {
            xdg_config_home: Some(temp.path().join("empty-xdg")),
            home: Some(temp.path().join("home")),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(result.config.format(), OutputFormat::Json);
        assert_eq!(result.config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn invalid_separators_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "config.toml", "separators = \" 9\"");

        let result = Config::load_from(SearchPaths {
            explicit: Some(path),
            ..Default::default()
        });

        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn unparsable_file_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "config.toml", "separators = [");

        let result = Config::load_from(SearchPaths {
            explicit: Some(path),
            ..Default::default()
        });

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
