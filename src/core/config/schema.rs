//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `--config <path>` on the command line
//! 2. `$LUHN_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/luhn/config.toml`
//! 4. `~/.luhn/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing. Separators must never include
//! digits, otherwise normalization would silently drop part of the number.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default separator characters stripped from CLI input.
pub const DEFAULT_SEPARATORS: &str = " -";

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document per result
    Json,
}

/// User configuration.
///
/// # Example
///
/// ```toml
/// separators = " -"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LuhnConfig {
    /// Characters removed from input before checking
    pub separators: Option<String>,

    /// Default output format
    pub format: Option<OutputFormat>,
}

impl LuhnConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(separators) = &self.separators {
            if let Some(c) = separators.chars().find(char::is_ascii_digit) {
                return Err(ConfigError::InvalidValue(format!(
                    "separators cannot contain digits (found '{}')",
                    c
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LuhnConfig::default();
        assert!(config.separators.is_none());
        assert!(config.format.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full() {
        let config: LuhnConfig = toml::from_str(
            r#"
            separators = " -."
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.separators.as_deref(), Some(" -."));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn digit_separator_rejected() {
        let config = LuhnConfig {
            separators: Some(" 0".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'0'"));
    }

    #[test]
    fn empty_separators_allowed() {
        let config = LuhnConfig {
            separators: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_format_rejected() {
        let result: Result<LuhnConfig, _> = toml::from_str("format = \"xml\"");
        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let result: Result<LuhnConfig, _> = toml::from_str("algorithm = \"verhoeff\"");
        assert!(result.is_err());
    }

    #[test]
    fn roundtrip() {
        let config = LuhnConfig {
            separators: Some(" ".to_string()),
            format: Some(OutputFormat::Text),
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: LuhnConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
