//! cli
//!
//! Command-line interface layer for luhn.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and apply CLI overrides
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers prepare input (trim, strip separators)
//! and call into [`crate::core::luhn`]. No checksum logic lives here.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::core::config::{Config, OutputFormat, DEFAULT_SEPARATORS};
use crate::ui::output::{self, Verbosity};

/// Settings shared by every command handler.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Output format
    pub format: OutputFormat,
    /// Characters removed from input before checking
    pub separators: String,
}

impl Context {
    /// Build a context from loaded configuration and CLI flags.
    ///
    /// CLI flags always take precedence over config values.
    pub fn new(config: &Config, json: bool, quiet: bool, debug: bool) -> Self {
        Self {
            verbosity: Verbosity::from_flags(quiet, debug),
            format: if json {
                OutputFormat::Json
            } else {
                config.format()
            },
            separators: config.separators().to_string(),
        }
    }

    /// Whether results should be printed as JSON.
    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            format: OutputFormat::Text,
            separators: DEFAULT_SEPARATORS.to_string(),
        }
    }
}

/// Overall result of a command, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command succeeded and every checked value was valid
    Success,
    /// At least one checked value failed the Luhn check
    Invalid,
}

impl Outcome {
    /// `Success` if `all_valid`, otherwise `Invalid`.
    pub fn from_validity(all_valid: bool) -> Self {
        if all_valid {
            Outcome::Success
        } else {
            Outcome::Invalid
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::from(1),
        }
    }
}

/// Exit status for input, config, and I/O errors.
pub const ERROR_EXIT_CODE: u8 = 2;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<Outcome> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let loaded = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }
    match loaded.config.loaded_from() {
        Some(path) => output::debug(format!("Loaded config from {}", path.display()), verbosity),
        None => output::debug("No config file found, using defaults", verbosity),
    }

    let ctx = Context::new(&loaded.config, cli.json, cli.quiet, cli.debug);

    commands::dispatch(cli.command, &ctx, &loaded.config)
}
