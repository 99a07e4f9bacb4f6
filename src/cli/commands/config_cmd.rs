//! config command - Inspect effective configuration

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::core::config::{Config, OutputFormat};
use crate::ui::output;

#[derive(Debug, Serialize)]
struct ConfigReport<'a> {
    separators: &'a str,
    format: OutputFormat,
    path: Option<String>,
}

/// List effective configuration values.
///
/// Values reflect defaults and the loaded file, not CLI overrides.
pub fn list(ctx: &Context, config: &Config) -> Result<()> {
    let path = config.loaded_from().map(|p| p.display().to_string());

    if ctx.json() {
        output::json(&ConfigReport {
            separators: config.separators(),
            format: config.format(),
            path,
        })?;
        return Ok(());
    }

    println!("# Effective Configuration");
    println!("separators = {:?}", config.separators());
    println!(
        "format = {}",
        match config.format() {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    );
    match path {
        Some(path) => println!("# loaded from {}", path),
        None => println!("# no config file found, using defaults"),
    }

    Ok(())
}

/// Print the path of the loaded config file.
///
/// Outputs nothing (exit 0) when running on defaults.
pub fn path(ctx: &Context, config: &Config) -> Result<()> {
    match config.loaded_from() {
        Some(path) => output::value(path.display()),
        None => output::debug("No config file loaded", ctx.verbosity),
    }
    Ok(())
}
