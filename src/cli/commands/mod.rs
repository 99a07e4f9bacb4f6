//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Normalizes its input (see [`input`])
//! 2. Calls the Luhn engine
//! 3. Formats and displays output
//!
//! Handlers that check numbers return an [`Outcome`] so the exit status
//! reflects whether every value was valid.

mod check_digit;
mod completion;
mod config_cmd;
mod input;
mod strip;
mod validate;

// Re-export command functions for testing and direct invocation
pub use check_digit::{check_digit, generate};
pub use completion::completion;
pub use config_cmd::{list as config_list, path as config_path};
pub use strip::{checksum, strip};
pub use validate::{suggest, validate};

use crate::cli::args::{Command, ConfigAction};
use crate::cli::{Context, Outcome};
use crate::core::config::Config;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context, config: &Config) -> Result<Outcome> {
    match command {
        Command::Validate { values } => validate::validate(ctx, values),
        Command::Suggest { values } => validate::suggest(ctx, values),
        Command::CheckDigit { value } => {
            check_digit::check_digit(ctx, &value).map(|()| Outcome::Success)
        }
        Command::Generate { value } => {
            check_digit::generate(ctx, &value).map(|()| Outcome::Success)
        }
        Command::Strip { value } => strip::strip(ctx, &value).map(|()| Outcome::Success),
        Command::Checksum { value } => strip::checksum(ctx, &value).map(|()| Outcome::Success),
        Command::Config { action } => {
            match action {
                ConfigAction::List => config_cmd::list(ctx, config)?,
                ConfigAction::Path => config_cmd::path(ctx, config)?,
            }
            Ok(Outcome::Success)
        }
        Command::Completion { shell } => completion::completion(shell).map(|()| Outcome::Success),
    }
}
