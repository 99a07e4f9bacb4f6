//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file
//! - `--json`: Machine-readable output
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// luhn - Validate and generate Luhn check digits
#[derive(Parser, Debug)]
#[command(name = "luhn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print results as JSON, one document per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; rely on the exit status
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether numbers pass the Luhn check
    #[command(
        name = "validate",
        long_about = "Check whether one or more numbers pass the Luhn check.\n\n\
            Each value is treated as a payload followed by its check digit. \
            Spaces and hyphens are removed before checking. When no values \
            are given, values are read from standard input, one per line.",
        after_help = "\
EXAMPLES:
    # Check a single number
    luhn validate 79927398713

    # Grouped card numbers are fine
    luhn validate \"4532 0151 1283 0366\"

    # Check a file of numbers; exit status is 1 if any fail
    luhn validate < numbers.txt

    # Script-friendly: no output, exit status only
    luhn validate -q 79927398713 && echo ok"
    )]
    Validate {
        /// Numbers to check (reads stdin if omitted)
        #[arg(value_name = "NUMBER")]
        values: Vec<String>,
    },

    /// Validate numbers and suggest the correct check digit for failures
    #[command(
        name = "suggest",
        long_about = "Validate numbers and suggest a correction for those that fail.\n\n\
            For a number that fails the Luhn check, the last digit is assumed to \
            be a wrong check digit. The correct digit is computed from the rest \
            of the number.",
        after_help = "\
EXAMPLES:
    # Prints: 12345670: invalid (expected check digit 4)
    luhn suggest 12345670

    # JSON output for scripting
    luhn suggest --json 12345670"
    )]
    Suggest {
        /// Numbers to check (reads stdin if omitted)
        #[arg(value_name = "NUMBER")]
        values: Vec<String>,
    },

    /// Print the check digit for a payload
    #[command(
        name = "check-digit",
        after_help = "\
EXAMPLES:
    # Prints: 3
    luhn check-digit 7992739871"
    )]
    CheckDigit {
        /// Payload without a check digit
        #[arg(value_name = "PAYLOAD")]
        value: String,
    },

    /// Print a payload with its check digit appended
    #[command(
        name = "generate",
        after_help = "\
EXAMPLES:
    # Prints: 79927398713
    luhn generate 7992739871"
    )]
    Generate {
        /// Payload without a check digit
        #[arg(value_name = "PAYLOAD")]
        value: String,
    },

    /// Print a number with its trailing check digit removed
    #[command(
        name = "strip",
        after_help = "\
EXAMPLES:
    # Prints: 7992739871
    luhn strip 79927398713"
    )]
    Strip {
        /// Number ending in a check digit (at least 2 digits)
        #[arg(value_name = "NUMBER")]
        value: String,
    },

    /// Print the raw Luhn checksum of a number
    #[command(
        name = "checksum",
        long_about = "Print the raw Luhn checksum of a number.\n\n\
            The number is valid when the checksum is a multiple of 10.",
        after_help = "\
EXAMPLES:
    # Prints: 70
    luhn checksum 79927398713"
    )]
    Checksum {
        /// Number to sum
        #[arg(value_name = "NUMBER")]
        value: String,
    },

    /// Inspect configuration
    #[command(
        name = "config",
        long_about = "Inspect luhn configuration.\n\n\
            Configuration is read from the first file found in: --config, \
            $LUHN_CONFIG, $XDG_CONFIG_HOME/luhn/config.toml, ~/.luhn/config.toml.",
        after_help = "\
EXAMPLES:
    # Show effective values
    luhn config list

    # Show which file was loaded
    luhn config path"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for luhn commands.",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    luhn completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    luhn completion zsh >> ~/.zshrc

    # Fish
    luhn completion fish > ~/.config/fish/completions/luhn.fish

    # PowerShell
    luhn completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List effective configuration values
    List,
    /// Print the path of the loaded config file
    Path,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
