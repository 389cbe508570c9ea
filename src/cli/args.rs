//! Command-line argument definitions for the menu CSV tool
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the menu CSV tool
///
/// Parses restaurant menu exports into categories and priced items so they
/// can be previewed or checked before being published.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "menu-csv",
    version,
    about = "Preview and validate restaurant menu CSV exports",
    long_about = "Parses restaurant menu CSV exports into categories of priced, weighed items. \
                  The export starts with a fixed block of title rows, followed by category rows \
                  (a name with empty weight and price) and item rows (name, weight in kilograms \
                  with comma decimals, price with hyphen decimals)."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse menu exports and print the resulting menu
    Preview(PreviewArgs),
    /// Parse menu exports and report whether they are valid
    Validate(ValidateArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, clap::Args)]
pub struct CommonArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file describing the export layout. If not specified,
    /// looks for ~/.config/menu-csv/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Number of leading rows to skip before data begins
    #[arg(
        long = "preamble-rows",
        value_name = "COUNT",
        help = "Number of leading title rows to skip (default: 5)"
    )]
    pub preamble_rows: Option<usize>,

    /// Treat a file with no rows after the preamble as an error
    #[arg(long = "reject-empty", help = "Fail on files with no data rows")]
    pub reject_empty: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl CommonArgs {
    /// Log level requested by `-q` or `-v`, if either was given
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }

        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

/// Arguments for the preview command
#[derive(Debug, Clone, Parser)]
pub struct PreviewArgs {
    /// Menu export files to parse
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Output format for the parsed menu
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the parsed menu"
    )]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Menu export files to check
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Output format for the validation report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}
