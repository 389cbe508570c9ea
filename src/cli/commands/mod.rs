//! Command implementations for the menu CSV CLI
//!
//! Each subcommand lives in its own module; shared configuration loading,
//! logging and file handling live in [`shared`].

pub mod preview;
pub mod shared;
pub mod validate;

pub use shared::ProcessingStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `preview`: print parsed menus
/// - `validate`: report per-file validity
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.command {
        Some(Commands::Preview(preview_args)) => preview::run_preview(preview_args).await,
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await,
        None => Err(Error::configuration("No command given")),
    }
}

#[cfg(test)]
pub mod tests;
