//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the preview and validate command implementations.

use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::menu_parser::{MenuCsvParser, ParseResult};
use crate::{Error, Result};
use futures::future::join_all;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of files parsed successfully
    pub files_processed: usize,
    /// Number of files that failed to read or parse
    pub files_failed: usize,
    /// Categories across all successful files
    pub categories: usize,
    /// Items across all successful files
    pub items: usize,
    /// Total processing time
    pub processing_time: Duration,
}

impl ProcessingStats {
    /// Tally a batch of outcomes
    pub fn from_outcomes(outcomes: &[FileOutcome], processing_time: Duration) -> Self {
        let mut stats = Self {
            processing_time,
            ..Self::default()
        };

        for outcome in outcomes {
            match &outcome.result {
                Ok(result) => {
                    stats.files_processed += 1;
                    stats.categories += result.menu.len();
                    stats.items += result.menu.item_count();
                }
                Err(_) => stats.files_failed += 1,
            }
        }

        stats
    }

    pub fn total_files(&self) -> usize {
        self.files_processed + self.files_failed
    }

    /// Fail the command when any file in the batch failed
    pub fn into_result(self) -> Result<Self> {
        if self.files_failed > 0 {
            Err(Error::files_failed(self.files_failed, self.total_files()))
        } else {
            Ok(self)
        }
    }
}

/// Parse result for one input file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<ParseResult>,
}

/// Set up structured logging for a command
///
/// `RUST_LOG` wins over the given level when it is set.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    // A subscriber may already exist when commands run more than once per process
    if installed.is_err() {
        debug!("Global subscriber already installed; keeping it");
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        debug!("No config file found, using defaults and environment variables");
    }

    let mut config = Config::load_layered(config_file)?;

    apply_cli_overrides(&mut config, args);

    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &CommonArgs) {
    if let Some(preamble_rows) = args.preamble_rows {
        config.parser.preamble_rows = preamble_rows;
    }
    if args.reject_empty {
        config.parser.reject_empty_input = true;
    }

    if let Some(level) = args.log_level_override() {
        config.logging.level = level.to_string();
    }
}

/// Read one menu export, refusing files above the size limit
pub async fn read_menu_file(path: &Path, max_input_bytes: u64) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| Error::io(format!("Failed to access {}", path.display()), e))?;

    if metadata.len() > max_input_bytes {
        return Err(Error::input_too_large(metadata.len(), max_input_bytes));
    }

    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
}

/// Read and parse every file; each file succeeds or fails on its own
pub async fn parse_files(
    paths: &[PathBuf],
    parser: &MenuCsvParser,
    max_input_bytes: u64,
) -> (Vec<FileOutcome>, ProcessingStats) {
    let start_time = Instant::now();

    let contents = join_all(
        paths
            .iter()
            .map(|path| read_menu_file(path, max_input_bytes)),
    )
    .await;

    let outcomes: Vec<FileOutcome> = paths
        .iter()
        .zip(contents)
        .map(|(path, content)| {
            let result = content.and_then(|text| parser.parse_with_stats(&text));
            if let Err(e) = &result {
                debug!("Failed to parse {}: {}", path.display(), e);
            }
            FileOutcome {
                path: path.clone(),
                result,
            }
        })
        .collect();

    let stats = ProcessingStats::from_outcomes(&outcomes, start_time.elapsed());
    info!(
        "Parsed {} of {} file(s) in {:.2}s",
        stats.files_processed,
        stats.total_files(),
        stats.processing_time.as_secs_f64()
    );

    (outcomes, stats)
}

/// Render a report as pretty-printed JSON
pub fn to_json<T: Serialize + ?Sized>(report: &T, what: &str) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| Error::serialization(format!("Failed to serialize {}", what), e))
}

/// Format weight in grams without trailing zeros
pub fn format_weight(grams: f64) -> String {
    if grams.fract() == 0.0 {
        format!("{:.0} g", grams)
    } else {
        format!("{:.1} g", grams)
    }
}

/// Format a price with two decimals
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}
