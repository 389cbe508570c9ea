//! Validate command implementation
//!
//! Parses each export without printing the menu and reports, per file,
//! either the row statistics or the reason it was rejected.

use super::shared::{
    FileOutcome, ProcessingStats, load_configuration, parse_files, setup_logging, to_json,
};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::menu_parser::{MenuCsvParser, ParseStats};
use crate::Result;
use colored::*;
use serde::Serialize;
use tracing::{debug, info};

/// Validation verdict for one file
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub file: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ParseStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&FileOutcome> for ValidationReport {
    fn from(outcome: &FileOutcome) -> Self {
        let file = outcome.path.display().to_string();
        match &outcome.result {
            Ok(result) => Self {
                file,
                valid: true,
                categories: Some(result.menu.len()),
                items: Some(result.menu.item_count()),
                stats: Some(result.stats.clone()),
                error: None,
            },
            Err(e) => Self {
                file,
                valid: false,
                categories: None,
                items: None,
                stats: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Validate command runner
pub async fn run_validate(args: ValidateArgs) -> Result<ProcessingStats> {
    let config = load_configuration(&args.common)?;
    setup_logging(&config.logging.level)?;
    debug!("Validation arguments: {:?}", args);

    let parser = MenuCsvParser::new(config.parser.clone())?;

    info!("Validating {} file(s)", args.files.len());
    let (outcomes, stats) =
        parse_files(&args.files, &parser, config.input.max_input_bytes).await;

    let reports: Vec<ValidationReport> = outcomes.iter().map(ValidationReport::from).collect();

    match args.output_format {
        OutputFormat::Human => {
            for report in &reports {
                println!("{}", render_human(report));
            }
            println!();
            println!(
                "{} valid, {} invalid",
                stats.files_processed.to_string().green().bold(),
                stats.files_failed.to_string().red().bold()
            );
        }
        OutputFormat::Json => {
            let json = to_json(&reports, "validation report")?;
            println!("{}", json);
        }
    }

    stats.into_result()
}

/// One-line summary of a validation report
pub fn render_human(report: &ValidationReport) -> String {
    match (&report.stats, &report.error) {
        (Some(stats), _) => format!(
            "{} {}: {} categories, {} items ({} rows, {} preamble, {} blank, {} empty categories dropped)",
            "✓".green(),
            report.file,
            report.categories.unwrap_or(0),
            report.items.unwrap_or(0),
            stats.total_rows,
            stats.preamble_rows,
            stats.blank_rows,
            stats.empty_categories_dropped
        ),
        (None, Some(error)) => format!("{} {}: {}", "✗".red(), report.file, error),
        (None, None) => format!("{} {}", "?".yellow(), report.file),
    }
}
