//! Preview command implementation
//!
//! Parses each export and prints the resulting menu as a table of
//! name, weight and price per category, or as JSON in the same shape the
//! remote menu store uses.

use super::shared::{
    ProcessingStats, format_price, format_weight, load_configuration, parse_files, setup_logging,
    to_json,
};
use crate::cli::args::{OutputFormat, PreviewArgs};
use crate::menu_parser::{MenuCsvParser, ParseResult, ParseStats};
use crate::models::ParsedMenu;
use crate::Result;
use chrono::{DateTime, Utc};
use colored::*;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// JSON document emitted per file
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PreviewReport<'a> {
    Parsed {
        file: String,
        parsed_at: DateTime<Utc>,
        menu: &'a ParsedMenu,
        stats: &'a ParseStats,
    },
    Failed {
        file: String,
        error: String,
    },
}

/// Preview command runner
pub async fn run_preview(args: PreviewArgs) -> Result<ProcessingStats> {
    let config = load_configuration(&args.common)?;
    setup_logging(&config.logging.level)?;
    debug!("Preview arguments: {:?}", args);

    let parser = MenuCsvParser::new(config.parser.clone())?;

    info!("Previewing {} file(s)", args.files.len());
    let (outcomes, stats) =
        parse_files(&args.files, &parser, config.input.max_input_bytes).await;

    match args.output_format {
        OutputFormat::Human => {
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(result) => print!("{}", render_human(&outcome.path, result)),
                    Err(e) => eprintln!("{} {}: {}", "✗".red(), outcome.path.display(), e),
                }
            }
        }
        OutputFormat::Json => {
            let parsed_at = Utc::now();
            let reports: Vec<PreviewReport<'_>> = outcomes
                .iter()
                .map(|outcome| match &outcome.result {
                    Ok(result) => PreviewReport::Parsed {
                        file: outcome.path.display().to_string(),
                        parsed_at,
                        menu: &result.menu,
                        stats: &result.stats,
                    },
                    Err(e) => PreviewReport::Failed {
                        file: outcome.path.display().to_string(),
                        error: e.to_string(),
                    },
                })
                .collect();

            let json = to_json(&reports, "preview")?;
            println!("{}", json);
        }
    }

    stats.into_result()
}

/// Render one parsed file as a table
pub fn render_human(path: &Path, result: &ParseResult) -> String {
    let menu = &result.menu;
    let mut out = format!(
        "{} {}\n",
        path.display().to_string().bright_cyan().bold(),
        format!(
            "({} categories, {} items)",
            menu.len(),
            menu.item_count()
        )
        .bright_black()
    );

    if menu.is_empty() {
        out.push_str(&format!("  {}\n", "(empty menu)".yellow()));
        return out;
    }

    let name_width = menu
        .items()
        .map(|item| item.name().chars().count())
        .max()
        .unwrap_or(0);

    for category in menu.categories() {
        out.push_str(&format!("  {}\n", category.name().bright_green().bold()));
        for item in category.items() {
            let padding = name_width.saturating_sub(item.name().chars().count());
            out.push_str(&format!(
                "    {}  {}{}  {:>10}  {:>10}\n",
                format!("{:>4}", item.id()).bright_black(),
                item.name(),
                " ".repeat(padding),
                format_weight(item.weight()),
                format_price(item.price())
            ));
        }
    }

    out
}
