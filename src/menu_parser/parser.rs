//! Core menu CSV parser implementation
//!
//! This module tokenizes the uploaded text, skips the export preamble and
//! folds the remaining rows into categories and items.

use csv::StringRecord;
use tracing::{debug, warn};

use super::accumulator::MenuAccumulator;
use super::fields::{RowColumns, RowKind, unpad_quoted_fields};
use super::stats::{ParseResult, ParseStats};
use crate::config::ParserConfig;
use crate::models::ParsedMenu;
use crate::{Error, Result};

/// Parser for menu exports
///
/// Holds only its configuration; every call is independent, so one parser
/// can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct MenuCsvParser {
    config: ParserConfig,
}

impl MenuCsvParser {
    /// Create a parser after validating the configuration
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse uploaded text into a menu
    pub fn parse(&self, content: &str) -> Result<ParsedMenu> {
        self.parse_with_stats(content).map(|result| result.menu)
    }

    /// Parse uploaded text, returning the menu with row statistics
    pub fn parse_with_stats(&self, content: &str) -> Result<ParseResult> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let content = unpad_quoted_fields(content);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let accumulator = reader
            .records()
            .enumerate()
            .try_fold(MenuAccumulator::new(), |acc, (index, record)| {
                let record = record.map_err(|e| {
                    Error::csv_parsing(format!("Failed to read record {}", index + 1), e)
                })?;
                self.fold_row(acc, index, &record)
            })?;

        let (menu, stats) = accumulator.finish();
        self.check_empty_input(&stats)?;

        debug!(
            "Parsed {} item(s) in {} categor(ies) from {} row(s) ({} preamble, {} blank, {} empty categories dropped)",
            stats.items_parsed,
            menu.len(),
            stats.total_rows,
            stats.preamble_rows,
            stats.blank_rows,
            stats.empty_categories_dropped
        );

        Ok(ParseResult { menu, stats })
    }

    /// Classify one row and apply it to the accumulator
    fn fold_row(
        &self,
        acc: MenuAccumulator,
        index: usize,
        record: &StringRecord,
    ) -> Result<MenuAccumulator> {
        if index < self.config.preamble_rows {
            return Ok(acc.skip_preamble());
        }

        let row = row_number(index, record);
        let columns = RowColumns::from_record(record);

        match columns.kind() {
            RowKind::Blank => Ok(acc.skip_blank()),
            RowKind::CategoryHeader => Ok(acc.open_category(columns.name)),
            RowKind::Item => acc.push_item(row, columns, &self.config),
        }
    }

    fn check_empty_input(&self, stats: &ParseStats) -> Result<()> {
        if !stats.is_empty_input() {
            return Ok(());
        }

        if self.config.reject_empty_input {
            return Err(Error::empty_input(self.config.preamble_rows));
        }

        warn!(
            "No data rows after {} preamble row(s); returning an empty menu",
            stats.preamble_rows
        );
        Ok(())
    }
}

/// Parse uploaded text with the given configuration
pub fn parse_menu(content: &str, config: &ParserConfig) -> Result<ParsedMenu> {
    MenuCsvParser::new(config.clone())?.parse(content)
}

/// 1-based line on which the record starts, falling back to its ordinal
fn row_number(index: usize, record: &StringRecord) -> usize {
    record
        .position()
        .map(|pos| pos.line() as usize)
        .unwrap_or(index + 1)
}
