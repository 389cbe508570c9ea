//! Test utilities for menu CSV parser testing
//!
//! Shared fixtures and helpers used across the parser test modules.

use crate::config::ParserConfig;
use crate::menu_parser::{MenuCsvParser, ParseResult};

mod parser_tests;

/// Five boilerplate rows as they appear at the top of the export
pub const TEST_PREAMBLE: &str = "Daily Menu,,
Date,01.05.2024,
Restaurant,Test Kitchen,
,,
Name,Weight,Price
";

/// Helper to create a complete menu export
pub fn create_test_menu_csv() -> String {
    format!(
        r#"{TEST_PREAMBLE}Soups,,
Borscht,"0,300",45-50
"Solyanka ""Meat""","0,350",52-00
,,
Salads,,
Olivier,"0,150",30-00
"Caesar
with chicken","0,200",65-25
Desserts,,
"#
    )
}

/// Helper to build an export from the standard preamble plus data rows
pub fn with_preamble(data_rows: &str) -> String {
    format!("{TEST_PREAMBLE}{data_rows}")
}

/// Parse with default configuration
pub fn parse_default(content: &str) -> crate::Result<ParseResult> {
    MenuCsvParser::default().parse_with_stats(content)
}

/// Parse with a custom configuration
pub fn parse_with(config: ParserConfig, content: &str) -> crate::Result<ParseResult> {
    MenuCsvParser::new(config)?.parse_with_stats(content)
}
