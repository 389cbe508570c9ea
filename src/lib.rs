//! Menu CSV Library
//!
//! A Rust library for turning restaurant menu CSV exports into a structured
//! menu of categories and priced, weighed items.
//!
//! This library provides tools for:
//! - Parsing menu exports with a configurable preamble and per-field decimal conventions
//! - Detecting category header rows and attaching item rows to them
//! - Strict numeric validation with row-level error reporting
//! - Holding a preview menu that only changes on a fully successful upload
//! - A command-line interface for previewing and validating exports

pub mod config;
pub mod constants;
pub mod error;
pub mod menu_parser;
pub mod models;
pub mod preview;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{Config, NumericFieldConfig, ParserConfig};
pub use error::{Error, NumericField, Result};
pub use menu_parser::{MenuCsvParser, ParseResult, ParseStats, parse_menu};
pub use models::{MenuCategory, MenuItem, ParsedMenu};
pub use preview::MenuPreview;
