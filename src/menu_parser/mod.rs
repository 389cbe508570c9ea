//! Menu CSV parser for restaurant menu exports
//!
//! Converts the raw text of an uploaded export into an ordered list of
//! categories, each holding priced items. Parsing is pure: the caller reads
//! the file and decides what to do with the result.
//!
//! ## Architecture
//!
//! - [`parser`] - Tokenization, preamble handling and row classification
//! - [`accumulator`] - Fold state carrying the current category across rows
//! - [`fields`] - Cell cleaning and decimal-separator number parsing
//! - [`stats`] - Row statistics and result structures
//!
//! ## Row layout
//!
//! After a fixed preamble, each row is read as `name,weight,price`:
//! a row with only a name opens a category, a row with numbers adds an item
//! to the current category, and a row without a name is ignored.
//!
//! ## Usage
//!
//! ```rust
//! use menu_csv::{MenuCsvParser, ParserConfig};
//!
//! let export = "Menu\n2024-05-01\nName,Weight,Price\n\
//!               Soups,,\nBorscht,\"0,3\",45-50\n";
//! let parser = MenuCsvParser::new(ParserConfig::default().with_preamble_rows(3))?;
//! let menu = parser.parse(export)?;
//!
//! assert_eq!(menu.categories()[0].name(), "Soups");
//! assert_eq!(menu.categories()[0].items()[0].price(), 45.5);
//! # Ok::<(), menu_csv::Error>(())
//! ```

pub mod accumulator;
pub mod fields;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use accumulator::MenuAccumulator;
pub use fields::{RowColumns, RowKind};
pub use parser::{MenuCsvParser, parse_menu};
pub use stats::{ParseResult, ParseStats};
