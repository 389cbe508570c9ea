//! Field normalization for menu CSV rows
//!
//! Cell cleaning and the decimal-separator conversions applied to the
//! weight and price columns.

use crate::config::NumericFieldConfig;
use crate::constants::MENU_COLUMN_COUNT;
use crate::error::NumericField;
use crate::{Error, Result};
use csv::StringRecord;
use std::borrow::Cow;

/// The three cleaned columns of one data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowColumns {
    pub name: String,
    pub weight: String,
    pub price: String,
}

/// How a data row is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Empty name column
    Blank,
    /// Name present, weight and price empty
    CategoryHeader,
    Item,
}

impl RowColumns {
    /// Extract and clean the first three columns; missing columns read as empty
    pub fn from_record(record: &StringRecord) -> Self {
        let mut cells = (0..MENU_COLUMN_COUNT).map(|i| clean_cell(record.get(i).unwrap_or("")));

        Self {
            name: cells.next().unwrap_or_default(),
            weight: cells.next().unwrap_or_default(),
            price: cells.next().unwrap_or_default(),
        }
    }

    pub fn kind(&self) -> RowKind {
        if self.name.is_empty() {
            RowKind::Blank
        } else if self.weight.is_empty() && self.price.is_empty() {
            RowKind::CategoryHeader
        } else {
            RowKind::Item
        }
    }
}

/// Drop spaces and tabs between a field boundary and an opening quote
///
/// The csv reader only treats a quote as opening when it is the first byte of
/// a field, but exports also write `Borscht, "0,300", 45-50`. Quoted content
/// and line breaks are left untouched, so record line numbers do not move.
pub fn unpad_quoted_fields(content: &str) -> Cow<'_, str> {
    if !content.contains('"') {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_quotes = false;
    let mut field_start = true;

    while let Some(c) = chars.next() {
        if in_quotes {
            out.push(c);
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    out.push('"');
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }

        match c {
            ' ' | '\t' if field_start => {
                let mut padding = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next != ' ' && next != '\t' {
                        break;
                    }
                    padding.push(next);
                    chars.next();
                }
                // Padding before a quote is dropped and the quote still opens the field
                if chars.peek() != Some(&'"') {
                    out.push_str(&padding);
                    field_start = false;
                }
            }
            '"' if field_start => {
                in_quotes = true;
                field_start = false;
                out.push(c);
            }
            ',' | '\n' | '\r' => {
                field_start = true;
                out.push(c);
            }
            _ => {
                field_start = false;
                out.push(c);
            }
        }
    }

    Cow::Owned(out)
}

/// Trim, turn embedded line breaks into spaces, trim again
pub fn clean_cell(raw: &str) -> String {
    raw.trim()
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

/// Parse a decimal written with a custom separator, then apply the field scale
///
/// Returns `None` for empty, non-numeric, non-finite or negative values.
pub fn parse_decimal(text: &str, field: &NumericFieldConfig) -> Option<f64> {
    let normalized = text.trim().replace(field.decimal_separator, ".");
    if normalized.is_empty() {
        return None;
    }

    let value = normalized.parse::<f64>().ok()? * field.scale;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Parse a numeric column, reporting the row and raw text on failure
pub fn parse_numeric_field(
    text: &str,
    config: &NumericFieldConfig,
    field: NumericField,
    row: usize,
) -> Result<f64> {
    parse_decimal(text, config).ok_or_else(|| Error::invalid_numeric_field(row, field, text))
}
