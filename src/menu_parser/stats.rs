//! Parsing statistics and result structures for menu CSV processing
//!
//! This module provides types for tracking how the rows of one upload were
//! classified, alongside the menu they produced.

use crate::models::ParsedMenu;
use serde::{Deserialize, Serialize};

/// Parsed menu together with row classification statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub menu: ParsedMenu,

    pub stats: ParseStats,
}

/// Row classification counts for one parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Records produced by the tokenizer, preamble included
    pub total_rows: usize,

    /// Records skipped as preamble
    pub preamble_rows: usize,

    /// Data rows discarded because the name column was empty
    pub blank_rows: usize,

    /// Category header rows seen, repeats included
    pub category_headers: usize,

    pub items_parsed: usize,

    /// Categories dropped because no item followed their header
    pub empty_categories_dropped: usize,

    /// Header rows that reused an earlier category name and discarded its items
    pub categories_overwritten: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows remaining after the preamble
    pub fn data_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.preamble_rows)
    }

    /// True when nothing followed the preamble
    pub fn is_empty_input(&self) -> bool {
        self.data_rows() == 0
    }
}
