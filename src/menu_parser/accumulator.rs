//! Fold state threaded through the rows of one parse
//!
//! The accumulator is consumed and returned by every step, so the
//! "current category" never lives outside the fold. Item ids are handed out
//! in `finish`, walking the surviving categories in order.

use tracing::{debug, warn};

use super::fields::{RowColumns, parse_numeric_field};
use super::stats::ParseStats;
use crate::config::ParserConfig;
use crate::error::NumericField;
use crate::models::{MenuCategory, MenuItem, ParsedMenu};
use crate::{Error, Result};

#[derive(Debug)]
struct PendingItem {
    name: String,
    weight: f64,
    price: f64,
}

#[derive(Debug)]
struct OpenCategory {
    name: String,
    items: Vec<PendingItem>,
}

#[derive(Debug)]
pub struct MenuAccumulator {
    /// Categories in order of first appearance
    categories: Vec<OpenCategory>,
    /// Index into `categories` of the last header seen
    current: Option<usize>,
    stats: ParseStats,
}

impl Default for MenuAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuAccumulator {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            current: None,
            stats: ParseStats::new(),
        }
    }

    /// Count a row without interpreting it
    pub fn skip_preamble(mut self) -> Self {
        self.stats.total_rows += 1;
        self.stats.preamble_rows += 1;
        self
    }

    pub fn skip_blank(mut self) -> Self {
        self.stats.total_rows += 1;
        self.stats.blank_rows += 1;
        self
    }

    /// Make `name` the current category with an empty item list
    ///
    /// A repeated name keeps its original position but loses its earlier items.
    pub fn open_category(mut self, name: String) -> Self {
        self.stats.total_rows += 1;
        self.stats.category_headers += 1;

        match self.categories.iter().position(|c| c.name == name) {
            Some(pos) => {
                let discarded = std::mem::take(&mut self.categories[pos].items);
                self.stats.categories_overwritten += 1;
                warn!(
                    "Category '{}' reappears; discarding {} earlier item(s)",
                    name,
                    discarded.len()
                );
                self.current = Some(pos);
            }
            None => {
                self.categories.push(OpenCategory {
                    name,
                    items: Vec::new(),
                });
                self.current = Some(self.categories.len() - 1);
            }
        }

        self
    }

    /// Parse an item row into the current category
    ///
    /// A row with no category to join fails before its numbers are looked at.
    pub fn push_item(
        mut self,
        row: usize,
        columns: RowColumns,
        config: &ParserConfig,
    ) -> Result<Self> {
        self.stats.total_rows += 1;

        let Some(current) = self.current else {
            return Err(Error::malformed_row(row, columns.name));
        };

        let weight =
            parse_numeric_field(&columns.weight, &config.weight, NumericField::Weight, row)?;
        let price =
            parse_numeric_field(&columns.price, &config.price, NumericField::Price, row)?;

        self.categories[current].items.push(PendingItem {
            name: columns.name,
            weight,
            price,
        });
        self.stats.items_parsed += 1;

        Ok(self)
    }

    /// Close the fold: drop categories that collected no items, then number
    /// the remaining items from 1 in output order
    pub fn finish(mut self) -> (ParsedMenu, ParseStats) {
        let mut categories = Vec::with_capacity(self.categories.len());
        let mut next_id: u32 = 1;

        for category in self.categories {
            if category.items.is_empty() {
                debug!("Dropping empty category '{}'", category.name);
                self.stats.empty_categories_dropped += 1;
                continue;
            }

            let items = category
                .items
                .into_iter()
                .map(|item| {
                    let id = next_id;
                    next_id += 1;
                    MenuItem::new(id, item.name, item.weight, item.price)
                })
                .collect();
            categories.push(MenuCategory::new(category.name, items));
        }

        (ParsedMenu::new(categories), self.stats)
    }
}
