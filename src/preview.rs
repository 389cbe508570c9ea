//! Menu preview state.
//!
//! Holds the menu currently shown to the operator. Each upload is parsed
//! in full before anything changes: a successful parse replaces the shown
//! menu wholesale, a failed one leaves the previous menu untouched.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::Result;
use crate::menu_parser::{MenuCsvParser, ParseStats};
use crate::models::ParsedMenu;

/// The currently displayed menu and when it was last replaced
#[derive(Debug, Default)]
pub struct MenuPreview {
    menu: ParsedMenu,
    stats: Option<ParseStats>,
    updated_at: Option<DateTime<Utc>>,
}

impl MenuPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> &ParsedMenu {
        &self.menu
    }

    /// Statistics of the upload that produced the current menu
    pub fn stats(&self) -> Option<&ParseStats> {
        self.stats.as_ref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Parse an uploaded file and show it if parsing succeeds
    pub fn apply_upload(&mut self, parser: &MenuCsvParser, content: &str) -> Result<&ParsedMenu> {
        match parser.parse_with_stats(content) {
            Ok(result) => {
                info!(
                    "Menu preview replaced: {} categories, {} items",
                    result.menu.len(),
                    result.menu.item_count()
                );
                self.replace(result.menu, Some(result.stats));
                Ok(&self.menu)
            }
            Err(e) => {
                warn!("Upload rejected, keeping previous menu: {}", e);
                Err(e)
            }
        }
    }

    /// Show a menu obtained elsewhere, e.g. read back from the remote store
    pub fn replace(&mut self, menu: ParsedMenu, stats: Option<ParseStats>) {
        self.menu = menu;
        self.stats = stats;
        self.updated_at = Some(Utc::now());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
