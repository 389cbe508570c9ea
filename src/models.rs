//! Core menu data structures.
//!
//! Defines menu items, categories and the parsed menu produced by one
//! upload. Field names serialize to the same keys the remote menu store
//! uses (`id`, `name`, `weight`, `price`, `items`).

use serde::{Deserialize, Serialize};

/// A single priced, weighed menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    id: u32,
    name: String,
    /// Weight in grams
    weight: f64,
    price: f64,
}

impl MenuItem {
    pub fn new(id: u32, name: impl Into<String>, weight: f64, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            price,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in grams
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// A named section of the menu holding its items in row order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    name: String,
    items: Vec<MenuItem>,
}

impl MenuCategory {
    pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ordered categories produced by one parse of one uploaded file
///
/// Serializes as a bare array of categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedMenu {
    categories: Vec<MenuCategory>,
}

impl ParsedMenu {
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Look up a category by exact name
    pub fn category(&self, name: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Iterate every item across all categories in menu order
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Look up an item by identifier
    pub fn item(&self, id: u32) -> Option<&MenuItem> {
        self.items().find(|item| item.id == id)
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(MenuCategory::len).sum()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
