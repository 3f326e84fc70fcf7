//! Entry types - one row of the shared sign-up sheet
//!
//! A row carries four string cells: contributor name, category label,
//! dish name, and an optional note. Cells a store never populated are
//! normalized to empty strings at the adapter boundary, so nothing past
//! that boundary handles missing fields.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed sign-up categories.
///
/// `as_str` returns the canonical label as stored in the sheet; parsing
/// also accepts bare aliases so CLI and API callers don't have to type
/// the emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mains,
    SidesAndApps,
    Dessert,
    Drinks,
    Appetizers,
}

impl Category {
    /// Canonical label, exactly as written into the table
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mains => "🍗 Mains",
            Category::SidesAndApps => "🥗 Sides & Apps",
            Category::Dessert => "🍰 Dessert",
            Category::Drinks => "🍺 Drinks",
            Category::Appetizers => "🥨 Appetizers",
        }
    }

    /// All categories, in sign-up form order
    pub fn all() -> &'static [Category] {
        &[
            Category::Mains,
            Category::SidesAndApps,
            Category::Dessert,
            Category::Drinks,
            Category::Appetizers,
        ]
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(canonical) = Category::all().iter().find(|c| c.as_str() == s.trim()) {
            return Ok(*canonical);
        }
        match s.trim().to_lowercase().as_str() {
            "mains" | "main" | "🍗 mains" => Ok(Category::Mains),
            "sides & apps" | "sides and apps" | "sides" | "🥗 sides & apps" | "🥗 sides" => {
                Ok(Category::SidesAndApps)
            }
            "dessert" | "desserts" | "🍰 dessert" => Ok(Category::Dessert),
            "drinks" | "drink" | "🍺 drinks" => Ok(Category::Drinks),
            "appetizers" | "appetizer" | "apps" | "🥨 appetizers" => Ok(Category::Appetizers),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One dish sign-up record.
///
/// The category stays a plain string here: the sheet is shared and can be
/// edited outside this system, so a fetched row may carry any label.
/// Validation against the fixed [`Category`] set happens on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Contributor name(s), e.g. "Alex" or "Alex & Sam"
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Category label as stored in the sheet
    #[serde(rename = "Category", default)]
    pub category: String,
    /// Dish name - the natural key of the list
    #[serde(rename = "Dish", default)]
    pub dish: String,
    /// Optional dietary note, empty when absent
    #[serde(rename = "Note", default)]
    pub note: String,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        dish: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.as_str().to_string(),
            dish: dish.into(),
            note: note.into(),
        }
    }

    /// Deduplication key for the dish name: trimmed, case-folded.
    ///
    /// Two entries whose keys match are the same dish as far as the
    /// uniqueness invariant is concerned.
    pub fn dish_key(&self) -> String {
        dish_key(&self.dish)
    }

    /// The entry's category parsed against the fixed set, if it matches
    pub fn known_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

/// Normalize a dish name into its deduplication key
pub fn dish_key(dish: &str) -> String {
    dish.trim().to_lowercase()
}
