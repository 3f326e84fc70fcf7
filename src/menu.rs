//! Menu board - categorized view of a snapshot
//!
//! Groups a snapshot into the four display columns of the sign-up page.
//! Appetizers share a column with Sides & Apps; entries whose category
//! label is outside the fixed set are not shown.

use serde::Serialize;

use crate::entry::{Category, Entry};
use crate::snapshot::Snapshot;

/// Display columns in board order
const COLUMNS: &[(&str, &[Category])] = &[
    (
        "🥗 Sides & Apps",
        &[Category::SidesAndApps, Category::Appetizers],
    ),
    ("🍗 Mains", &[Category::Mains]),
    ("🍰 Desserts", &[Category::Dessert]),
    ("🍺 Drinks", &[Category::Drinks]),
];

#[derive(Debug, Clone, Serialize)]
pub struct Menu {
    pub columns: Vec<MenuColumn>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuColumn {
    pub title: String,
    pub entries: Vec<Entry>,
}

impl Menu {
    /// Build the board from a snapshot, preserving sheet order within
    /// each column
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let columns = COLUMNS
            .iter()
            .map(|(title, categories)| MenuColumn {
                title: title.to_string(),
                entries: snapshot
                    .iter()
                    .filter(|e| {
                        e.known_category()
                            .is_some_and(|c| categories.contains(&c))
                    })
                    .cloned()
                    .collect(),
            })
            .collect();

        Self { columns }
    }

    /// Total entries shown on the board
    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry(dish: &str, category: Category) -> Entry {
        Entry::new("Alex", category, dish, "")
    }

    #[test]
    fn test_appetizers_fold_into_sides_column() {
        let snapshot = Snapshot::new(vec![
            sample_entry("Pretzels", Category::Appetizers),
            sample_entry("Slaw", Category::SidesAndApps),
            sample_entry("Chili", Category::Mains),
        ]);

        let menu = Menu::from_snapshot(&snapshot);
        let sides = &menu.columns[0];
        assert_eq!(sides.title, "🥗 Sides & Apps");

        let dishes: Vec<&str> = sides.entries.iter().map(|e| e.dish.as_str()).collect();
        assert_eq!(dishes, vec!["Pretzels", "Slaw"]);
        assert_eq!(menu.total(), 3);
    }

    #[test]
    fn test_unknown_categories_not_shown() {
        let mut stray = sample_entry("Mystery Stew", Category::Mains);
        stray.category = "Potions".to_string();

        let menu = Menu::from_snapshot(&Snapshot::new(vec![stray]));
        assert!(menu.is_empty());
    }

    #[test]
    fn test_empty_snapshot_keeps_column_layout() {
        let menu = Menu::from_snapshot(&Snapshot::default());
        assert_eq!(menu.columns.len(), 4);
        assert!(menu.is_empty());
    }
}
