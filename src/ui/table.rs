use tabled::{settings::Style, Table, Tabled};

use crate::menu::Menu;

#[derive(Tabled)]
pub struct MenuRow {
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Dish")]
    pub dish: String,
    #[tabled(rename = "Brought by")]
    pub name: String,
    #[tabled(rename = "Note")]
    pub note: String,
}

/// Render the menu board as a terminal table, one row per dish
pub fn menu_table(menu: &Menu) -> String {
    let rows: Vec<MenuRow> = menu
        .columns
        .iter()
        .flat_map(|column| {
            column.entries.iter().map(|entry| MenuRow {
                category: column.title.clone(),
                dish: entry.dish.clone(),
                name: entry.name.clone(),
                note: entry.note.clone(),
            })
        })
        .collect();

    if rows.is_empty() {
        return String::new();
    }

    Table::new(&rows).with(Style::rounded()).to_string()
}
