//! Database schema definitions

/// SQL to create the entries table.
///
/// `position` is the row's place in the sheet; a whole-table write
/// renumbers from zero. Cell columns default to empty strings so rows
/// written before a column existed still read back as plain strings.
pub const CREATE_ENTRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    position INTEGER PRIMARY KEY,
    name TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL DEFAULT '',
    dish TEXT NOT NULL DEFAULT '',
    note TEXT NOT NULL DEFAULT ''
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] =
    &["CREATE INDEX IF NOT EXISTS idx_entries_category ON entries(category)"];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_ENTRIES_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
