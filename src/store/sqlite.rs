//! SQLite table store implementation

use std::path::Path;
use std::time::{Duration, Instant};

use rusqlite::{params, Connection};

use super::schema;
use crate::entry::Entry;
use crate::store::TableStore;
use crate::Result;

/// SQLite-backed store for the sign-up sheet.
///
/// Reads go through a time-bound cache mirroring the remote-sheet
/// behavior this adapter stands in for: repeated renders within the TTL
/// reuse the last result instead of hitting the table again.
pub struct SqliteStore {
    conn: Connection,
    cache: Option<CachedRead>,
}

struct CachedRead {
    rows: Vec<Entry>,
    fetched_at: Instant,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn, cache: None };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn, cache: None };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, category, dish, note FROM entries ORDER BY position")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Entry {
                    name: row.get(0)?,
                    category: row.get(1)?,
                    dish: row.get(2)?,
                    note: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Count stored rows, bypassing the read cache
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl TableStore for SqliteStore {
    fn read(&mut self, ttl: Duration) -> Result<Vec<Entry>> {
        if !ttl.is_zero() {
            if let Some(cached) = &self.cache {
                if cached.fetched_at.elapsed() <= ttl {
                    return Ok(cached.rows.clone());
                }
            }
        }

        let rows = self.read_all()?;
        self.cache = Some(CachedRead {
            rows: rows.clone(),
            fetched_at: Instant::now(),
        });
        Ok(rows)
    }

    fn write(&mut self, rows: &[Entry]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM entries", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO entries (position, name, category, dish, note) VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (position, entry) in rows.iter().enumerate() {
                stmt.execute(params![
                    position as i64,
                    entry.name,
                    entry.category,
                    entry.dish,
                    entry.note,
                ])?;
            }
        }
        tx.commit()?;

        // A committed write makes any cached read stale
        self.cache = None;
        Ok(())
    }

    fn invalidate(&mut self) {
        self.cache = None;
    }
}
