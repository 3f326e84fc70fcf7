//! In-memory table store
//!
//! Backs the registry with a plain `Vec` for tests and local demos.
//! Failure injection flags let tests drive the degraded read and failed
//! write paths deterministically, and the read counter makes cache
//! behavior observable.

use crate::entry::Entry;
use crate::store::TableStore;
use crate::{Error, Result};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<Entry>,
    fail_reads: bool,
    fail_writes: bool,
    reads: usize,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given rows already in the table
    pub fn with_rows(rows: Vec<Entry>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Make every subsequent read fail
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent write fail
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of reads served so far
    pub fn read_count(&self) -> usize {
        self.reads
    }

    /// Number of writes applied so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Direct view of the stored rows, bypassing the adapter contract
    pub fn rows(&self) -> &[Entry] {
        &self.rows
    }
}

impl TableStore for MemoryStore {
    fn read(&mut self, _ttl: Duration) -> Result<Vec<Entry>> {
        if self.fail_reads {
            return Err(Error::StoreUnavailable("injected read failure".into()));
        }
        self.reads += 1;
        Ok(self.rows.clone())
    }

    fn write(&mut self, rows: &[Entry]) -> Result<()> {
        if self.fail_writes {
            return Err(Error::StoreUnavailable("injected write failure".into()));
        }
        self.writes += 1;
        self.rows = rows.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Category;

    #[test]
    fn test_write_overwrites_whole_table() {
        let mut store = MemoryStore::with_rows(vec![
            Entry::new("Alex", Category::Mains, "Chili", ""),
            Entry::new("Sam", Category::Drinks, "Cider", ""),
        ]);

        let replacement = vec![Entry::new("Pat", Category::Dessert, "Pie", "")];
        store.write(&replacement).unwrap();

        let rows = store.read(Duration::ZERO).unwrap();
        assert_eq!(rows, replacement);
    }

    #[test]
    fn test_injected_failures() {
        let mut store = MemoryStore::new();

        store.fail_reads(true);
        assert!(store.read(Duration::ZERO).is_err());

        store.fail_reads(false);
        store.fail_writes(true);
        assert!(store.write(&[]).is_err());
        assert_eq!(store.write_count(), 0);
    }
}
