//! Registry - mediates all reads and writes of the shared sign-up sheet
//!
//! The registry is the only component allowed to touch the table store.
//! It normalizes fetched rows into immutable snapshots, validates
//! submissions, enforces the dish-name uniqueness invariant at write
//! time, and commits appends as whole-table overwrites.
//!
//! Race note: the store offers no conditional write, so two submissions
//! racing between their fresh reads and their overwrites can both pass
//! the duplicate check, and the later overwrite can drop the earlier
//! row (a lost update). The registry narrows the window by re-reading
//! fresh immediately before every write, but cannot close it with the
//! primitives the store provides. A store adapter with an atomic append
//! or version-token write would close it behind the same trait.

use std::time::Duration;

use crate::entry::{Category, Entry};
use crate::snapshot::Snapshot;
use crate::store::TableStore;
use crate::{Error, Result};

/// Default freshness window for reads, matching the shared sheet's
/// near-real-time expectations without hammering the store on every
/// render.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

pub struct Registry<S: TableStore> {
    store: S,
    ttl: Duration,
}

impl<S: TableStore> Registry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            ttl: DEFAULT_TTL,
        }
    }

    /// Override the read freshness window. `Duration::ZERO` makes every
    /// fetch hit the store, which tests rely on for determinism.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fetch the current sheet contents as an immutable snapshot.
    ///
    /// Never fails: if the store cannot be read, the snapshot is empty
    /// and carries the reason in [`Snapshot::degraded_reason`], so a
    /// caller can keep rendering while telling the user the sheet was
    /// unreachable. No side effects; safe to call repeatedly.
    pub fn fetch_snapshot(&mut self) -> Snapshot {
        match self.store.read(self.ttl) {
            Ok(rows) => Snapshot::new(rows),
            Err(e) => {
                tracing::warn!("failed to read sign-up sheet: {}", e);
                Snapshot::degraded(e.to_string())
            }
        }
    }

    /// Submit a new dish entry.
    ///
    /// Validation runs fail-fast in order: contributor name, dish name,
    /// category. The duplicate check always runs against a fresh read,
    /// never a caller-held snapshot. The candidate is appended after the
    /// existing rows and committed as a single whole-table overwrite.
    ///
    /// Any snapshot fetched before a successful submit is stale
    /// afterwards; refetch before relying on it.
    pub fn submit(&mut self, candidate: Entry) -> Result<()> {
        let name = candidate.name.trim();
        if name.is_empty() {
            return Err(Error::MissingField("your name"));
        }
        if candidate.dish.trim().is_empty() {
            return Err(Error::MissingField("a dish name"));
        }
        let category: Category = candidate.category.parse()?;

        // Fresh read: a failed read here fails the submission rather
        // than risking a blind overwrite of rows we could not see.
        self.store.invalidate();
        let rows = self
            .store
            .read(Duration::ZERO)
            .map_err(store_unavailable)?;

        let key = candidate.dish_key();
        if rows.iter().any(|existing| existing.dish_key() == key) {
            return Err(Error::DuplicateDish(candidate.dish.trim().to_string()));
        }

        let appended = Entry {
            name: name.to_string(),
            category: category.as_str().to_string(),
            dish: candidate.dish,
            note: candidate.note,
        };
        let dish = appended.dish.clone();

        let mut updated = rows;
        updated.push(appended);

        self.store.write(&updated).map_err(store_unavailable)?;
        tracing::info!(dish = %dish, "entry added to sign-up sheet");

        // The next read must observe the new row even inside the TTL
        self.store.invalidate();
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

/// Collapse adapter-level failures into the store-unavailable outcome
/// the caller acts on, without double-wrapping
fn store_unavailable(e: Error) -> Error {
    match e {
        Error::StoreUnavailable(_) => e,
        other => Error::StoreUnavailable(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::store::SqliteStore;

    fn sample_entry(name: &str, dish: &str) -> Entry {
        Entry::new(name, Category::Mains, dish, "")
    }

    fn registry() -> Registry<MemoryStore> {
        Registry::new(MemoryStore::new()).with_ttl(Duration::ZERO)
    }

    #[test]
    fn test_submit_appends_to_empty_store() {
        let mut registry = registry();

        registry
            .submit(Entry::new("Alex", Category::Mains, "Lasagna", ""))
            .unwrap();

        let snapshot = registry.fetch_snapshot();
        assert_eq!(snapshot.len(), 1);
        let entry = &snapshot.entries()[0];
        assert_eq!(entry.name, "Alex");
        assert_eq!(entry.category, "🍗 Mains");
        assert_eq!(entry.dish, "Lasagna");
        assert_eq!(entry.note, "");
    }

    #[test]
    fn test_duplicate_dish_rejected_key_insensitively() {
        let mut registry = registry();
        registry.submit(sample_entry("Alex", "Lasagna")).unwrap();

        let err = registry
            .submit(sample_entry("Sam", " lasagna "))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateDish(_)));
        assert_eq!(registry.fetch_snapshot().len(), 1);

        let err = registry
            .submit(sample_entry("Sam", "LASAGNA "))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateDish(_)));
        assert_eq!(registry.fetch_snapshot().len(), 1);
    }

    #[test]
    fn test_validation_rejects_blank_fields_without_writing() {
        let mut registry = registry();

        let err = registry.submit(sample_entry("   ", "Chili")).unwrap_err();
        assert!(matches!(err, Error::MissingField("your name")));

        let err = registry.submit(sample_entry("Alex", "  ")).unwrap_err();
        assert!(matches!(err, Error::MissingField("a dish name")));

        let mut bad_category = sample_entry("Alex", "Chili");
        bad_category.category = "Casseroles".to_string();
        let err = registry.submit(bad_category).unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(_)));

        assert_eq!(registry.store().write_count(), 0);
        assert!(registry.fetch_snapshot().is_empty());
    }

    #[test]
    fn test_submit_preserves_prior_rows_and_order() {
        let mut registry = registry();
        registry.submit(sample_entry("Alex", "Lasagna")).unwrap();
        registry.submit(sample_entry("Sam", "Chili")).unwrap();
        registry.submit(sample_entry("Pat", "Stew")).unwrap();

        let dishes: Vec<&str> = registry
            .store()
            .rows()
            .iter()
            .map(|e| e.dish.as_str())
            .collect();
        assert_eq!(dishes, vec!["Lasagna", "Chili", "Stew"]);
    }

    #[test]
    fn test_uniqueness_holds_across_submissions() {
        let mut registry = registry();
        let dishes = ["Lasagna", "lasagna", "Chili", " CHILI ", "Stew"];
        for dish in dishes {
            let _ = registry.submit(sample_entry("Alex", dish));
        }

        let snapshot = registry.fetch_snapshot();
        let mut keys: Vec<String> = snapshot.iter().map(Entry::dish_key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), snapshot.len());
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn test_fetch_is_idempotent() {
        let mut registry = registry();
        registry.submit(sample_entry("Alex", "Lasagna")).unwrap();

        let first = registry.fetch_snapshot();
        let second = registry.fetch_snapshot();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fetch_fails_open_with_degraded_reason() {
        let mut registry = registry();
        registry.submit(sample_entry("Alex", "Lasagna")).unwrap();

        registry.store_mut().fail_reads(true);
        let snapshot = registry.fetch_snapshot();
        assert!(snapshot.is_empty());
        assert!(snapshot.degraded_reason().is_some());

        registry.store_mut().fail_reads(false);
        assert_eq!(registry.fetch_snapshot().len(), 1);
    }

    #[test]
    fn test_submit_fails_closed_when_read_fails() {
        let mut registry = registry();
        registry.submit(sample_entry("Alex", "Lasagna")).unwrap();

        registry.store_mut().fail_reads(true);
        let err = registry.submit(sample_entry("Sam", "Chili")).unwrap_err();
        assert!(matches!(err, Error::StoreUnavailable(_)));

        // The existing row survived; nothing was clobbered
        registry.store_mut().fail_reads(false);
        assert_eq!(registry.fetch_snapshot().len(), 1);
    }

    #[test]
    fn test_submit_surfaces_write_failure() {
        let mut registry = registry();
        registry.store_mut().fail_writes(true);

        let err = registry.submit(sample_entry("Alex", "Chili")).unwrap_err();
        assert!(matches!(err, Error::StoreUnavailable(_)));
    }

    #[test]
    fn test_submit_trims_name_and_keeps_dish_verbatim() {
        let mut registry = registry();
        registry
            .submit(Entry::new(
                "  Alex & Sam ",
                Category::Dessert,
                "Grandma's Pavlova ",
                " gluten free",
            ))
            .unwrap();

        let entry = &registry.store().rows()[0];
        assert_eq!(entry.name, "Alex & Sam");
        assert_eq!(entry.dish, "Grandma's Pavlova ");
        assert_eq!(entry.note, " gluten free");
    }

    #[test]
    fn test_submit_invalidates_ttl_cache() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut registry = Registry::new(store).with_ttl(Duration::from_secs(60));

        // Prime the adapter cache, then submit inside the TTL window
        assert!(registry.fetch_snapshot().is_empty());
        registry.submit(sample_entry("Alex", "Lasagna")).unwrap();

        assert_eq!(registry.fetch_snapshot().len(), 1);
    }

    #[test]
    fn test_category_aliases_accepted_on_submit() {
        let mut registry = registry();
        let mut entry = sample_entry("Alex", "Cider");
        entry.category = "drinks".to_string();

        registry.submit(entry).unwrap();
        assert_eq!(registry.store().rows()[0].category, "🍺 Drinks");
    }
}
