//! CatalogStore trait definition.
//!
//! The server only talks to this trait, so the JSON file backend can be
//! replaced with an embedded database without touching the routes.

use super::models::{CatalogEntry, CatalogEntryPatch, ListPage, ListQuery, NewCatalogEntry};
use anyhow::Result;

/// Trait for catalog storage backends.
///
/// Reads are fail-open: a missing or unreadable backing store is presented
/// as an empty collection. Writes are fail-closed and return an error.
pub trait CatalogStore: Send + Sync {
    // =========================================================================
    // Whole Collection
    // =========================================================================

    /// Load every entry in stored order. Never fails.
    fn load_all(&self) -> Vec<CatalogEntry>;

    /// Replace the whole stored collection with `entries`.
    fn save_all(&self, entries: &[CatalogEntry]) -> Result<()>;

    // =========================================================================
    // Queries
    // =========================================================================

    /// Filtered, newest-first, paginated listing.
    fn list(&self, query: &ListQuery) -> ListPage;

    /// Get an entry by ID.
    fn get_by_id(&self, id: &str) -> Option<CatalogEntry>;

    /// Number of stored entries.
    fn count(&self) -> usize {
        self.load_all().len()
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Create a new entry. ID and timestamps are assigned by the store.
    fn insert(&self, fields: NewCatalogEntry) -> Result<CatalogEntry>;

    /// Merge `patch` over an existing entry.
    /// Returns Ok(None) if no entry has the given ID.
    fn update_by_id(&self, id: &str, patch: CatalogEntryPatch) -> Result<Option<CatalogEntry>>;

    /// Delete an entry. Returns Ok(false) if no entry has the given ID.
    fn delete_by_id(&self, id: &str) -> Result<bool>;
}
