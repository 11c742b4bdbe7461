//! JSON-file-backed catalog store.
//!
//! The whole collection lives in one pretty-printed JSON array. Every read
//! parses the file fresh; every mutation rewrites it wholesale through a
//! temporary file that is renamed over the target, so readers only ever see
//! the previous or the next complete collection.

use super::models::*;
use super::query::apply_list_query;
use super::trait_def::CatalogStore;
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct JsonFileCatalogStore {
    file_path: PathBuf,
    /// Held across every load-modify-save cycle.
    write_lock: Mutex<()>,
}

impl JsonFileCatalogStore {
    /// Opens a store backed by `file_path`. The file and its parent
    /// directories are created on the first write.
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        if file_path.exists() {
            info!("Using catalog data file at {:?}", file_path);
        } else {
            info!(
                "Catalog data file {:?} does not exist yet, it will be created on first write",
                file_path
            );
        }
        JsonFileCatalogStore {
            file_path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // Guards (), so a poisoned lock carries no broken state.
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn try_load_all(&self) -> Result<Vec<CatalogEntry>> {
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read catalog file {:?}", self.file_path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog file {:?}", self.file_path))
    }

    fn load_or_empty(&self) -> Result<Vec<CatalogEntry>> {
        self.try_load_all().map_err(|err| {
            let missing = err
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() == ErrorKind::NotFound);
            if missing {
                debug!("Catalog file {:?} not found, treating as empty", self.file_path);
            } else {
                warn!("Treating catalog as empty: {:#}", err);
            }
            err
        })
    }

    fn write_entries(&self, entries: &[CatalogEntry]) -> Result<()> {
        let dir = match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create catalog directory {:?}", dir))?;

        let json = serde_json::to_vec_pretty(entries).context("Failed to serialize catalog")?;

        let mut tmp = NamedTempFile::new_in(&dir)
            .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;
        tmp.write_all(&json)
            .context("Failed to write temporary catalog file")?;
        // Temp files are created 0600; keep whatever mode the catalog already has.
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .context("Failed to copy catalog file permissions")?;
        }
        tmp.as_file()
            .sync_all()
            .context("Failed to sync temporary catalog file")?;
        tmp.persist(&self.file_path)
            .with_context(|| format!("Failed to replace catalog file {:?}", self.file_path))?;

        debug!("Saved {} catalog entries", entries.len());
        Ok(())
    }
}

/// Returns the current time, nudged forward if the clock has not moved past
/// `previous` so that every update is observable as strictly newer.
fn timestamp_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

fn generate_unique_id(entries: &[CatalogEntry]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !entries.iter().any(|e| e.id == id) {
            return id;
        }
    }
}

impl CatalogStore for JsonFileCatalogStore {
    fn load_all(&self) -> Vec<CatalogEntry> {
        self.load_or_empty().unwrap_or_default()
    }

    fn save_all(&self, entries: &[CatalogEntry]) -> Result<()> {
        let _guard = self.lock_writes();
        self.write_entries(entries)
    }

    fn list(&self, query: &ListQuery) -> ListPage {
        match self.load_or_empty() {
            Ok(entries) => apply_list_query(entries, query),
            Err(_) => ListPage::empty(),
        }
    }

    fn get_by_id(&self, id: &str) -> Option<CatalogEntry> {
        self.load_all().into_iter().find(|e| e.id == id)
    }

    fn insert(&self, fields: NewCatalogEntry) -> Result<CatalogEntry> {
        let _guard = self.lock_writes();
        let mut entries = self.load_all();

        let id = generate_unique_id(&entries);
        let entry = CatalogEntry::create(id, fields, Utc::now());
        entries.push(entry.clone());
        self.write_entries(&entries)?;

        info!("Created catalog entry {}", entry.id);
        Ok(entry)
    }

    fn update_by_id(&self, id: &str, patch: CatalogEntryPatch) -> Result<Option<CatalogEntry>> {
        let _guard = self.lock_writes();
        let mut entries = self.load_all();

        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        entry.apply_patch(patch);
        entry.updated_at = timestamp_after(entry.updated_at);
        let updated = entry.clone();

        self.write_entries(&entries)?;

        info!("Updated catalog entry {}", id);
        Ok(Some(updated))
    }

    fn delete_by_id(&self, id: &str) -> Result<bool> {
        let _guard = self.lock_writes();
        let mut entries = self.load_all();

        let Some(index) = entries.iter().position(|e| e.id == id) else {
            return Ok(false);
        };
        entries.remove(index);
        self.write_entries(&entries)?;

        info!("Deleted catalog entry {}", id);
        Ok(true)
    }
}
