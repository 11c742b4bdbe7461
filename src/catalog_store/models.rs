//! Catalog entry models.
//!
//! `CatalogEntry` is the persisted record. Callers never build one directly:
//! they submit a `NewCatalogEntry` or a `CatalogEntryPatch` and get owned
//! copies of the stored record back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category assigned to entries created without one.
pub const DEFAULT_CATEGORY: &str = "General";

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

// =============================================================================
// Entities
// =============================================================================

/// A single catalog entry as stored in the data file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Fields supplied by a caller when creating an entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewCatalogEntry {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Fields supplied by a caller when updating an entry.
/// `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogEntryPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl CatalogEntry {
    /// Builds a fresh entry with defaults applied. Both timestamps are `now`.
    pub(super) fn create(id: String, fields: NewCatalogEntry, now: DateTime<Utc>) -> Self {
        CatalogEntry {
            id,
            name: fields.name,
            price: fields.price,
            description: fields.description.unwrap_or_default(),
            category: fields.category.unwrap_or_else(default_category),
            image_url: fields.image_url.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges the supplied fields over this entry. `id` and `created_at` are
    /// never touched; `updated_at` is set by the caller.
    pub(super) fn apply_patch(&mut self, patch: CatalogEntryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }
}

// =============================================================================
// Listing
// =============================================================================

/// Filters and paging requested for a listing.
/// Zero `page`/`limit` values are coerced to the defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// One page of a listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListPage {
    pub items: Vec<CatalogEntry>,
    /// Number of entries matching the filters, before pagination.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

impl ListPage {
    /// The page returned when the collection could not be loaded at all.
    pub fn empty() -> Self {
        ListPage {
            items: Vec::new(),
            total: 0,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }
}
