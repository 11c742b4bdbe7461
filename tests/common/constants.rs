//! Shared constants for end-to-end tests

// ============================================================================
// Seeded catalog
// ============================================================================

/// Oldest seeded entry, category "Kitchen".
pub const SEEDED_MUG_ID: &str = "seed-mug";

/// Seeded entry in the "Stationery" category.
pub const SEEDED_NOTEBOOK_ID: &str = "seed-notebook";

/// Newest seeded entry; stored with no category/description/imageUrl keys.
pub const SEEDED_LAMP_ID: &str = "seed-lamp";

pub const SEEDED_ENTRIES_COUNT: usize = 3;

// ============================================================================
// Timeouts
// ============================================================================

pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
