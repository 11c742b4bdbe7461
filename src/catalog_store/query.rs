//! Read-side composition for listings: filter, sort, paginate.

use super::models::{CatalogEntry, ListPage, ListQuery, DEFAULT_LIMIT, DEFAULT_PAGE};

fn contains_ignore_case(haystack: &str, needle_lowercase: &str) -> bool {
    haystack.to_lowercase().contains(needle_lowercase)
}

/// Empty filter strings behave as if no filter was given.
fn normalized_filter(filter: &Option<String>) -> Option<String> {
    filter
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn coerce_positive(value: Option<usize>, default: usize) -> usize {
    match value {
        Some(v) if v > 0 => v,
        _ => default,
    }
}

/// Applies `query` to a full collection.
pub fn apply_list_query(mut entries: Vec<CatalogEntry>, query: &ListQuery) -> ListPage {
    if let Some(category) = normalized_filter(&query.category) {
        entries.retain(|e| contains_ignore_case(&e.category, &category));
    }

    if let Some(term) = normalized_filter(&query.search) {
        entries.retain(|e| {
            contains_ignore_case(&e.name, &term) || contains_ignore_case(&e.description, &term)
        });
    }

    // Vec::sort_by is stable: entries created at the same instant keep file order.
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let page = coerce_positive(query.page, DEFAULT_PAGE);
    let limit = coerce_positive(query.limit, DEFAULT_LIMIT);
    let total = entries.len();

    let start = (page - 1).saturating_mul(limit).min(total);
    let end = start.saturating_add(limit).min(total);
    let items = entries.drain(start..end).collect();

    ListPage {
        items,
        total,
        page,
        limit,
    }
}
