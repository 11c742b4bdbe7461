//! `/api/entries` handlers.
//!
//! Request bodies are shape-checked and validated here; the store only ever
//! sees trimmed, typed field sets.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::state::GuardedCatalogStore;
use crate::catalog_store::{
    validation::{validate_new_entry, validate_patch},
    CatalogEntry, CatalogEntryPatch, ListQuery, NewCatalogEntry,
};

const NAME_REQUIRED: &str = "Entry name is required";
const PRICE_INVALID: &str = "Price must be a valid number greater than zero";
const NOT_FOUND: &str = "Entry not found";
const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub(super) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error: message.into(),
    };
    (status, Json(body)).into_response()
}

fn internal_error(context: &str, err: anyhow::Error) -> Response {
    error!("{}: {:#}", context, err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}

// =============================================================================
// Request / Response bodies
// =============================================================================

/// Query string of the listing endpoint. Numbers are parsed leniently:
/// the leading integer is used ("2abc" is 2), and anything that does not
/// yield a positive integer falls back to the default.
#[derive(Deserialize, Debug, Default)]
pub(super) struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        let parse = |s: Option<String>| s.as_deref().and_then(parse_leading_usize);
        ListQuery {
            page: parse(params.page),
            limit: parse(params.limit),
            category: params.category,
            search: params.search,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(super) struct EntryBody {
    pub name: Option<String>,
    /// Accepted as a JSON number or a numeric string.
    pub price: Option<serde_json::Value>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Name and price, the two fields every create/update must carry.
struct RequiredFields {
    name: String,
    price: f64,
}

/// Length of the run of ASCII digits at the start of `s`.
fn digits_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parses the leading integer of `s`, ignoring trailing garbage.
/// Negative numbers yield `None`.
fn parse_leading_usize(s: &str) -> Option<usize> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    s[..digits_len(s)].parse().ok()
}

/// Parses the leading decimal number of `s` (sign, digits, fraction,
/// exponent), ignoring trailing garbage: "12abc" is 12.
fn parse_leading_f64(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    if s.starts_with(['+', '-']) {
        end += 1;
    }
    let int_len = digits_len(&s[end..]);
    end += int_len;
    let mut frac_len = 0;
    if s[end..].starts_with('.') {
        frac_len = digits_len(&s[end + 1..]);
        end += 1 + frac_len;
    }
    if int_len == 0 && frac_len == 0 {
        return None;
    }
    if s[end..].starts_with(['e', 'E']) {
        let mut exp_end = end + 1;
        if s[exp_end..].starts_with(['+', '-']) {
            exp_end += 1;
        }
        let exp_len = digits_len(&s[exp_end..]);
        if exp_len > 0 {
            end = exp_end + exp_len;
        }
    }
    s[..end].parse().ok()
}

fn parse_price(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => parse_leading_f64(s),
        _ => None,
    }
}

impl EntryBody {
    fn required_fields(&self) -> Result<RequiredFields, Response> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(error_response(StatusCode::BAD_REQUEST, NAME_REQUIRED));
        }

        let price = self.price.as_ref().and_then(parse_price);
        match price {
            Some(price) if price.is_finite() && price > 0.0 => Ok(RequiredFields {
                name: name.to_string(),
                price,
            }),
            _ => Err(error_response(StatusCode::BAD_REQUEST, PRICE_INVALID)),
        }
    }

    fn trimmed_description(&self) -> Option<String> {
        self.description.as_deref().map(|d| d.trim().to_string())
    }

    /// An empty category means "use the default" rather than "no category".
    fn non_empty_category(&self) -> Option<String> {
        self.category.clone().filter(|c| !c.is_empty())
    }

    fn into_new_entry(self) -> Result<NewCatalogEntry, Response> {
        let required = self.required_fields()?;
        let entry = NewCatalogEntry {
            name: required.name,
            price: required.price,
            description: self.trimmed_description(),
            category: self.non_empty_category(),
            image_url: self.image_url,
        };
        validate_new_entry(&entry)
            .map_err(|err| error_response(StatusCode::BAD_REQUEST, err.to_string()))?;
        Ok(entry)
    }

    fn into_patch(self) -> Result<CatalogEntryPatch, Response> {
        let required = self.required_fields()?;
        let patch = CatalogEntryPatch {
            name: Some(required.name),
            price: Some(required.price),
            description: self.trimmed_description(),
            category: self.non_empty_category(),
            image_url: self.image_url,
        };
        validate_patch(&patch)
            .map_err(|err| error_response(StatusCode::BAD_REQUEST, err.to_string()))?;
        Ok(patch)
    }
}

fn parse_body(body: Result<Json<EntryBody>, JsonRejection>) -> Result<EntryBody, Response> {
    body.map(|Json(body)| body)
        .map_err(|rejection| error_response(StatusCode::BAD_REQUEST, rejection.body_text()))
}

#[derive(Serialize, Debug)]
struct Pagination {
    current_page: usize,
    per_page: usize,
    total: usize,
    total_pages: usize,
}

#[derive(Serialize, Debug)]
struct ListResponse {
    data: Vec<CatalogEntry>,
    pagination: Pagination,
}

#[derive(Serialize, Debug)]
struct DataResponse {
    data: CatalogEntry,
}

#[derive(Serialize, Debug)]
struct MessageResponse {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<CatalogEntry>,
}

// =============================================================================
// Handlers
// =============================================================================

pub(super) async fn list_entries(
    State(store): State<GuardedCatalogStore>,
    Query(params): Query<ListParams>,
) -> Response {
    let page = store.list(&params.into());
    let pagination = Pagination {
        current_page: page.page,
        per_page: page.limit,
        total: page.total,
        total_pages: page.total_pages(),
    };
    Json(ListResponse {
        data: page.items,
        pagination,
    })
    .into_response()
}

pub(super) async fn create_entry(
    State(store): State<GuardedCatalogStore>,
    body: Result<Json<EntryBody>, JsonRejection>,
) -> Response {
    let new_entry = match parse_body(body).and_then(EntryBody::into_new_entry) {
        Ok(entry) => entry,
        Err(response) => return response,
    };

    match store.insert(new_entry) {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Entry created successfully",
                data: Some(entry),
            }),
        )
            .into_response(),
        Err(err) => internal_error("Failed to create entry", err),
    }
}

pub(super) async fn get_entry(
    State(store): State<GuardedCatalogStore>,
    Path(id): Path<String>,
) -> Response {
    match store.get_by_id(&id) {
        Some(entry) => Json(DataResponse { data: entry }).into_response(),
        None => error_response(StatusCode::NOT_FOUND, NOT_FOUND),
    }
}

pub(super) async fn update_entry(
    State(store): State<GuardedCatalogStore>,
    Path(id): Path<String>,
    body: Result<Json<EntryBody>, JsonRejection>,
) -> Response {
    let patch = match parse_body(body).and_then(EntryBody::into_patch) {
        Ok(patch) => patch,
        Err(response) => return response,
    };

    match store.update_by_id(&id, patch) {
        Ok(Some(entry)) => Json(MessageResponse {
            message: "Entry updated successfully",
            data: Some(entry),
        })
        .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, NOT_FOUND),
        Err(err) => internal_error("Failed to update entry", err),
    }
}

pub(super) async fn delete_entry(
    State(store): State<GuardedCatalogStore>,
    Path(id): Path<String>,
) -> Response {
    match store.delete_by_id(&id) {
        Ok(true) => Json(MessageResponse {
            message: "Entry deleted successfully",
            data: None,
        })
        .into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, NOT_FOUND),
        Err(err) => internal_error("Failed to delete entry", err),
    }
}
