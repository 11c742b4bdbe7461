//! Validation for catalog entries.
//!
//! The store itself does not validate; the HTTP layer runs these checks
//! before calling insert/update.

use super::models::{CatalogEntryPatch, NewCatalogEntry};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

// Scheme, host and extension match ASCII only: `(?i-u)` keeps case folding
// from mapping characters such as U+212A (Kelvin) or U+017F (long s) onto letters.
lazy_static! {
    static ref URL_PATTERN: Regex =
        Regex::new(r"^((?i-u:https?)://)([0-9A-Za-z_.-]+)\.((?i-u:[a-z]){2,})(\S*)?$").unwrap();
    static ref IMAGE_EXTENSION_PATTERN: Regex =
        Regex::new(r"(?i-u)\.(jpg|jpeg|png|gif|webp|svg)$").unwrap();
}

/// Validation error types
#[derive(Debug, PartialEq)]
pub enum ValidationError {
    EmptyField { field: &'static str },
    NonPositivePrice { value: f64 },
    InvalidImageUrl { url: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyField { field } => {
                write!(f, "Field '{}' is required but was empty", field)
            }
            ValidationError::NonPositivePrice { value } => {
                write!(f, "Price must be a valid number greater than zero, got {}", value)
            }
            ValidationError::InvalidImageUrl { url } => {
                write!(f, "Image URL '{}' is not a valid image link", url)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Returns true if `url` is empty or an http(s) link ending in a known
/// image extension.
pub fn validate_image_url(url: &str) -> bool {
    if url.is_empty() {
        return true;
    }
    URL_PATTERN.is_match(url) && IMAGE_EXTENSION_PATTERN.is_match(url)
}

fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "name" });
    }
    Ok(())
}

fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::NonPositivePrice { value: price });
    }
    Ok(())
}

fn validate_optional_image_url(image_url: Option<&str>) -> ValidationResult<()> {
    match image_url {
        Some(url) if !validate_image_url(url) => Err(ValidationError::InvalidImageUrl {
            url: url.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Validate the fields of an entry about to be created
pub fn validate_new_entry(entry: &NewCatalogEntry) -> ValidationResult<()> {
    validate_name(&entry.name)?;
    validate_price(entry.price)?;
    validate_optional_image_url(entry.image_url.as_deref())
}

/// Validate the supplied fields of an update
pub fn validate_patch(patch: &CatalogEntryPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
    }
    validate_optional_image_url(patch.image_url.as_deref())
}
