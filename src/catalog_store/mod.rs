mod json_store;
mod models;
mod query;
mod trait_def;
pub mod validation;

pub use json_store::JsonFileCatalogStore;
pub use models::*;
pub use query::apply_list_query;
pub use trait_def::CatalogStore;
pub use validation::{validate_image_url, ValidationError};
