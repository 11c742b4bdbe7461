//! Data file fixtures

use super::constants::*;
use serde_json::json;
use std::path::Path;

/// Writes a small catalog in the on-disk format, in insertion order.
pub fn write_seeded_catalog(path: &Path) -> anyhow::Result<()> {
    let entries = json!([
        {
            "id": SEEDED_MUG_ID,
            "name": "Ceramic Mug",
            "price": 8.5,
            "description": "Holds a lot of coffee",
            "category": "Kitchen",
            "imageUrl": "https://cdn.example.com/mug.png",
            "createdAt": "2024-01-01T10:00:00Z",
            "updatedAt": "2024-01-01T10:00:00Z"
        },
        {
            "id": SEEDED_NOTEBOOK_ID,
            "name": "Dotted Notebook",
            "price": 12,
            "description": "A5, 120 pages",
            "category": "Stationery",
            "imageUrl": "",
            "createdAt": "2024-02-01T10:00:00Z",
            "updatedAt": "2024-02-01T10:00:00Z"
        },
        {
            "id": SEEDED_LAMP_ID,
            "name": "Desk Lamp",
            "price": 30,
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z"
        }
    ]);
    std::fs::write(path, serde_json::to_vec_pretty(&entries)?)?;
    Ok(())
}
