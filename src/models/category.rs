// src/models/category.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display label (e.g., "History").
    /// Mapped from the column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Category labels keyed by id. Serializes as `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
