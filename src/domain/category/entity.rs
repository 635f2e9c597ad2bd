// src/domain/category/entity.rs
use chrono::{DateTime, Utc};

/// A category in a single-level hierarchy: `parent_id` of `None` marks a
/// root; `Some(id)` points at another category. Absent and empty are
/// distinct states and only `None` ever reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub display_order: i64,
    pub is_active: bool,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
