// src/domain/article/entity.rs
use chrono::{DateTime, Utc};

/// A blog article with content, metadata, and publication state.
///
/// `id` is the store-assigned hex object identifier, empty until the
/// article has been persisted. `category_id` references a category by id;
/// the reference is shape-checked only, never resolved (no integrity
/// enforcement exists in this layer).
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    pub category_id: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
}

impl Article {
    /// True once the store has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}
