use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            slug: article.slug,
            summary: article.summary,
            content: article.content,
            author: article.author,
            category_id: article.category_id,
            tags: article.tags,
            is_published: article.is_published,
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at: article.published_at,
            view_count: article.view_count,
        }
    }
}
