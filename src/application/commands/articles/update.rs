// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, validate_article},
};
use chrono::{DateTime, Utc};

/// Full replacement of an article's editable fields. `created_at` and the
/// view count are carried over from the stored document; only `record_view`
/// mutates the count.
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    pub category_id: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        if command.id.trim().is_empty() {
            tracing::warn!("update article: id is required");
            return Err(ApplicationError::validation("Article id is required"));
        }

        let now = self.clock.now();
        let mut article = Article {
            id: command.id,
            title: command.title,
            slug: command.slug,
            summary: command.summary,
            content: command.content,
            author: command.author,
            category_id: command.category_id,
            tags: command.tags,
            is_published: command.is_published,
            created_at: now,
            updated_at: now,
            published_at: command.published_at,
            view_count: 0,
        };

        // Validate before any store round trip.
        let violations = validate_article(&article, now);
        if !violations.is_empty() {
            let errors = violations.join(", ");
            tracing::warn!(id = %article.id, %errors, "update article: validation failed");
            return Err(ApplicationError::validation(errors));
        }

        let existing = self
            .read_repo
            .find_by_id(&article.id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(id = %article.id, "update article: not found");
                ApplicationError::not_found(format!("Article with id {} not found", article.id))
            })?;

        article.created_at = existing.created_at;
        article.view_count = existing.view_count;

        match self.write_repo.replace(&article).await {
            Ok(updated) => {
                tracing::info!(id = %updated.id, "article updated");
                Ok(updated.into())
            }
            Err(err) => {
                tracing::error!(id = %article.id, error = %err, "update article: store rejected the write");
                Err(err.into())
            }
        }
    }
}
