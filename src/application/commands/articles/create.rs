// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, validate_article},
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
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
    /// Validates the draft and persists it. Both timestamps are set to the
    /// same instant; the view count starts at zero and the store assigns
    /// the id.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let now = self.clock.now();
        let article = Article {
            id: String::new(),
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

        let violations = validate_article(&article, now);
        if !violations.is_empty() {
            let errors = violations.join(", ");
            tracing::warn!(%errors, "create article: validation failed");
            return Err(ApplicationError::validation(errors));
        }

        match self.write_repo.insert(&article).await {
            Ok(created) => {
                tracing::info!(id = %created.id, slug = %created.slug, "article created");
                Ok(created.into())
            }
            Err(err) => {
                tracing::error!(error = %err, "create article: store rejected the write");
                Err(err.into())
            }
        }
    }
}
