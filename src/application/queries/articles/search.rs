use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct SearchArticlesQuery {
    pub query: String,
}

impl ArticleQueryService {
    /// Free-text search across title, content, and summary.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let trimmed = query.query.trim();
        if trimmed.is_empty() {
            tracing::warn!("search articles: query is required");
            return Err(ApplicationError::validation("Search query is required"));
        }

        let articles = self.read_repo.search(trimmed).await.map_err(|err| {
            tracing::error!(query = %trimmed, error = %err, "search articles failed");
            err
        })?;

        tracing::info!(query = %trimmed, count = articles.len(), "articles searched");
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
