use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleListFilter,
};

pub struct ListArticlesQuery {
    pub published_only: bool,
    pub category_id: Option<String>,
}

impl ArticleQueryService {
    /// Lists articles newest-first. Unlike the category listing, drafts
    /// are included unless `published_only` is set.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let filter = ArticleListFilter {
            published_only: query.published_only,
            category_id: query
                .category_id
                .filter(|id| !id.trim().is_empty()),
        };

        let articles = self.read_repo.list(filter).await.map_err(|err| {
            tracing::error!(error = %err, "list articles failed");
            err
        })?;

        tracing::info!(
            count = articles.len(),
            published_only = query.published_only,
            "articles listed"
        );
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
