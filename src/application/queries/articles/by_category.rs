use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct ListArticlesInCategoryQuery {
    pub category_id: String,
}

pub struct CountArticlesInCategoryQuery {
    pub category_id: String,
}

impl ArticleQueryService {
    /// Published articles in a category, newest first. Drafts are excluded
    /// here even though `list_articles` with a category filter returns
    /// them; the two entry points intentionally disagree.
    pub async fn list_articles_in_category(
        &self,
        query: ListArticlesInCategoryQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        if query.category_id.trim().is_empty() {
            tracing::warn!("list articles in category: category id is required");
            return Err(ApplicationError::validation("Category id is required"));
        }

        let articles = self
            .read_repo
            .list_by_category(&query.category_id)
            .await
            .map_err(|err| {
                tracing::error!(category_id = %query.category_id, error = %err, "list articles in category failed");
                err
            })?;

        tracing::info!(
            category_id = %query.category_id,
            count = articles.len(),
            "articles in category listed"
        );
        Ok(articles.into_iter().map(Into::into).collect())
    }

    /// Counts every article referencing the category, published or not.
    pub async fn count_articles_in_category(
        &self,
        query: CountArticlesInCategoryQuery,
    ) -> ApplicationResult<u64> {
        if query.category_id.trim().is_empty() {
            tracing::warn!("count articles in category: category id is required");
            return Err(ApplicationError::validation("Category id is required"));
        }

        let count = self
            .read_repo
            .count_by_category(&query.category_id)
            .await
            .map_err(|err| {
                tracing::error!(category_id = %query.category_id, error = %err, "count articles in category failed");
                err
            })?;

        tracing::info!(category_id = %query.category_id, count, "articles in category counted");
        Ok(count)
    }
}
