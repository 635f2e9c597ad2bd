use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        if query.slug.trim().is_empty() {
            tracing::warn!("get article by slug: slug is required");
            return Err(ApplicationError::validation("Article slug is required"));
        }

        let article = self
            .read_repo
            .find_by_slug(&query.slug)
            .await?
            .ok_or_else(|| {
                tracing::info!(slug = %query.slug, "article not found");
                ApplicationError::not_found(format!(
                    "Article with slug {} not found",
                    query.slug
                ))
            })?;

        tracing::info!(slug = %query.slug, "article retrieved");
        Ok(article.into())
    }
}
