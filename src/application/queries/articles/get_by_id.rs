use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        if query.id.trim().is_empty() {
            tracing::warn!("get article by id: id is required");
            return Err(ApplicationError::validation("Article id is required"));
        }

        let article = self.read_repo.find_by_id(&query.id).await?.ok_or_else(|| {
            tracing::info!(id = %query.id, "article not found");
            ApplicationError::not_found(format!("Article with id {} not found", query.id))
        })?;

        tracing::info!(id = %query.id, "article retrieved");
        Ok(article.into())
    }
}
