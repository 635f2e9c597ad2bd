use super::CategoryQueryService;
use crate::application::{
    dto::CategoryDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetCategoryBySlugQuery {
    pub slug: String,
}

impl CategoryQueryService {
    pub async fn get_category_by_slug(
        &self,
        query: GetCategoryBySlugQuery,
    ) -> ApplicationResult<CategoryDto> {
        if query.slug.trim().is_empty() {
            tracing::warn!("get category by slug: slug is required");
            return Err(ApplicationError::validation("Category slug is required"));
        }

        let category = self
            .read_repo
            .find_by_slug(&query.slug)
            .await?
            .ok_or_else(|| {
                tracing::info!(slug = %query.slug, "category not found");
                ApplicationError::not_found(format!(
                    "Category with slug {} not found",
                    query.slug
                ))
            })?;

        tracing::info!(slug = %query.slug, "category retrieved");
        Ok(category.into())
    }
}
