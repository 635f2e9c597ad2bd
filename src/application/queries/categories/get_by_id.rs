use super::CategoryQueryService;
use crate::application::{
    dto::CategoryDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetCategoryByIdQuery {
    pub id: String,
}

impl CategoryQueryService {
    pub async fn get_category_by_id(
        &self,
        query: GetCategoryByIdQuery,
    ) -> ApplicationResult<CategoryDto> {
        if query.id.trim().is_empty() {
            tracing::warn!("get category by id: id is required");
            return Err(ApplicationError::validation("Category id is required"));
        }

        let category = self.read_repo.find_by_id(&query.id).await?.ok_or_else(|| {
            tracing::info!(id = %query.id, "category not found");
            ApplicationError::not_found(format!("Category with id {} not found", query.id))
        })?;

        tracing::info!(id = %query.id, "category retrieved");
        Ok(category.into())
    }
}
