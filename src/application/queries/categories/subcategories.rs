use super::CategoryQueryService;
use crate::application::{
    dto::CategoryDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetSubcategoriesQuery {
    pub parent_id: String,
}

impl CategoryQueryService {
    /// Active children of the given parent, in display order. The parent
    /// itself is never checked for existence; an unknown parent simply
    /// yields an empty list.
    pub async fn get_subcategories(
        &self,
        query: GetSubcategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        if query.parent_id.trim().is_empty() {
            tracing::warn!("get subcategories: parent category id is required");
            return Err(ApplicationError::validation(
                "Parent category id is required",
            ));
        }

        let children = self
            .read_repo
            .list_children(&query.parent_id)
            .await
            .map_err(|err| {
                tracing::error!(parent_id = %query.parent_id, error = %err, "get subcategories failed");
                err
            })?;

        tracing::info!(
            parent_id = %query.parent_id,
            count = children.len(),
            "subcategories retrieved"
        );
        Ok(children.into_iter().map(Into::into).collect())
    }
}
