use super::CategoryQueryService;
use crate::application::{dto::CategoryDto, error::ApplicationResult};

pub struct ListCategoriesQuery {
    pub active_only: bool,
}

impl CategoryQueryService {
    /// Lists categories in display order.
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self
            .read_repo
            .list(query.active_only)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "list categories failed");
                err
            })?;

        tracing::info!(
            count = categories.len(),
            active_only = query.active_only,
            "categories listed"
        );
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
