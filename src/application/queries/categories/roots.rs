use super::CategoryQueryService;
use crate::application::{dto::CategoryDto, error::ApplicationResult};

impl CategoryQueryService {
    /// Active top-of-hierarchy categories (no parent reference), in
    /// display order.
    pub async fn get_root_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let roots = self.read_repo.list_roots().await.map_err(|err| {
            tracing::error!(error = %err, "get root categories failed");
            err
        })?;

        tracing::info!(count = roots.len(), "root categories retrieved");
        Ok(roots.into_iter().map(Into::into).collect())
    }
}
