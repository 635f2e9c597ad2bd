// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};

pub struct DeleteCategoryCommand {
    pub id: String,
}

impl CategoryCommandService {
    /// Deletes the category document. Dependent articles and subcategories
    /// are left untouched; nothing cascades or blocks here.
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        if command.id.trim().is_empty() {
            tracing::warn!("delete category: id is required");
            return Err(ApplicationError::validation("Category id is required"));
        }

        match self.write_repo.delete(&command.id).await {
            Ok(()) => {
                tracing::info!(id = %command.id, "category deleted");
                Ok(())
            }
            Err(err) => {
                tracing::error!(id = %command.id, error = %err, "delete category failed");
                Err(err.into())
            }
        }
    }
}
