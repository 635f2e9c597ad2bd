// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{Category, validate_category},
};

pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub parent_id: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        if command.id.trim().is_empty() {
            tracing::warn!("update category: id is required");
            return Err(ApplicationError::validation("Category id is required"));
        }

        let now = self.clock.now();
        let mut category = Category {
            id: command.id,
            name: command.name,
            slug: command.slug,
            description: command.description,
            parent_id: command.parent_id.filter(|p| !p.trim().is_empty()),
            created_at: now,
            updated_at: now,
            display_order: command.display_order,
            is_active: command.is_active,
        };

        let violations = validate_category(&category);
        if !violations.is_empty() {
            let errors = violations.join(", ");
            tracing::warn!(id = %category.id, %errors, "update category: validation failed");
            return Err(ApplicationError::validation(errors));
        }

        let existing = self
            .read_repo
            .find_by_id(&category.id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(id = %category.id, "update category: not found");
                ApplicationError::not_found(format!("Category with id {} not found", category.id))
            })?;

        category.created_at = existing.created_at;

        match self.write_repo.replace(&category).await {
            Ok(updated) => {
                tracing::info!(id = %updated.id, "category updated");
                Ok(updated.into())
            }
            Err(err) => {
                tracing::error!(id = %category.id, error = %err, "update category: store rejected the write");
                Err(err.into())
            }
        }
    }
}
