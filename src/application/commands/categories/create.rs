// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{Category, validate_category},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub parent_id: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let now = self.clock.now();
        let category = Category {
            id: String::new(),
            name: command.name,
            slug: command.slug,
            description: command.description,
            // A blank parent is "no parent"; the store never sees "".
            parent_id: command.parent_id.filter(|p| !p.trim().is_empty()),
            created_at: now,
            updated_at: now,
            display_order: command.display_order,
            is_active: command.is_active,
        };

        let violations = validate_category(&category);
        if !violations.is_empty() {
            let errors = violations.join(", ");
            tracing::warn!(%errors, "create category: validation failed");
            return Err(ApplicationError::validation(errors));
        }

        match self.write_repo.insert(&category).await {
            Ok(created) => {
                tracing::info!(id = %created.id, slug = %created.slug, "category created");
                Ok(created.into())
            }
            Err(err) => {
                tracing::error!(error = %err, "create category: store rejected the write");
                Err(err.into())
            }
        }
    }
}
