// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        if command.id.trim().is_empty() {
            tracing::warn!("delete article: id is required");
            return Err(ApplicationError::validation("Article id is required"));
        }

        match self.write_repo.delete(&command.id).await {
            Ok(()) => {
                tracing::info!(id = %command.id, "article deleted");
                Ok(())
            }
            Err(err) => {
                tracing::error!(id = %command.id, error = %err, "delete article failed");
                Err(err.into())
            }
        }
    }
}
