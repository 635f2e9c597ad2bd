// src/application/commands/articles/record_view.rs
use super::ArticleCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};

pub struct RecordArticleViewCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Bumps the view counter through the store's atomic increment, so
    /// concurrent readers never lose updates. Deliberately independent of
    /// `update_article`, which carries the stored count over unchanged.
    pub async fn record_view(&self, command: RecordArticleViewCommand) -> ApplicationResult<()> {
        if command.id.trim().is_empty() {
            tracing::warn!("record view: article id is required");
            return Err(ApplicationError::validation("Article id is required"));
        }

        match self.write_repo.increment_view_count(&command.id).await {
            Ok(()) => {
                tracing::info!(id = %command.id, "article view recorded");
                Ok(())
            }
            Err(err) => {
                tracing::error!(id = %command.id, error = %err, "record view failed");
                Err(err.into())
            }
        }
    }
}
