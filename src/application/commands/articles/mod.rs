mod create;
mod delete;
mod record_view;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use record_view::RecordArticleViewCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
