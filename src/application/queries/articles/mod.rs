mod by_category;
mod get_by_id;
mod get_by_slug;
mod list;
mod search;
mod service;

pub use by_category::{CountArticlesInCategoryQuery, ListArticlesInCategoryQuery};
pub use get_by_id::GetArticleByIdQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use search::SearchArticlesQuery;
pub use service::ArticleQueryService;
