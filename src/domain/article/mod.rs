pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::Article;
pub use repository::{ArticleListFilter, ArticleReadRepository, ArticleWriteRepository};
pub use validation::validate_article;
