pub mod articles;
pub mod categories;

pub use articles::ArticleDto;
pub use categories::CategoryDto;
