mod get_by_id;
mod get_by_slug;
mod list;
mod roots;
mod service;
mod subcategories;

pub use get_by_id::GetCategoryByIdQuery;
pub use get_by_slug::GetCategoryBySlugQuery;
pub use list::ListCategoriesQuery;
pub use service::CategoryQueryService;
pub use subcategories::GetSubcategoriesQuery;
