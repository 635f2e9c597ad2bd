// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::search_articles,
        crate::presentation::http::controllers::articles::get_article_by_id,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::record_article_view,
        crate::presentation::http::controllers::articles::list_articles_in_category,
        crate::presentation::http::controllers::articles::count_articles_in_category,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::get_root_categories,
        crate::presentation::http::controllers::categories::get_category_by_id,
        crate::presentation::http::controllers::categories::get_category_by_slug,
        crate::presentation::http::controllers::categories::get_subcategories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::presentation::http::controllers::categories::UpdateCategoryRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::CategoryDto
        )
    ),
    tags(
        (name = "Articles", description = "Article management endpoints"),
        (name = "Categories", description = "Category hierarchy endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Kawara API",
        description = "Article and category management backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
