// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, categories},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    routing::get,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/v1/articles/search", get(articles::search_articles))
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article_by_id)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/v1/articles/{id}/views",
            axum::routing::post(articles::record_article_view),
        )
        .route(
            "/api/v1/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/v1/categories/roots",
            get(categories::get_root_categories),
        )
        .route(
            "/api/v1/categories/by-slug/{slug}",
            get(categories::get_category_by_slug),
        )
        .route(
            "/api/v1/categories/{id}",
            get(categories::get_category_by_id)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/api/v1/categories/{id}/children",
            get(categories::get_subcategories),
        )
        .route(
            "/api/v1/categories/{id}/articles",
            get(articles::list_articles_in_category),
        )
        .route(
            "/api/v1/categories/{id}/articles/count",
            get(articles::count_articles_in_category),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
