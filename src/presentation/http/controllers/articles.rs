// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, RecordArticleViewCommand,
        UpdateArticleCommand,
    },
    dto::ArticleDto,
    queries::articles::{
        CountArticlesInCategoryQuery, GetArticleByIdQuery, GetArticleBySlugQuery,
        ListArticlesInCategoryQuery, ListArticlesQuery, SearchArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleListParams {
    #[serde(default)]
    pub published_only: bool,
    #[serde(default)]
    pub category_id: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleSearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: String,
    pub content: String,
    pub author: String,
    pub category_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: String,
    pub content: String,
    pub author: String,
    pub category_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses((status = 200, description = "Articles, newest first.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            published_only: params.published_only,
            category_id: params.category_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/search",
    params(ArticleSearchParams),
    responses((status = 200, description = "Articles matching the query.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleSearchParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery { query: params.q })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses((status = 200, description = "The article.", body = ArticleDto)),
    tag = "Articles"
)]
pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses((status = 200, description = "The article.", body = ArticleDto)),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses((status = 200, description = "The created article.", body = ArticleDto)),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        slug: payload.slug,
        summary: payload.summary,
        content: payload.content,
        author: payload.author,
        category_id: payload.category_id,
        tags: payload.tags,
        is_published: payload.is_published,
        published_at: payload.published_at,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses((status = 200, description = "The updated article.", body = ArticleDto)),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        summary: payload.summary,
        content: payload.content,
        author: payload.author,
        category_id: payload.category_id,
        tags: payload.tags,
        is_published: payload.is_published,
        published_at: payload.published_at,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses((status = 200, description = "Deletion confirmation.")),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/views",
    params(("id" = String, Path, description = "Article id")),
    responses((status = 200, description = "View recorded.")),
    tag = "Articles"
)]
pub async fn record_article_view(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .record_view(RecordArticleViewCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "recorded" })))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}/articles",
    params(("id" = String, Path, description = "Category id")),
    responses((status = 200, description = "Published articles in the category.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn list_articles_in_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles_in_category(ListArticlesInCategoryQuery { category_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}/articles/count",
    params(("id" = String, Path, description = "Category id")),
    responses((status = 200, description = "Number of articles referencing the category.")),
    tag = "Articles"
)]
pub async fn count_articles_in_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    let count = state
        .services
        .article_queries
        .count_articles_in_category(CountArticlesInCategoryQuery { category_id: id })
        .await
        .into_http()?;

    Ok(Json(json!({ "count": count })))
}
