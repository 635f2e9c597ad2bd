// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{
        CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
    },
    dto::CategoryDto,
    queries::categories::{
        GetCategoryByIdQuery, GetCategoryBySlugQuery, GetSubcategoriesQuery,
        ListCategoriesQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryListParams {
    #[serde(default)]
    pub active_only: bool,
}

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(CategoryListParams),
    responses((status = 200, description = "Categories in display order.", body = [CategoryDto])),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CategoryListParams>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories(ListCategoriesQuery {
            active_only: params.active_only,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/roots",
    responses((status = 200, description = "Active root categories.", body = [CategoryDto])),
    tag = "Categories"
)]
pub async fn get_root_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .get_root_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    responses((status = 200, description = "The category.", body = CategoryDto)),
    tag = "Categories"
)]
pub async fn get_category_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_id(GetCategoryByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/by-slug/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses((status = 200, description = "The category.", body = CategoryDto)),
    tag = "Categories"
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}/children",
    params(("id" = String, Path, description = "Parent category id")),
    responses((status = 200, description = "Active subcategories in display order.", body = [CategoryDto])),
    tag = "Categories"
)]
pub async fn get_subcategories(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .get_subcategories(GetSubcategoriesQuery { parent_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses((status = 200, description = "The created category.", body = CategoryDto)),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = CreateCategoryCommand {
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        parent_id: payload.parent_id,
        display_order: payload.display_order,
        is_active: payload.is_active,
    };

    state
        .services
        .category_commands
        .create_category(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses((status = 200, description = "The updated category.", body = CategoryDto)),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        parent_id: payload.parent_id,
        display_order: payload.display_order,
        is_active: payload.is_active,
    };

    state
        .services
        .category_commands
        .update_category(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    responses((status = 200, description = "Deletion confirmation.")),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
