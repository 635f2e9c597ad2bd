// src/domain/category/repository.rs
use crate::domain::category::Category;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryReadRepository: Send + Sync {
    /// All categories ordered by display order; `active_only` restricts
    /// to active ones.
    async fn list(&self, active_only: bool) -> DomainResult<Vec<Category>>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Category>>;
    /// Active children of `parent_id`, display order ascending.
    async fn list_children(&self, parent_id: &str) -> DomainResult<Vec<Category>>;
    /// Active categories with no parent reference, display order
    /// ascending.
    async fn list_roots(&self) -> DomainResult<Vec<Category>>;
    async fn exists(&self, id: &str) -> DomainResult<bool>;
    async fn count(&self) -> DomainResult<u64>;
}

#[async_trait]
pub trait CategoryWriteRepository: Send + Sync {
    async fn insert(&self, category: &Category) -> DomainResult<Category>;
    async fn replace(&self, category: &Category) -> DomainResult<Category>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
