// tests/support/mocks/category_repos.rs
use async_trait::async_trait;
use kawara_core::domain::category::{Category, CategoryReadRepository, CategoryWriteRepository};
use kawara_core::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

/// In-memory stand-in for the category collection: display-order
/// listings, active-only root/children queries, NotFound on unmatched
/// writes.
#[derive(Default)]
pub struct InMemoryCategoryRepo {
    categories: Mutex<HashMap<String, Category>>,
    next_id: AtomicU64,
}

impl InMemoryCategoryRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn sorted_by_display_order(mut categories: Vec<Category>) -> Vec<Category> {
        categories.sort_by_key(|c| c.display_order);
        categories
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategoryRepo {
    async fn list(&self, active_only: bool) -> DomainResult<Vec<Category>> {
        let map = self.categories.lock().unwrap();
        let categories = map
            .values()
            .filter(|c| !active_only || c.is_active)
            .cloned()
            .collect();
        Ok(Self::sorted_by_display_order(categories))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Category>> {
        let map = self.categories.lock().unwrap();
        Ok(map.get(id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Category>> {
        let map = self.categories.lock().unwrap();
        Ok(map.values().find(|c| c.slug == slug).cloned())
    }

    async fn list_children(&self, parent_id: &str) -> DomainResult<Vec<Category>> {
        let map = self.categories.lock().unwrap();
        let children = map
            .values()
            .filter(|c| c.parent_id.as_deref() == Some(parent_id) && c.is_active)
            .cloned()
            .collect();
        Ok(Self::sorted_by_display_order(children))
    }

    async fn list_roots(&self) -> DomainResult<Vec<Category>> {
        let map = self.categories.lock().unwrap();
        let roots = map
            .values()
            .filter(|c| c.is_root() && c.is_active)
            .cloned()
            .collect();
        Ok(Self::sorted_by_display_order(roots))
    }

    async fn exists(&self, id: &str) -> DomainResult<bool> {
        let map = self.categories.lock().unwrap();
        Ok(map.contains_key(id))
    }

    async fn count(&self) -> DomainResult<u64> {
        let map = self.categories.lock().unwrap();
        Ok(map.len() as u64)
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: &Category) -> DomainResult<Category> {
        let id = format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let mut created = category.clone();
        created.id = id.clone();
        self.categories.lock().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn replace(&self, category: &Category) -> DomainResult<Category> {
        let mut map = self.categories.lock().unwrap();
        if !map.contains_key(&category.id) {
            return Err(DomainError::NotFound("Category not found.".into()));
        }
        map.insert(category.id.clone(), category.clone());
        Ok(category.clone())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let mut map = self.categories.lock().unwrap();
        if map.remove(id).is_none() {
            return Err(DomainError::NotFound("Category not found.".into()));
        }
        Ok(())
    }
}
