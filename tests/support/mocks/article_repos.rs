// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use kawara_core::domain::article::{
    Article, ArticleListFilter, ArticleReadRepository, ArticleWriteRepository,
};
use kawara_core::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

/// In-memory stand-in for the article collection. Mirrors the document
/// store's observable semantics: hex ids assigned on insert, newest-first
/// listings, published-only category listings, NotFound on unmatched
/// writes, and an increment that bypasses full replacement.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<HashMap<String, Article>>,
    next_id: AtomicU64,
}

impl InMemoryArticleRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn sorted_newest_first(mut articles: Vec<Article>) -> Vec<Article> {
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        articles
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn list(&self, filter: ArticleListFilter) -> DomainResult<Vec<Article>> {
        let map = self.articles.lock().unwrap();
        let articles = map
            .values()
            .filter(|a| !filter.published_only || a.is_published)
            .filter(|a| {
                filter
                    .category_id
                    .as_deref()
                    .is_none_or(|category| a.category_id == category)
            })
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(articles))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Article>> {
        let map = self.articles.lock().unwrap();
        Ok(map.get(id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Article>> {
        let map = self.articles.lock().unwrap();
        Ok(map.values().find(|a| a.slug == slug).cloned())
    }

    async fn list_by_category(&self, category_id: &str) -> DomainResult<Vec<Article>> {
        let map = self.articles.lock().unwrap();
        let articles = map
            .values()
            .filter(|a| a.category_id == category_id && a.is_published)
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(articles))
    }

    async fn search(&self, query: &str) -> DomainResult<Vec<Article>> {
        let needle = query.to_lowercase();
        let map = self.articles.lock().unwrap();
        let articles = map
            .values()
            .filter(|a| {
                a.title.to_lowercase().contains(&needle)
                    || a.content.to_lowercase().contains(&needle)
                    || a.summary.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(articles))
    }

    async fn count_by_category(&self, category_id: &str) -> DomainResult<u64> {
        let map = self.articles.lock().unwrap();
        Ok(map.values().filter(|a| a.category_id == category_id).count() as u64)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: &Article) -> DomainResult<Article> {
        let id = format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let mut created = article.clone();
        created.id = id.clone();
        self.articles.lock().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn replace(&self, article: &Article) -> DomainResult<Article> {
        let mut map = self.articles.lock().unwrap();
        if !map.contains_key(&article.id) {
            return Err(DomainError::NotFound("Article not found.".into()));
        }
        map.insert(article.id.clone(), article.clone());
        Ok(article.clone())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let mut map = self.articles.lock().unwrap();
        if map.remove(id).is_none() {
            return Err(DomainError::NotFound("Article not found.".into()));
        }
        Ok(())
    }

    async fn increment_view_count(&self, id: &str) -> DomainResult<()> {
        let mut map = self.articles.lock().unwrap();
        let article = map
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound("Article not found.".into()))?;
        article.view_count += 1;
        Ok(())
    }
}

/// Write repository whose every operation fails with a persistence error,
/// for store-fault paths.
pub struct FailingArticleWrite;

#[async_trait]
impl ArticleWriteRepository for FailingArticleWrite {
    async fn insert(&self, _article: &Article) -> DomainResult<Article> {
        Err(DomainError::Persistence("write rejected".into()))
    }

    async fn replace(&self, _article: &Article) -> DomainResult<Article> {
        Err(DomainError::Persistence("write rejected".into()))
    }

    async fn delete(&self, _id: &str) -> DomainResult<()> {
        Err(DomainError::Persistence("write rejected".into()))
    }

    async fn increment_view_count(&self, _id: &str) -> DomainResult<()> {
        Err(DomainError::Persistence("write rejected".into()))
    }
}
