// src/domain/article/repository.rs
use crate::domain::article::Article;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Optional predicates for `list`. Both default to "no filter".
#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub published_only: bool,
    pub category_id: Option<String>,
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn list(&self, filter: ArticleListFilter) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Article>>;
    /// Published articles in a category, newest first. Intentionally
    /// narrower than `list` with a category filter, which returns drafts
    /// too; the two entry points have different publication semantics.
    async fn list_by_category(&self, category_id: &str) -> DomainResult<Vec<Article>>;
    /// Case-insensitive substring match across title, content, and
    /// summary; no relevance ranking beyond the newest-first sort.
    async fn search(&self, query: &str) -> DomainResult<Vec<Article>>;
    async fn count_by_category(&self, category_id: &str) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Inserts the article and returns it with the store-assigned id.
    async fn insert(&self, article: &Article) -> DomainResult<Article>;
    /// Full-document replace keyed by `article.id`; `NotFound` when no
    /// document matches.
    async fn replace(&self, article: &Article) -> DomainResult<Article>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
    /// Server-side atomic increment; never read-modify-write, so
    /// concurrent callers cannot lose updates.
    async fn increment_view_count(&self, id: &str) -> DomainResult<()>;
}
