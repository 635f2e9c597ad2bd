// src/infrastructure/repositories/mongo_article.rs
use super::error::{map_mongo, parse_object_id};
use crate::domain::article::{
    Article, ArticleListFilter, ArticleReadRepository, ArticleWriteRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{DateTime as BsonDateTime, Document, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};

const COLLECTION: &str = "articles";

#[derive(Clone)]
pub struct MongoArticleWriteRepository {
    collection: Collection<ArticleDocument>,
}

impl MongoArticleWriteRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[derive(Clone)]
pub struct MongoArticleReadRepository {
    collection: Collection<ArticleDocument>,
}

impl MongoArticleReadRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

/// Persisted shape of an article. The field names are the collection's
/// wire names; this struct is the single place they are spelled out.
#[derive(Debug, Serialize, Deserialize)]
struct ArticleDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    slug: String,
    summary: String,
    content: String,
    author: String,
    #[serde(rename = "categoryId")]
    category_id: ObjectId,
    tags: Vec<String>,
    #[serde(rename = "isPublished")]
    is_published: bool,
    #[serde(rename = "createdAt")]
    created_at: BsonDateTime,
    #[serde(rename = "updatedAt")]
    updated_at: BsonDateTime,
    #[serde(rename = "publishedAt", default, skip_serializing_if = "Option::is_none")]
    published_at: Option<BsonDateTime>,
    #[serde(rename = "viewCount")]
    view_count: i64,
}

impl ArticleDocument {
    fn try_from_entity(article: &Article) -> DomainResult<Self> {
        let id = if article.is_persisted() {
            Some(parse_object_id(&article.id, "article id")?)
        } else {
            None
        };
        Ok(Self {
            id,
            title: article.title.clone(),
            slug: article.slug.clone(),
            summary: article.summary.clone(),
            content: article.content.clone(),
            author: article.author.clone(),
            category_id: parse_object_id(&article.category_id, "category id")?,
            tags: article.tags.clone(),
            is_published: article.is_published,
            created_at: BsonDateTime::from_chrono(article.created_at),
            updated_at: BsonDateTime::from_chrono(article.updated_at),
            published_at: article.published_at.map(BsonDateTime::from_chrono),
            view_count: article.view_count,
        })
    }
}

impl From<ArticleDocument> for Article {
    fn from(document: ArticleDocument) -> Self {
        Self {
            id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: document.title,
            slug: document.slug,
            summary: document.summary,
            content: document.content,
            author: document.author,
            category_id: document.category_id.to_hex(),
            tags: document.tags,
            is_published: document.is_published,
            created_at: document.created_at.to_chrono(),
            updated_at: document.updated_at.to_chrono(),
            published_at: document.published_at.map(BsonDateTime::to_chrono),
            view_count: document.view_count,
        }
    }
}

impl MongoArticleReadRepository {
    /// Newest-first listing for the given filter document.
    async fn find_sorted(&self, filter: Document) -> DomainResult<Vec<Article>> {
        let documents: Vec<ArticleDocument> = self
            .collection
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(map_mongo)?
            .try_collect()
            .await
            .map_err(map_mongo)?;

        Ok(documents.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ArticleReadRepository for MongoArticleReadRepository {
    async fn list(&self, filter: ArticleListFilter) -> DomainResult<Vec<Article>> {
        let mut conditions = Document::new();
        if filter.published_only {
            conditions.insert("isPublished", true);
        }
        if let Some(category_id) = &filter.category_id {
            conditions.insert("categoryId", parse_object_id(category_id, "category id")?);
        }
        self.find_sorted(conditions).await
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Article>> {
        let oid = parse_object_id(id, "article id")?;
        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo)?;
        Ok(document.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Article>> {
        let document = self
            .collection
            .find_one(doc! { "slug": slug })
            .await
            .map_err(map_mongo)?;
        Ok(document.map(Into::into))
    }

    async fn list_by_category(&self, category_id: &str) -> DomainResult<Vec<Article>> {
        let oid = parse_object_id(category_id, "category id")?;
        // Drafts are excluded here; `list` with a category filter keeps
        // them. The two entry points intentionally differ.
        self.find_sorted(doc! { "categoryId": oid, "isPublished": true })
            .await
    }

    async fn search(&self, query: &str) -> DomainResult<Vec<Article>> {
        let filter = doc! {
            "$or": [
                { "title": { "$regex": query, "$options": "i" } },
                { "content": { "$regex": query, "$options": "i" } },
                { "summary": { "$regex": query, "$options": "i" } },
            ]
        };
        self.find_sorted(filter).await
    }

    async fn count_by_category(&self, category_id: &str) -> DomainResult<u64> {
        let oid = parse_object_id(category_id, "category id")?;
        self.collection
            .count_documents(doc! { "categoryId": oid })
            .await
            .map_err(map_mongo)
    }
}

#[async_trait]
impl ArticleWriteRepository for MongoArticleWriteRepository {
    async fn insert(&self, article: &Article) -> DomainResult<Article> {
        let document = ArticleDocument::try_from_entity(article)?;
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_mongo)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DomainError::Persistence("store returned a non-object id".into()))?;

        let mut created = article.clone();
        created.id = id.to_hex();
        Ok(created)
    }

    async fn replace(&self, article: &Article) -> DomainResult<Article> {
        let oid = parse_object_id(&article.id, "article id")?;
        let document = ArticleDocument::try_from_entity(article)?;

        let result = self
            .collection
            .replace_one(doc! { "_id": oid }, &document)
            .await
            .map_err(map_mongo)?;

        if result.matched_count == 0 {
            return Err(DomainError::NotFound("Article not found.".into()));
        }
        Ok(article.clone())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let oid = parse_object_id(id, "article id")?;
        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo)?;

        if result.deleted_count == 0 {
            return Err(DomainError::NotFound("Article not found.".into()));
        }
        Ok(())
    }

    async fn increment_view_count(&self, id: &str) -> DomainResult<()> {
        let oid = parse_object_id(id, "article id")?;
        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$inc": { "viewCount": 1 } })
            .await
            .map_err(map_mongo)?;

        if result.matched_count == 0 {
            return Err(DomainError::NotFound("Article not found.".into()));
        }
        Ok(())
    }
}
