// src/infrastructure/repositories/mongo_category.rs
use super::error::{map_mongo, parse_object_id};
use crate::domain::category::{Category, CategoryReadRepository, CategoryWriteRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{DateTime as BsonDateTime, Document, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};

const COLLECTION: &str = "categories";

#[derive(Clone)]
pub struct MongoCategoryWriteRepository {
    collection: Collection<CategoryDocument>,
}

impl MongoCategoryWriteRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[derive(Clone)]
pub struct MongoCategoryReadRepository {
    collection: Collection<CategoryDocument>,
}

impl MongoCategoryReadRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

/// Persisted shape of a category. A root category simply has no
/// `parentId` field; an empty-string parent is never written.
#[derive(Debug, Serialize, Deserialize)]
struct CategoryDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    slug: String,
    description: String,
    #[serde(rename = "parentId", default, skip_serializing_if = "Option::is_none")]
    parent_id: Option<ObjectId>,
    #[serde(rename = "createdAt")]
    created_at: BsonDateTime,
    #[serde(rename = "updatedAt")]
    updated_at: BsonDateTime,
    #[serde(rename = "displayOrder")]
    display_order: i64,
    #[serde(rename = "isActive")]
    is_active: bool,
}

impl CategoryDocument {
    fn try_from_entity(category: &Category) -> DomainResult<Self> {
        let id = if category.id.is_empty() {
            None
        } else {
            Some(parse_object_id(&category.id, "category id")?)
        };
        let parent_id = category
            .parent_id
            .as_deref()
            .map(|parent| parse_object_id(parent, "parent category id"))
            .transpose()?;
        Ok(Self {
            id,
            name: category.name.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
            parent_id,
            created_at: BsonDateTime::from_chrono(category.created_at),
            updated_at: BsonDateTime::from_chrono(category.updated_at),
            display_order: category.display_order,
            is_active: category.is_active,
        })
    }
}

impl From<CategoryDocument> for Category {
    fn from(document: CategoryDocument) -> Self {
        Self {
            id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: document.name,
            slug: document.slug,
            description: document.description,
            parent_id: document.parent_id.map(|id| id.to_hex()),
            created_at: document.created_at.to_chrono(),
            updated_at: document.updated_at.to_chrono(),
            display_order: document.display_order,
            is_active: document.is_active,
        }
    }
}

impl MongoCategoryReadRepository {
    /// Display-order listing for the given filter document.
    async fn find_sorted(&self, filter: Document) -> DomainResult<Vec<Category>> {
        let documents: Vec<CategoryDocument> = self
            .collection
            .find(filter)
            .sort(doc! { "displayOrder": 1 })
            .await
            .map_err(map_mongo)?
            .try_collect()
            .await
            .map_err(map_mongo)?;

        Ok(documents.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CategoryReadRepository for MongoCategoryReadRepository {
    async fn list(&self, active_only: bool) -> DomainResult<Vec<Category>> {
        let filter = if active_only {
            doc! { "isActive": true }
        } else {
            Document::new()
        };
        self.find_sorted(filter).await
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Category>> {
        let oid = parse_object_id(id, "category id")?;
        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo)?;
        Ok(document.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Category>> {
        let document = self
            .collection
            .find_one(doc! { "slug": slug })
            .await
            .map_err(map_mongo)?;
        Ok(document.map(Into::into))
    }

    async fn list_children(&self, parent_id: &str) -> DomainResult<Vec<Category>> {
        let oid = parse_object_id(parent_id, "parent category id")?;
        self.find_sorted(doc! { "parentId": oid, "isActive": true })
            .await
    }

    async fn list_roots(&self) -> DomainResult<Vec<Category>> {
        // A null comparison matches documents where the field is either
        // absent or explicitly null.
        self.find_sorted(doc! { "parentId": null, "isActive": true })
            .await
    }

    async fn exists(&self, id: &str) -> DomainResult<bool> {
        let oid = parse_object_id(id, "category id")?;
        let count = self
            .collection
            .count_documents(doc! { "_id": oid })
            .await
            .map_err(map_mongo)?;
        Ok(count > 0)
    }

    async fn count(&self) -> DomainResult<u64> {
        self.collection
            .count_documents(Document::new())
            .await
            .map_err(map_mongo)
    }
}

#[async_trait]
impl CategoryWriteRepository for MongoCategoryWriteRepository {
    async fn insert(&self, category: &Category) -> DomainResult<Category> {
        let document = CategoryDocument::try_from_entity(category)?;
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_mongo)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DomainError::Persistence("store returned a non-object id".into()))?;

        let mut created = category.clone();
        created.id = id.to_hex();
        Ok(created)
    }

    async fn replace(&self, category: &Category) -> DomainResult<Category> {
        let oid = parse_object_id(&category.id, "category id")?;
        let document = CategoryDocument::try_from_entity(category)?;

        let result = self
            .collection
            .replace_one(doc! { "_id": oid }, &document)
            .await
            .map_err(map_mongo)?;

        if result.matched_count == 0 {
            return Err(DomainError::NotFound("Category not found.".into()));
        }
        Ok(category.clone())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let oid = parse_object_id(id, "category id")?;
        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo)?;

        if result.deleted_count == 0 {
            return Err(DomainError::NotFound("Category not found.".into()));
        }
        Ok(())
    }
}
