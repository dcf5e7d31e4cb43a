use crate::domain::entities::Document;
use crate::domain::repositories::ContentStore;
use crate::domain::schema::Collection;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

/// In-memory content store. Documents keep insertion order within their
/// collection, which is the façade's default sort. Volumes are tens to low
/// hundreds of entities, so lookups scan the collection.
pub struct MemoryStore {
    collections: DashMap<Collection, Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get_all(&self, collection: Collection) -> AppResult<Vec<Document>> {
        Ok(self
            .collections
            .get(&collection)
            .map(|docs| docs.clone())
            .unwrap_or_default())
    }

    async fn get_by_id(&self, collection: Collection, id: Uuid) -> AppResult<Option<Document>> {
        Ok(self
            .collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id() == id).cloned()))
    }

    /// Identifiers and slugs are unique within a collection; a clash is a
    /// validation error, not a silent overwrite.
    async fn insert(&self, document: Document) -> AppResult<()> {
        let collection = document.collection();
        let mut docs = self.collections.entry(collection).or_default();

        if docs.iter().any(|existing| existing.id() == document.id()) {
            return Err(AppError::ValidationError(format!(
                "duplicate id '{}' in collection '{}'",
                document.id(),
                collection
            )));
        }
        if let Some(slug) = document.slug() {
            if docs.iter().any(|existing| existing.slug() == Some(slug)) {
                return Err(AppError::ValidationError(format!(
                    "duplicate slug '{}' in collection '{}'",
                    slug, collection
                )));
            }
        }

        docs.push(document);
        Ok(())
    }
}
