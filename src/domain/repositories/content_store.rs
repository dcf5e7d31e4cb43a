use crate::domain::entities::Document;
use crate::domain::schema::Collection;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Read access to the backing content store. The store is the data-access
/// collaborator: timeouts, retries and durable persistence live behind this
/// trait, not in the core. `get_all` returns documents in insertion order,
/// which is the façade's default sort.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn get_all(&self, collection: Collection) -> AppResult<Vec<Document>>;
    async fn get_by_id(&self, collection: Collection, id: Uuid) -> AppResult<Option<Document>>;
    async fn insert(&self, document: Document) -> AppResult<()>;
}
