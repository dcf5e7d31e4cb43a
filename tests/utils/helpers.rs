/// Test helper functions and service builders
use fanhub::application::services::{Query, QueryService};
use fanhub::domain::entities::Document;
use fanhub::domain::repositories::ContentStore;
use fanhub::domain::schema::Collection;
use fanhub::infrastructure::fixtures::{seed_store, FixtureHomepage};
use fanhub::infrastructure::persistence::MemoryStore;
use fanhub::AppServices;
use std::sync::Arc;
use uuid::Uuid;

pub async fn seeded_store() -> Arc<MemoryStore> {
    Arc::new(seed_store().await.expect("fixture data is valid"))
}

pub async fn seeded_services() -> AppServices {
    let store: Arc<dyn ContentStore> = seeded_store().await;
    AppServices::new(
        store,
        Arc::new(FixtureHomepage::new().expect("fixture data is valid")),
    )
}

pub fn query_service(store: Arc<dyn ContentStore>) -> Arc<QueryService> {
    Arc::new(QueryService::new(store))
}

/// Store documents in order; panics on fixture mistakes so tests fail early.
pub async fn populate(store: &MemoryStore, docs: Vec<Document>) {
    for doc in docs {
        store.insert(doc).await.expect("insert test document");
    }
}

pub async fn id_by_slug(query: &QueryService, collection: Collection, slug: &str) -> Uuid {
    let found = query
        .find(Query::new(collection).equals("slug", slug).limit(1))
        .await
        .expect("lookup by slug");
    found.docs.first().expect("document exists").id()
}
