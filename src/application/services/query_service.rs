use crate::domain::entities::Document;
use crate::domain::repositories::ContentStore;
use crate::domain::schema::{self, Collection, FieldValue, SortValue};
use crate::domain::services::RelationResolver;
use crate::shared::application::pagination::{FindResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::sync::Arc;
use uuid::Uuid;

/// One filter condition. Conditions on a query combine with logical AND.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Equality on a scalar or enum field.
    Equals { field: String, value: FieldValue },
    /// Set containment on a reference field ("artist X belongs to team Y").
    Contains { field: String, id: Uuid },
}

/// A read query against one collection.
#[derive(Debug, Clone)]
pub struct Query {
    pub collection: Collection,
    pub conditions: Vec<Condition>,
    /// Sort key; a leading '-' means descending ("-publishedDate").
    /// Unset means insertion order.
    pub sort: Option<String>,
    pub pagination: PaginationParams,
    pub depth: u8,
}

impl Query {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            conditions: Vec::new(),
            sort: None,
            pagination: PaginationParams::default(),
            depth: 0,
        }
    }

    pub fn equals(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.conditions.push(Condition::Equals {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn contains(mut self, field: &str, id: Uuid) -> Self {
        self.conditions.push(Condition::Contains {
            field: field.to_string(),
            id,
        });
        self
    }

    pub fn sort(mut self, key: &str) -> Self {
        self.sort = Some(key.to_string());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.pagination.offset = offset;
        self
    }

    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }
}

/// The query façade: filtered, sorted, paginated retrieval over the content
/// store, with relationship expansion to the requested depth. Read-only.
pub struct QueryService {
    store: Arc<dyn ContentStore>,
    resolver: RelationResolver,
}

impl QueryService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            resolver: RelationResolver::new(Arc::clone(&store)),
            store,
        }
    }

    /// Execute a query. Results preserve the requested sort order (insertion
    /// order when unspecified); `total_docs` counts all matches before the
    /// pagination window is applied.
    pub async fn find(&self, query: Query) -> AppResult<FindResult<Document>> {
        Self::validate(&query)?;
        let now = Utc::now();

        let all = self.store.get_all(query.collection).await?;
        let mut matches = Vec::new();
        for doc in all {
            if Self::matches(&doc, &query.conditions, now)? {
                matches.push(doc);
            }
        }

        if let Some(sort) = &query.sort {
            Self::sort_documents(&mut matches, sort)?;
        }

        let total_docs = matches.len() as u64;
        let window = query.pagination.apply(matches);

        let docs = if query.depth == 0 {
            window
        } else {
            let mut resolved = Vec::with_capacity(window.len());
            for doc in window {
                resolved.push(self.resolver.resolve(doc, query.depth).await?);
            }
            resolved
        };

        Ok(FindResult::new(docs, total_docs))
    }

    /// Count matches without fetching, sorting, or resolving.
    pub async fn count(&self, collection: Collection, conditions: &[Condition]) -> AppResult<u64> {
        Self::validate_conditions(collection, conditions)?;
        let now = Utc::now();

        let all = self.store.get_all(collection).await?;
        let mut count = 0;
        for doc in all {
            if Self::matches(&doc, conditions, now)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Fail fast on unknown fields and sort keys, before any document is
    /// examined. A misconfigured query must never look like an empty result.
    fn validate(query: &Query) -> AppResult<()> {
        Self::validate_conditions(query.collection, &query.conditions)?;
        if let Some(sort) = &query.sort {
            let key = sort.strip_prefix('-').unwrap_or(sort);
            schema::validate_sort_key(query.collection, key)?;
        }
        Ok(())
    }

    fn validate_conditions(collection: Collection, conditions: &[Condition]) -> AppResult<()> {
        for condition in conditions {
            match condition {
                Condition::Equals { field, .. } => {
                    schema::validate_scalar_field(collection, field)?
                }
                Condition::Contains { field, .. } => {
                    schema::validate_reference_field(collection, field)?
                }
            }
        }
        Ok(())
    }

    fn matches(doc: &Document, conditions: &[Condition], now: DateTime<Utc>) -> AppResult<bool> {
        for condition in conditions {
            let hit = match condition {
                Condition::Equals { field, value } => {
                    let actual = schema::scalar_value(doc, field, now)?;
                    if std::mem::discriminant(&actual) != std::mem::discriminant(value) {
                        return Err(AppError::InvalidQuery(format!(
                            "type mismatch on field '{}' for collection '{}'",
                            field,
                            doc.collection()
                        )));
                    }
                    actual == *value
                }
                Condition::Contains { field, id } => {
                    schema::reference_ids(doc, field)?.contains(id)
                }
            };
            if !hit {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn sort_documents(docs: &mut [Document], sort: &str) -> AppResult<()> {
        let (key, descending) = match sort.strip_prefix('-') {
            Some(key) => (key, true),
            None => (sort, false),
        };

        // Extract keys once, then stable-sort so ties keep insertion order.
        let mut keyed: Vec<(SortValue, Document)> = Vec::with_capacity(docs.len());
        for doc in docs.iter() {
            keyed.push((schema::sort_value(doc, key)?, doc.clone()));
        }
        keyed.sort_by(|a, b| {
            let ordering = a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });

        for (slot, (_, doc)) in docs.iter_mut().zip(keyed) {
            *slot = doc;
        }
        Ok(())
    }
}
