/// Pagination support for queries
///
/// Offset/count pagination; data volumes are small (tens to low hundreds of
/// entities), so cursors are deliberately not modelled.
use serde::{Deserialize, Serialize};

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationParams {
    pub offset: usize,
    pub limit: Option<usize>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: None,
        }
    }
}

impl PaginationParams {
    pub fn new(offset: usize, limit: Option<usize>) -> Self {
        Self { offset, limit }
    }

    /// Slice a fully filtered result set down to the requested window.
    /// Truncation is deterministic: same input order, same window.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let iter = items.into_iter().skip(self.offset);
        match self.limit {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        }
    }
}

/// Paginated result wrapper
///
/// `total_docs` counts every match before the window is applied, mirroring
/// the `{docs, totalDocs}` shape the presentation layer consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindResult<T> {
    pub docs: Vec<T>,
    pub total_docs: u64,
}

impl<T> FindResult<T> {
    pub fn new(docs: Vec<T>, total_docs: u64) -> Self {
        Self { docs, total_docs }
    }

    pub fn empty() -> Self {
        Self {
            docs: Vec::new(),
            total_docs: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_docs == 0
    }
}
