use crate::core::error::{Error, Result};

/// A document id, validated non-negative at the boundary and stored
/// internally as `u64` so it can key hash maps directly. Callers pass raw
/// `i64` ids to the public API; `DocId::from_raw` performs the `InvalidId`
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(pub u64);

impl DocId {
    /// Validates `id >= 0` and wraps it, failing with `InvalidId` otherwise.
    pub fn from_raw(id: i64) -> Result<Self> {
        if id < 0 {
            return Err(Error::invalid_id(format!("document id {id} is negative")));
        }
        Ok(DocId(id as u64))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

/// Lifecycle status of a document, assigned at ingest and immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl Default for Status {
    fn default() -> Self {
        Status::Actual
    }
}

/// Everything the engine keeps about a document outside of its term
/// postings: the caller-visible status and the truncated integer mean of
/// its ratings.
#[derive(Debug, Clone, Copy)]
pub struct DocumentRecord {
    pub status: Status,
    pub average_rating: i64,
}

impl DocumentRecord {
    pub fn new(status: Status, ratings: &[i64]) -> Self {
        DocumentRecord {
            status,
            average_rating: average_rating(ratings),
        }
    }
}

/// Arithmetic integer mean, truncated toward zero; 0 for an empty vector.
pub fn average_rating(ratings: &[i64]) -> i64 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().sum();
    sum / ratings.len() as i64
}

/// One ranked hit returned by `find_top`.
#[derive(Debug, Clone, Copy)]
pub struct ScoredDocument {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i64,
}
