use std::collections::HashMap;

use crate::core::arena::ArenaTerm;
use crate::core::types::DocId;

/// `document_id → (term → term_frequency)`, the redundant mirror of
/// [`InvertedIndex`](crate::index::inverted::InvertedIndex): a deliberate
/// dual-index tradeoff that turns `match`, `remove`, and duplicate
/// detection into O(document degree) operations instead of O(all postings
/// of all its terms).
#[derive(Debug, Default)]
pub struct PerDocTermMap {
    docs: HashMap<DocId, HashMap<ArenaTerm, f64>>,
}

impl PerDocTermMap {
    pub fn new() -> Self {
        PerDocTermMap::default()
    }

    pub fn accumulate(&mut self, doc: DocId, term: ArenaTerm, tf: f64) {
        *self.docs.entry(doc).or_default().entry(term).or_insert(0.0) += tf;
    }

    /// Registers `doc` with no terms (the zero-non-stop-tokens case), so it
    /// still counts as present.
    pub fn register_empty(&mut self, doc: DocId) {
        self.docs.entry(doc).or_default();
    }

    pub fn terms(&self, doc: DocId) -> Option<&HashMap<ArenaTerm, f64>> {
        self.docs.get(&doc)
    }

    pub fn contains(&self, doc: DocId) -> bool {
        self.docs.contains_key(&doc)
    }

    pub fn remove(&mut self, doc: DocId) -> Option<HashMap<ArenaTerm, f64>> {
        self.docs.remove(&doc)
    }
}
