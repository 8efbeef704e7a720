use std::collections::HashMap;

use crate::core::arena::ArenaTerm;
use crate::core::types::DocId;

/// `term → (document_id → term_frequency)`. The engine is the sole owning
/// authority for term storage (via `TermArena`); this index only ever holds
/// `ArenaTerm` handles, never owned strings, so interning a term costs
/// nothing beyond the handful of bytes for the handle itself regardless of
/// how many documents reference it.
///
/// Plain `HashMap<Term, HashMap<DocId, f64>>` postings, uncompressed —
/// there is nothing to page in or compress for an engine that never leaves
/// memory.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<ArenaTerm, HashMap<DocId, f64>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Accumulates `tf` into the posting for `(term, doc)`. Repeated calls
    /// for the same pair add rather than overwrite.
    pub fn accumulate(&mut self, term: ArenaTerm, doc: DocId, tf: f64) {
        *self.postings.entry(term).or_default().entry(doc).or_insert(0.0) += tf;
    }

    pub fn posting(&self, term: ArenaTerm) -> Option<&HashMap<DocId, f64>> {
        self.postings.get(&term)
    }

    pub fn doc_frequency(&self, term: ArenaTerm) -> usize {
        self.postings.get(&term).map_or(0, |p| p.len())
    }

    /// Removes `doc` from `term`'s posting. The term itself stays in the
    /// index even if its posting becomes empty — re-creating an empty
    /// `HashMap` entry later is cheaper than special-casing its absence
    /// everywhere else.
    pub fn remove_doc(&mut self, term: ArenaTerm, doc: DocId) {
        if let Some(posting) = self.postings.get_mut(&term) {
            posting.remove(&doc);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
