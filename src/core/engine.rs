use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use rayon::prelude::*;

use crate::analysis::stopwords::StopWords;
use crate::analysis::tokenizer;
use crate::core::arena::{ArenaTerm, TermArena};
use crate::core::config::EngineConfig;
use crate::core::error::{Error, Result};
use crate::core::types::{DocId, DocumentRecord, ScoredDocument, Status};
use crate::core::{FLOAT_EPSILON, MAX_RESULTS};
use crate::index::inverted::InvertedIndex;
use crate::index::per_doc::PerDocTermMap;
use crate::query::concurrent_map::ConcurrentAccumulator;
use crate::query::parser::{ParsedQuery, QueryParser};
use crate::scoring;

/// The in-memory full-text search engine: owns the term arena, the
/// inverted index, the per-document term map, and the document store, and
/// answers `add`/`find_top`/`match_document`/`remove`/`remove_duplicates`.
///
/// Reads are safe concurrently with other reads; a write (`add`, `remove`,
/// `remove_duplicates`) must be externally serialized against every other
/// call. The engine enforces none of this itself — there is no internal
/// lock around the tables, only the accumulator the parallel read paths
/// share.
pub struct Engine {
    config: EngineConfig,
    stop_words: StopWords,
    arena: TermArena,
    inverted: InvertedIndex,
    per_doc: PerDocTermMap,
    docs: HashMap<DocId, DocumentRecord>,
    /// Ingestion order, not id order; `remove` does an O(n) scan to evict
    /// an entry, acceptable for the small in-memory corpora this engine
    /// targets.
    order: Vec<DocId>,
    /// Scoped rayon pool every parallel entry point runs inside, sized from
    /// `config.worker_threads` (defaulting to `num_cpus::get()`) rather than
    /// rayon's process-global pool, so `EngineConfig` actually governs
    /// parallel fan-out width.
    pool: rayon::ThreadPool,
}

fn build_pool(config: &EngineConfig) -> rayon::ThreadPool {
    let worker_threads = config.worker_threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(worker_threads)
        .build()
        .expect("failed to build the engine's rayon thread pool")
}

impl Engine {
    /// Builds an engine with default `EngineConfig`, parsing `stop_words_text`
    /// as whitespace-separated terms.
    pub fn new(stop_words_text: &str) -> Result<Self> {
        Self::with_config(stop_words_text, EngineConfig::default())
    }

    pub fn with_config(stop_words_text: &str, config: EngineConfig) -> Result<Self> {
        let stop_words = StopWords::from_text(stop_words_text)?;
        let pool = build_pool(&config);
        Ok(Engine {
            config,
            stop_words,
            arena: TermArena::new(),
            inverted: InvertedIndex::new(),
            per_doc: PerDocTermMap::new(),
            docs: HashMap::new(),
            order: Vec::new(),
            pool,
        })
    }

    /// Builds an engine from an explicit sequence of stop-word terms rather
    /// than whitespace-separated text.
    pub fn from_stop_word_terms<'a, I>(terms: I, config: EngineConfig) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let pool = build_pool(&config);
        Ok(Engine {
            config,
            stop_words: StopWords::from_terms(terms)?,
            arena: TermArena::new(),
            inverted: InvertedIndex::new(),
            per_doc: PerDocTermMap::new(),
            docs: HashMap::new(),
            order: Vec::new(),
            pool,
        })
    }

    pub fn document_count(&self) -> usize {
        self.docs.len()
    }

    /// Document ids in ingestion order (the supported access path; the
    /// source's positional accessor with its off-by-one bound check is not
    /// carried forward — see `DESIGN.md`).
    pub fn document_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.order.iter().map(DocId::as_i64)
    }

    /// `term -> frequency` for `id`; empty if `id` is unknown or negative.
    pub fn word_frequencies(&self, id: i64) -> HashMap<String, f64> {
        let Ok(doc_id) = DocId::from_raw(id) else {
            return HashMap::new();
        };
        match self.per_doc.terms(doc_id) {
            Some(terms) => terms
                .iter()
                .map(|(&term, &tf)| (self.arena.resolve(term).to_string(), tf))
                .collect(),
            None => HashMap::new(),
        }
    }

    /// Ingests one document. Rejects duplicate ids and control-character
    /// text before mutating any table (partial application never occurs).
    pub fn add(&mut self, id: i64, text: &str, status: Status, ratings: &[i64]) -> Result<()> {
        let doc_id = DocId::from_raw(id)?;
        if self.docs.contains_key(&doc_id) {
            return Err(Error::duplicate_id(format!("document {id} already exists")));
        }
        if crate::analysis::stopwords::has_control_char(text) {
            return Err(Error::invalid_text(format!(
                "document {id} text contains a control character"
            )));
        }

        let tokens = tokenizer::split(text);
        let non_stop = self.stop_words.filter(tokens);
        let n = non_stop.len();

        if n == 0 {
            self.per_doc.register_empty(doc_id);
        } else {
            let tf = 1.0 / n as f64;
            for token in non_stop {
                let term = self.arena.intern(token);
                self.inverted.accumulate(term, doc_id, tf);
                self.per_doc.accumulate(doc_id, term, tf);
            }
        }

        self.docs.insert(doc_id, DocumentRecord::new(status, ratings));
        self.order.push(doc_id);
        tracing::debug!(document_id = id, term_count = n, "document indexed");
        Ok(())
    }

    fn parse(&self, raw_query: &str) -> Result<ParsedQuery> {
        QueryParser::new(&self.stop_words).parse(raw_query)
    }

    /// Convenience overload of `find_top` filtering on `status == ACTUAL`
    /// (or the given status).
    pub fn find_top(&self, raw_query: &str, status: Status) -> Result<Vec<ScoredDocument>> {
        self.find_top_where(raw_query, |_, doc_status, _| doc_status == status)
    }

    /// Sequential ranked query under an arbitrary predicate
    /// `(id, status, rating) -> bool`.
    pub fn find_top_where<F>(&self, raw_query: &str, predicate: F) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(i64, Status, i64) -> bool,
    {
        let query = self.parse(raw_query)?;
        let total_docs = self.docs.len();
        let mut scores: HashMap<DocId, f64> = HashMap::new();

        for term in &query.plus {
            let Some(handle) = self.arena.lookup(term) else {
                continue;
            };
            let Some(posting) = self.inverted.posting(handle) else {
                continue;
            };
            let idf = scoring::idf(total_docs, posting.len());
            for (&doc_id, &tf) in posting {
                let record = &self.docs[&doc_id];
                if predicate(doc_id.as_i64(), record.status, record.average_rating) {
                    *scores.entry(doc_id).or_insert(0.0) += tf * idf;
                }
            }
        }

        for term in &query.minus {
            if let Some(handle) = self.arena.lookup(term) {
                if let Some(posting) = self.inverted.posting(handle) {
                    for &doc_id in posting.keys() {
                        scores.remove(&doc_id);
                    }
                }
            }
        }

        let mut results: Vec<ScoredDocument> = scores
            .into_iter()
            .map(|(id, relevance)| ScoredDocument {
                id,
                relevance,
                rating: self.docs[&id].average_rating,
            })
            .collect();
        results.sort_by(|a, b| rank_cmp(a, b));
        results.truncate(MAX_RESULTS);
        Ok(results)
    }

    /// Parallel counterpart of `find_top`, same contract.
    pub fn find_top_par(&self, raw_query: &str, status: Status) -> Result<Vec<ScoredDocument>> {
        self.find_top_par_where(raw_query, |_, doc_status, _| doc_status == status)
    }

    /// Parallel counterpart of `find_top_where`. Numerically equivalent to
    /// the sequential path within `FLOAT_EPSILON` for pure, deterministic
    /// predicates; summation order across shards can differ in its last few
    /// ULPs from the sequential accumulation order.
    pub fn find_top_par_where<F>(&self, raw_query: &str, predicate: F) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(i64, Status, i64) -> bool + Sync,
    {
        let query = self.parse(raw_query)?;
        let total_docs = self.docs.len();
        let accumulator = ConcurrentAccumulator::new(self.config.shard_count);

        let mut results = self.pool.install(|| {
            let plus: Vec<&String> = query.plus.iter().collect();
            plus.par_iter().for_each(|term| {
                let Some(handle) = self.arena.lookup(term) else {
                    return;
                };
                let Some(posting) = self.inverted.posting(handle) else {
                    return;
                };
                let idf = scoring::idf(total_docs, posting.len());
                posting.par_iter().for_each(|(&doc_id, &tf)| {
                    let record = &self.docs[&doc_id];
                    if predicate(doc_id.as_i64(), record.status, record.average_rating) {
                        accumulator.add(doc_id, tf * idf);
                    }
                });
            });

            // Second pass, strictly after the accumulation pass has joined.
            let minus: Vec<&String> = query.minus.iter().collect();
            minus.par_iter().for_each(|term| {
                if let Some(handle) = self.arena.lookup(term) {
                    if let Some(posting) = self.inverted.posting(handle) {
                        posting.par_iter().for_each(|(&doc_id, _)| {
                            accumulator.erase(doc_id);
                        });
                    }
                }
            });

            let merged = accumulator.drain();
            let mut results: Vec<ScoredDocument> = merged
                .into_par_iter()
                .map(|(id, relevance)| ScoredDocument {
                    id,
                    relevance,
                    rating: self.docs[&id].average_rating,
                })
                .collect();
            results.par_sort_by(|a, b| rank_cmp(a, b));
            results
        });
        results.truncate(MAX_RESULTS);
        Ok(results)
    }

    /// Sequential `match`: the intersection of `id`'s terms with the
    /// query's plus-terms, or `([], status)` if any of the document's terms
    /// is a minus-term.
    pub fn match_document(&self, raw_query: &str, id: i64) -> Result<(Vec<String>, Status)> {
        let doc_id = DocId::from_raw(id)?;
        let query = self.parse(raw_query)?;
        let record = self
            .docs
            .get(&doc_id)
            .ok_or_else(|| Error::not_found(format!("document {id} not found")))?;
        let terms = self.per_doc.terms(doc_id).expect("doc/per_doc invariant");

        for &term_handle in terms.keys() {
            if query.minus.contains(self.arena.resolve(term_handle)) {
                return Ok((Vec::new(), record.status));
            }
        }

        let mut matched: Vec<String> = terms
            .keys()
            .map(|&t| self.arena.resolve(t))
            .filter(|t| query.plus.contains(*t))
            .map(str::to_string)
            .collect();
        matched.sort_unstable();
        Ok((matched, record.status))
    }

    /// Parallel `match`: same semantics, sorts and dedups the intersection
    /// at the end instead of relying on set ordering throughout.
    pub fn match_document_par(&self, raw_query: &str, id: i64) -> Result<(Vec<String>, Status)> {
        let doc_id = DocId::from_raw(id)?;
        let query = self.parse(raw_query)?;
        let record = self
            .docs
            .get(&doc_id)
            .ok_or_else(|| Error::not_found(format!("document {id} not found")))?;
        let terms = self.per_doc.terms(doc_id).expect("doc/per_doc invariant");
        let handles: Vec<ArenaTerm> = terms.keys().copied().collect();

        let is_excluded = self
            .pool
            .install(|| handles.par_iter().any(|&h| query.minus.contains(self.arena.resolve(h))));
        if is_excluded {
            return Ok((Vec::new(), record.status));
        }

        let mut matched: Vec<String> = self.pool.install(|| {
            handles
                .par_iter()
                .map(|&h| self.arena.resolve(h))
                .filter(|t| query.plus.contains(*t))
                .map(str::to_string)
                .collect()
        });
        self.pool.install(|| matched.par_sort_unstable());
        matched.dedup();
        Ok((matched, record.status))
    }

    fn evict(&mut self, doc_id: DocId) -> HashMap<ArenaTerm, f64> {
        let terms = self.per_doc.remove(doc_id).unwrap_or_default();
        self.docs.remove(&doc_id);
        self.order.retain(|&id| id != doc_id);
        terms
    }

    /// Sequential `remove`: unknown ids are a successful no-op.
    pub fn remove(&mut self, id: i64) {
        let Ok(doc_id) = DocId::from_raw(id) else {
            tracing::warn!(document_id = id, "remove called with a negative id, ignoring");
            return;
        };
        if !self.docs.contains_key(&doc_id) {
            tracing::warn!(document_id = id, "remove called on an unknown document id");
            return;
        }
        let terms = self.evict(doc_id);
        for term in terms.keys() {
            self.inverted.remove_doc(*term, doc_id);
        }
        tracing::debug!(document_id = id, "document removed");
    }

    /// Parallel `remove`: snapshots the term list, detaches the document
    /// from doc-level bookkeeping, then erases the postings in parallel.
    /// The postings table is shared across the fan-out behind a single
    /// lock for the duration of the call — cheaper than the 500-way
    /// sharded accumulator for what is typically a handful of terms per
    /// document (see `DESIGN.md`).
    pub fn remove_par(&mut self, id: i64) {
        let Ok(doc_id) = DocId::from_raw(id) else {
            tracing::warn!(document_id = id, "remove called with a negative id, ignoring");
            return;
        };
        if !self.docs.contains_key(&doc_id) {
            tracing::warn!(document_id = id, "remove called on an unknown document id");
            return;
        }
        let terms: Vec<ArenaTerm> = self.evict(doc_id).into_keys().collect();
        let inverted = Mutex::new(&mut self.inverted);
        self.pool.install(|| {
            terms.par_iter().for_each(|&term| {
                inverted.lock().unwrap().remove_doc(term, doc_id);
            });
        });
        tracing::debug!(document_id = id, "document removed");
    }

    /// Evicts every document whose non-stop term set duplicates an
    /// earlier-ingested document's, keeping the earliest id. Reports each
    /// removed id to `sink`.
    pub fn remove_duplicates(&mut self, mut sink: impl FnMut(i64)) {
        let mut seen: HashSet<Vec<ArenaTerm>> = HashSet::new();
        let mut duplicates = Vec::new();

        for &doc_id in &self.order {
            let mut term_set: Vec<ArenaTerm> = self
                .per_doc
                .terms(doc_id)
                .map(|m| m.keys().copied().collect())
                .unwrap_or_default();
            term_set.sort_unstable();
            if !seen.insert(term_set) {
                duplicates.push(doc_id);
            }
        }

        let removed_count = duplicates.len();
        for doc_id in duplicates {
            self.remove(doc_id.as_i64());
            sink(doc_id.as_i64());
        }
        tracing::info!(removed = removed_count, "duplicate removal complete");
    }
}

/// Total order over `(relevance, rating, id)`: descending relevance (within
/// `FLOAT_EPSILON`), descending rating on a relevance tie, descending id as
/// the final tiebreak so the order is total even if both prior keys tie
/// (ids are always distinct).
fn rank_cmp(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    if (a.relevance - b.relevance).abs() < FLOAT_EPSILON {
        b.rating.cmp(&a.rating).then_with(|| b.id.cmp(&a.id))
    } else {
        b.relevance.partial_cmp(&a.relevance).unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(stop_words: &str) -> Engine {
        Engine::new(stop_words).unwrap()
    }

    #[test]
    fn document_count_increases_by_one_per_add() {
        let mut e = engine("");
        assert_eq!(e.document_count(), 0);
        e.add(1, "cat dog", Status::Actual, &[]).unwrap();
        assert_eq!(e.document_count(), 1);
    }

    #[test]
    fn word_frequencies_sum_to_one_for_distinct_terms() {
        let mut e = engine("");
        e.add(1, "cat dog bird", Status::Actual, &[]).unwrap();
        let freqs = e.word_frequencies(1);
        let sum: f64 = freqs.values().sum();
        assert!((sum - 1.0).abs() < FLOAT_EPSILON);
        assert_eq!(freqs.len(), 3);
    }

    #[test]
    fn rejects_duplicate_and_negative_ids() {
        let mut e = engine("");
        e.add(1, "cat", Status::Actual, &[]).unwrap();
        assert!(e.add(1, "dog", Status::Actual, &[]).is_err());
        assert!(e.add(-1, "dog", Status::Actual, &[]).is_err());
    }

    #[test]
    fn rejects_control_characters_in_document_text() {
        let mut e = engine("");
        assert!(e.add(1, "ca\u{0007}t", Status::Actual, &[]).is_err());
        assert_eq!(e.document_count(), 0);
    }

    #[test]
    fn scenario_stop_word_exclusion() {
        let mut e = engine("in the");
        e.add(42, "cat in the city", Status::Actual, &[]).unwrap();
        assert!(e.find_top("in", Status::Actual).unwrap().is_empty());
        let hits = e.find_top("cat", Status::Actual).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_i64(), 42);
    }

    #[test]
    fn scenario_minus_word_exclusion() {
        let mut e = engine("");
        e.add(35, "dog dancing on the table", Status::Actual, &[]).unwrap();
        assert_eq!(e.find_top("dancing", Status::Actual).unwrap().len(), 1);
        assert!(e.find_top("dancing -table", Status::Actual).unwrap().is_empty());
    }

    #[test]
    fn scenario_rating_averaging() {
        let mut e = engine("");
        e.add(43, "whatever", Status::Actual, &[4, 5, 10, 1]).unwrap();
        assert_eq!(e.word_frequencies(43).len(), 1);
        let hits = e.find_top("whatever", Status::Actual).unwrap();
        assert_eq!(hits[0].rating, 5);
    }

    #[test]
    fn scenario_relevance_scoring_matches_six_decimal_digits() {
        let mut e = engine("и в на");
        e.add(0, "белый кот и модный ошейник", Status::Actual, &[]).unwrap();
        e.add(1, "пушистый кот пушистый хвост", Status::Actual, &[]).unwrap();
        e.add(2, "ухоженный пёс выразительные глаза", Status::Actual, &[]).unwrap();
        e.add(3, "ухоженный скворец евгений", Status::Actual, &[]).unwrap();

        let hits = e.find_top("пушистый ухоженный кот", Status::Actual).unwrap();
        let relevances: Vec<f64> = hits.iter().map(|h| (h.relevance * 1e6).round() / 1e6).collect();
        assert_eq!(relevances, vec![0.866434, 0.231049, 0.173287, 0.173287]);
        // Ratings are all 0 (no ratings supplied), so the last two ties
        // break on descending id.
        assert_eq!(hits.iter().map(|h| h.id.as_i64()).collect::<Vec<_>>(), vec![1, 3, 2, 0]);
    }

    #[test]
    fn scenario_predicate_filter() {
        let mut e = engine("");
        e.add(3, "white big water", Status::Removed, &[4, 2, 1, 5]).unwrap();
        e.add(5, "white big water", Status::Actual, &[5, 5, 5]).unwrap();
        e.add(7, "white big water", Status::Removed, &[2, 2]).unwrap();

        let hits = e
            .find_top_where("white big water", |id, status, rating| {
                status == Status::Removed && rating == id
            })
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_i64(), 3);
    }

    #[test]
    fn scenario_duplicate_removal_keeps_the_earliest_id() {
        let mut e = engine("");
        e.add(1, "cat dog", Status::Actual, &[]).unwrap();
        e.add(2, "dog cat dog", Status::Actual, &[]).unwrap();
        let mut removed = Vec::new();
        e.remove_duplicates(|id| removed.push(id));
        assert_eq!(removed, vec![2]);
        assert_eq!(e.document_count(), 1);
        assert!(e.word_frequencies(1).len() == 2);
    }

    #[test]
    fn duplicate_removal_is_idempotent() {
        let mut e = engine("");
        e.add(1, "cat dog", Status::Actual, &[]).unwrap();
        e.add(2, "dog cat", Status::Actual, &[]).unwrap();
        let mut first = Vec::new();
        e.remove_duplicates(|id| first.push(id));
        let mut second = Vec::new();
        e.remove_duplicates(|id| second.push(id));
        assert_eq!(first, vec![2]);
        assert!(second.is_empty());
    }

    #[test]
    fn remove_drops_the_document_from_every_table() {
        let mut e = engine("");
        e.add(1, "cat dog", Status::Actual, &[]).unwrap();
        e.remove(1);
        assert_eq!(e.document_count(), 0);
        assert!(e.word_frequencies(1).is_empty());
        assert!(e.find_top("cat", Status::Actual).unwrap().is_empty());
    }

    #[test]
    fn remove_on_unknown_id_is_a_no_op() {
        let mut e = engine("");
        e.add(1, "cat", Status::Actual, &[]).unwrap();
        e.remove(999);
        assert_eq!(e.document_count(), 1);
    }

    #[test]
    fn match_returns_the_full_non_stop_term_set_round_trip() {
        let mut e = engine("in the");
        e.add(42, "cat in the city", Status::Actual, &[]).unwrap();
        let (mut terms, status) = e.match_document("cat in the city", 42).unwrap();
        terms.sort();
        assert_eq!(terms, vec!["cat".to_string(), "city".to_string()]);
        assert_eq!(status, Status::Actual);
    }

    #[test]
    fn match_excludes_on_any_minus_term_present_in_the_document() {
        let mut e = engine("");
        e.add(35, "dog dancing on the table", Status::Actual, &[]).unwrap();
        let (terms, status) = e.match_document("dancing -table", 35).unwrap();
        assert!(terms.is_empty());
        assert_eq!(status, Status::Actual);
    }

    #[test]
    fn match_unknown_id_is_not_found() {
        let e = engine("");
        assert!(e.match_document("cat", 99).is_err());
    }

    #[test]
    fn match_negative_id_is_invalid() {
        let e = engine("");
        assert!(e.match_document("cat", -1).is_err());
    }

    #[test]
    fn empty_document_text_is_accepted_with_no_terms() {
        let mut e = engine("");
        e.add(1, "", Status::Actual, &[]).unwrap();
        assert!(e.word_frequencies(1).is_empty());
        let (terms, _) = e.match_document("", 1).unwrap();
        assert!(terms.is_empty());
    }

    #[test]
    fn query_with_only_stop_words_returns_empty_results() {
        let mut e = engine("in the");
        e.add(1, "cat in the city", Status::Actual, &[]).unwrap();
        assert!(e.find_top("in the", Status::Actual).unwrap().is_empty());
    }

    #[test]
    fn minus_only_query_returns_empty_results() {
        let mut e = engine("");
        e.add(1, "cat dog", Status::Actual, &[]).unwrap();
        assert!(e.find_top("-cat", Status::Actual).unwrap().is_empty());
    }

    #[test]
    fn sequential_and_parallel_find_top_agree() {
        let mut e = engine("и в на");
        e.add(0, "белый кот и модный ошейник", Status::Actual, &[5]).unwrap();
        e.add(1, "пушистый кот пушистый хвост", Status::Actual, &[4]).unwrap();
        e.add(2, "ухоженный пёс выразительные глаза", Status::Actual, &[3]).unwrap();
        e.add(3, "ухоженный скворец евгений", Status::Actual, &[2]).unwrap();

        let seq = e.find_top("пушистый ухоженный кот", Status::Actual).unwrap();
        let par = e.find_top_par("пушистый ухоженный кот", Status::Actual).unwrap();
        assert_eq!(seq.len(), par.len());
        for (s, p) in seq.iter().zip(par.iter()) {
            assert_eq!(s.id.as_i64(), p.id.as_i64());
            assert!((s.relevance - p.relevance).abs() < FLOAT_EPSILON);
        }
    }

    #[test]
    fn sequential_and_parallel_match_agree() {
        let mut e = engine("");
        e.add(1, "cat dog bird cat", Status::Actual, &[]).unwrap();
        let (mut seq, _) = e.match_document("cat dog -bird", 1).unwrap();
        let (mut par, _) = e.match_document_par("cat dog -bird", 1).unwrap();
        seq.sort();
        par.sort();
        assert_eq!(seq, par);
    }

    #[test]
    fn a_single_worker_thread_pool_still_produces_correct_parallel_results() {
        let config = EngineConfig {
            shard_count: crate::core::SHARD_COUNT,
            worker_threads: Some(1),
        };
        let mut e = Engine::with_config("", config).unwrap();
        e.add(1, "cat dog", Status::Actual, &[]).unwrap();
        e.add(2, "cat bird", Status::Actual, &[]).unwrap();

        let par = e.find_top_par("cat -bird", Status::Actual).unwrap();
        assert_eq!(par.len(), 1);
        assert_eq!(par[0].id.as_i64(), 1);
    }

    #[test]
    fn sequential_and_parallel_remove_leave_identical_state() {
        let mut seq = engine("");
        seq.add(1, "cat dog", Status::Actual, &[]).unwrap();
        seq.add(2, "cat bird", Status::Actual, &[]).unwrap();
        seq.remove(1);

        let mut par = engine("");
        par.add(1, "cat dog", Status::Actual, &[]).unwrap();
        par.add(2, "cat bird", Status::Actual, &[]).unwrap();
        par.remove_par(1);

        assert_eq!(seq.document_count(), par.document_count());
        assert_eq!(
            seq.find_top("cat", Status::Actual).unwrap().len(),
            par.find_top("cat", Status::Actual).unwrap().len()
        );
    }
}
