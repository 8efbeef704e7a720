//! An in-memory full-text search engine: tokenize, index, and rank small
//! text documents by TF-IDF with boolean plus/minus query terms.
//!
//! [`core::engine::Engine`] is the entry point. It owns the term arena, the
//! inverted index (`term -> doc -> tf`), and its redundant per-document
//! mirror (`doc -> term -> tf`), and exposes both sequential and
//! data-parallel entry points for the query, match, and remove hot paths —
//! see `find_top`/`find_top_par`, `match_document`/`match_document_par`,
//! `remove`/`remove_par`.
//!
//! Persistence, network serving, and incremental concurrent writes are out
//! of scope: callers externally serialize writes (`add`, `remove`,
//! `remove_duplicates`) against every other call, and the engine keeps
//! everything in memory for its lifetime.

pub mod analysis;
pub mod core;
pub mod index;
pub mod pagination;
pub mod query;
pub mod request_queue;
pub mod scoring;
