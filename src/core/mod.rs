pub mod arena;
pub mod config;
pub mod engine;
pub mod error;
pub mod types;

/// Top-K cutoff for `find_top`.
pub const MAX_RESULTS: usize = 5;
/// Relevance scores closer than this are considered tied; the rating
/// tiebreak applies instead.
pub const FLOAT_EPSILON: f64 = 1e-6;
/// Default bucket count for the sharded concurrent accumulator.
pub const SHARD_COUNT: usize = 500;
