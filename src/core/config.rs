use crate::core::SHARD_COUNT;

/// Tunables for the concurrent query/match/remove paths. Construction of
/// the engine itself (stop words) is a separate concern from these runtime
/// knobs, so `EngineConfig` is passed to `Engine::with_config` rather than
/// folded into `Engine::new`.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Bucket count for the sharded concurrent accumulator used by the
    /// parallel query, match, and remove paths.
    pub shard_count: usize,
    /// Worker count for the scoped rayon pool backing parallel operations.
    /// `None` defaults to `num_cpus::get()` (see `Engine::with_config`).
    pub worker_threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            shard_count: SHARD_COUNT,
            worker_threads: None,
        }
    }
}
