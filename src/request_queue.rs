use std::collections::VecDeque;

use crate::core::engine::Engine;
use crate::core::error::Result;
use crate::core::types::{ScoredDocument, Status};

/// Length, in calls, of the sliding window `RequestQueue` tracks.
const WINDOW: usize = 1440;

/// Wraps an [`Engine`] to count empty-result queries over a trailing
/// window of calls. It only ever calls `find_top` and inspects the result
/// length, so it lives outside `Engine` rather than folded into it.
pub struct RequestQueue<'a> {
    engine: &'a Engine,
    requests: VecDeque<usize>,
    empty_count: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(engine: &'a Engine) -> Self {
        RequestQueue {
            engine,
            requests: VecDeque::new(),
            empty_count: 0,
        }
    }

    /// Runs `find_top(raw_query, status)`, records whether it came back
    /// empty, and evicts any call that has aged out of the window.
    pub fn add_find_request(&mut self, raw_query: &str, status: Status) -> Result<Vec<ScoredDocument>> {
        let results = self.engine.find_top(raw_query, status)?;
        self.record(results.len());
        Ok(results)
    }

    fn record(&mut self, result_count: usize) {
        if self.requests.len() >= WINDOW {
            if self.requests.pop_front() == Some(0) {
                self.empty_count -= 1;
            }
        }
        if result_count == 0 {
            self.empty_count += 1;
        }
        self.requests.push_back(result_count);
    }

    /// Number of empty-result queries currently inside the window.
    pub fn no_result_requests(&self) -> usize {
        self.empty_count
    }
}
