//! Iterative deepening search.

use crate::search::{
    search_engines::{SearchEngine, SearchError, SearchOutcome, SearchStatistics, DLS},
    Heuristic, Problem,
};
use tracing::info;

/// Runs [`DLS`] with depth limits `0, 1, ..., size * size` until one pass
/// reaches the goal. The explored states of every pass are concatenated, so a
/// state shows up once for each pass that expanded it.
#[derive(Debug, Default)]
pub struct IDS {}

impl IDS {
    pub fn new() -> Self {
        Self {}
    }

    /// The deepest limit tried on `problem`.
    pub fn max_depth_limit(problem: &Problem) -> usize {
        problem.size().saturating_mul(problem.size())
    }
}

impl SearchEngine for IDS {
    fn search(
        &mut self,
        problem: &Problem,
        _heuristic: &dyn Heuristic,
    ) -> Result<(SearchOutcome, SearchStatistics), SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut total_explored = vec![];

        for depth_limit in 0..=Self::max_depth_limit(problem) {
            statistics.increment_depth_limits(depth_limit);
            let outcome = DLS::new(depth_limit).run(problem, &mut statistics);
            total_explored.extend_from_slice(outcome.explored());

            if let SearchOutcome::Success { path, .. } = outcome {
                info!(depth_limit, "goal reached");
                statistics.finalise_search();
                let outcome = SearchOutcome::Success {
                    explored: total_explored,
                    path,
                };
                return Ok((outcome, statistics));
            }
        }

        info!("depth limits exhausted");
        statistics.finalise_search();
        Ok((
            SearchOutcome::Failed {
                explored: total_explored,
            },
            statistics,
        ))
    }
}
