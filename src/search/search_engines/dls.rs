//! Depth-limited depth-first search, the building block of [`IDS`].
//!
//! [`IDS`]: crate::search::search_engines::IDS

use crate::search::{
    search_engines::{SearchEngine, SearchError, SearchOutcome, SearchStatistics},
    ExploredStates, Heuristic, Problem, SearchSpace, UNIT_COST,
};
use tracing::trace;

/// Depth-first search that never expands a node whose cost has reached the
/// depth limit.
///
/// Successors are pushed in reverse so that they are popped in their original
/// order. Children are goal-tested as soon as they are generated. Cycles are
/// avoided by refusing children whose state already lies on the path back to
/// the root; there is no global closed list, so a state may be expanded many
/// times in one pass.
#[derive(Debug)]
pub struct DLS {
    depth_limit: usize,
}

impl DLS {
    pub fn new(depth_limit: usize) -> Self {
        Self { depth_limit }
    }

    /// Run one depth-limited pass, recording into `statistics`.
    pub fn run(&self, problem: &Problem, statistics: &mut SearchStatistics) -> SearchOutcome {
        let mut search_space = SearchSpace::new(problem.initial_state());
        let root_node_id = search_space.get_root_node_id();

        if problem.is_goal(problem.initial_state()) {
            return SearchOutcome::Success {
                explored: vec![],
                path: search_space.extract_path(root_node_id),
            };
        }

        let mut stack = vec![root_node_id];
        let mut explored = ExploredStates::new();

        while let Some(node_id) = stack.pop() {
            let node = search_space.get_node(node_id);
            let (state, cost) = (node.get_state(), node.get_cost());
            if cost >= self.depth_limit {
                statistics.increment_pruned_nodes();
                continue;
            }

            trace!(state, cost, "expanding");
            explored.record(state);
            statistics.increment_expanded_nodes();

            let successors = problem.successors(state);
            statistics.increment_generated_nodes(successors.len());
            for &successor in successors.iter().rev() {
                if problem.is_goal(successor) {
                    let goal_node_id = search_space.insert_child(node_id, successor, UNIT_COST);
                    return SearchOutcome::Success {
                        path: search_space.extract_path(goal_node_id),
                        explored: explored.into_vec(),
                    };
                }
                if !search_space.is_on_path(node_id, successor) {
                    stack.push(search_space.insert_child(node_id, successor, UNIT_COST));
                }
            }
        }

        SearchOutcome::Failed {
            explored: explored.into_vec(),
        }
    }
}

impl SearchEngine for DLS {
    fn search(
        &mut self,
        problem: &Problem,
        _heuristic: &dyn Heuristic,
    ) -> Result<(SearchOutcome, SearchStatistics), SearchError> {
        let mut statistics = SearchStatistics::new();
        statistics.increment_depth_limits(self.depth_limit);
        let outcome = self.run(problem, &mut statistics);
        statistics.finalise_search();
        Ok((outcome, statistics))
    }
}
