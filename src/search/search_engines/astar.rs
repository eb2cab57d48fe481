//! A* search.

use crate::search::{
    search_engines::{SearchEngine, SearchError, SearchOutcome, SearchStatistics},
    BestFirstEntry, BestFirstFrontier, ExploredStates, Heuristic, Problem, SearchSpace,
};
use tracing::{info, trace};

/// A* search. A child is ranked by the path cost of the node it was generated
/// from plus the heuristic value of its own state. Since every child of a node
/// gets the same offset this orders the frontier exactly as `g + h` of the
/// child would. Goal nodes are detected when popped.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        problem: &Problem,
        heuristic: &dyn Heuristic,
    ) -> Result<(SearchOutcome, SearchStatistics), SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state());
        let root_node_id = search_space.get_root_node_id();

        if problem.is_goal(problem.initial_state()) {
            info!("initial state is a goal state");
            statistics.finalise_search();
            let outcome = SearchOutcome::Success {
                explored: vec![problem.initial_state()],
                path: search_space.extract_path(root_node_id),
            };
            return Ok((outcome, statistics));
        }

        let mut frontier = BestFirstFrontier::new();
        let mut explored = ExploredStates::new();
        frontier.push(BestFirstEntry::new(0, problem.initial_state(), root_node_id));

        while let Some(entry) = frontier.pop() {
            trace!(state = entry.state, f = entry.priority, "expanding");
            explored.record(entry.state);
            statistics.increment_expanded_nodes();

            let g_value = search_space.get_node(entry.node_id).get_cost();
            if problem.is_goal(entry.state) {
                info!(cost = g_value, "goal reached");
                statistics.finalise_search();
                let outcome = SearchOutcome::Success {
                    path: search_space.extract_path(entry.node_id),
                    explored: explored.into_vec(),
                };
                return Ok((outcome, statistics));
            }

            let successors = problem.successors(entry.state);
            statistics.increment_generated_nodes(successors.len());
            let h_values = heuristic.evaluate_batch(successors, problem)?;
            for (&successor, h_value) in successors.iter().zip(h_values) {
                let child = search_space.make_child(entry.node_id, successor, g_value + h_value);
                let replaced = frontier.admit(child, explored.contains(successor));
                statistics.increment_replaced_entries(replaced);
            }
        }

        info!("frontier exhausted");
        statistics.finalise_search();
        Ok((
            SearchOutcome::Failed {
                explored: explored.into_vec(),
            },
            statistics,
        ))
    }
}
