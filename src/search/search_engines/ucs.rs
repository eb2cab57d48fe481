//! Uniform-cost search. With unit step costs the priority of a node is its
//! depth, so the first goal node popped lies on a shortest path.

use crate::search::{
    search_engines::{SearchEngine, SearchError, SearchOutcome, SearchStatistics},
    BestFirstEntry, BestFirstFrontier, ExploredStates, Heuristic, Problem, SearchSpace,
};
use tracing::{info, trace};

#[derive(Debug, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for UCS {
    fn search(
        &mut self,
        problem: &Problem,
        _heuristic: &dyn Heuristic,
    ) -> Result<(SearchOutcome, SearchStatistics), SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state());
        let root_node_id = search_space.get_root_node_id();

        if problem.is_goal(problem.initial_state()) {
            info!("initial state is a goal state");
            statistics.finalise_search();
            let outcome = SearchOutcome::Success {
                explored: vec![],
                path: search_space.extract_path(root_node_id),
            };
            return Ok((outcome, statistics));
        }

        let mut frontier = BestFirstFrontier::new();
        let mut explored = ExploredStates::new();
        frontier.push(BestFirstEntry::new(0, problem.initial_state(), root_node_id));

        while let Some(entry) = frontier.pop() {
            trace!(state = entry.state, priority = entry.priority, "expanding");
            explored.record(entry.state);
            statistics.increment_expanded_nodes();

            if problem.is_goal(entry.state) {
                info!(cost = entry.priority, "goal reached");
                statistics.finalise_search();
                let outcome = SearchOutcome::Success {
                    path: search_space.extract_path(entry.node_id),
                    explored: explored.into_vec(),
                };
                return Ok((outcome, statistics));
            }

            let successors = problem.successors(entry.state);
            statistics.increment_generated_nodes(successors.len());
            for &successor in successors {
                let child = search_space.make_child(entry.node_id, successor, entry.priority + 1);
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
