//! This module implements the greedy best-first search algorithm.

use crate::search::{
    search_engines::{SearchEngine, SearchError, SearchOutcome, SearchStatistics},
    BestFirstEntry, BestFirstFrontier, ExploredStates, Heuristic, Problem, SearchSpace,
};
use tracing::{info, trace};

/// Greedy best-first search. Nodes are ranked by the heuristic value of their
/// own state alone, and children are goal-tested as soon as they are
/// generated, so the goal itself is never recorded as explored.
#[derive(Debug, Default)]
pub struct GBFS {}

impl GBFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for GBFS {
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
                explored: vec![],
                path: search_space.extract_path(root_node_id),
            };
            return Ok((outcome, statistics));
        }

        let mut frontier = BestFirstFrontier::new();
        let mut explored = ExploredStates::new();
        frontier.push(BestFirstEntry::new(0, problem.initial_state(), root_node_id));

        while let Some(entry) = frontier.pop() {
            trace!(state = entry.state, h = entry.priority, "expanding");
            explored.record(entry.state);
            statistics.increment_expanded_nodes();

            let successors = problem.successors(entry.state);
            statistics.increment_generated_nodes(successors.len());
            for &successor in successors {
                let h_value = heuristic.evaluate(successor, problem)?;
                let child = search_space.make_child(entry.node_id, successor, h_value);

                if problem.is_goal(successor) {
                    info!("goal generated");
                    statistics.finalise_search();
                    let outcome = SearchOutcome::Success {
                        path: search_space.extract_path(child.node_id),
                        explored: explored.into_vec(),
                    };
                    return Ok((outcome, statistics));
                }

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate, HeuristicError, ManhattanDistance};
    use crate::test_utils::*;

    fn run(problem: &Problem) -> Result<(SearchOutcome, SearchStatistics), SearchError> {
        GBFS::new().search(problem, &ManhattanDistance::new())
    }

    #[test]
    fn goal_is_not_explored() {
        let (outcome, _) = run(&problem(DIAMOND_TEXT)).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Success {
                explored: vec![0, 1],
                path: vec![0, 1, 3],
            }
        );
    }

    #[test]
    fn follows_the_heuristic() {
        let (outcome, _) = run(&problem(OPEN_GRID_3_TEXT)).unwrap();
        assert_eq!(outcome.explored(), &[0, 1, 2, 5]);
        assert_eq!(outcome.path(), Some(&[0, 1, 2, 5, 8][..]));
    }

    #[test]
    fn corridors_path_is_valid() {
        let problem = problem(CORRIDORS_4_TEXT);
        let (outcome, _) = run(&problem).unwrap();
        let path = outcome.path().unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&15));
        assert!(validate(path, &problem).is_ok());
    }

    #[test]
    fn unreachable_goal_fails() {
        let (outcome, _) = run(&problem(DISCONNECTED_TEXT)).unwrap();
        assert_eq!(outcome, SearchOutcome::Failed { explored: vec![0, 1] });
    }

    #[test]
    fn initial_goal_has_empty_explored() {
        let (outcome, _) = run(&diamond_with_goal(0)).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Success {
                explored: vec![],
                path: vec![0],
            }
        );
    }

    #[test]
    fn goal_outside_grid_is_an_error() {
        let result = run(&diamond_with_goal(99));
        assert_eq!(
            result.unwrap_err(),
            SearchError::Heuristic(HeuristicError::GoalOutOfRange { goal: 99, size: 2 })
        );
    }
}
