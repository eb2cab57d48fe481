//! Manhattan distance on the grid embedding of state indices.

use crate::parsed_types::State;
use crate::search::{Heuristic, HeuristicError, HeuristicValue, Problem};

/// Sum of the row and column differences between a state and the goal, where
/// state `s` sits at row `s / size` and column `s % size`.
///
/// Admissible and consistent only if the successor relation is in fact grid
/// adjacency. Nothing checks this.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanDistance;

impl ManhattanDistance {
    pub fn new() -> Self {
        ManhattanDistance {}
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&self, state: State, problem: &Problem) -> Result<HeuristicValue, HeuristicError> {
        let size = problem.size();
        let goal = problem.goal_state();
        let num_cells = size.saturating_mul(size);
        if state >= num_cells {
            return Err(HeuristicError::StateOutOfRange { state, size });
        }
        if goal >= num_cells {
            return Err(HeuristicError::GoalOutOfRange { goal, size });
        }

        let rows = (goal / size).abs_diff(state / size);
        let columns = (goal % size).abs_diff(state % size);
        Ok(rows + columns)
    }
}
