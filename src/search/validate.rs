use crate::parsed_types::State;
use crate::search::Problem;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("path is empty")]
    EmptyPath,
    #[error("path starts at {found} instead of the initial state {expected}")]
    WrongStart { expected: State, found: State },
    #[error("path ends at {found} instead of the goal state {expected}")]
    WrongEnd { expected: State, found: State },
    #[error("step {step} moves from {from} to {to}, which is not a successor")]
    InvalidTransition { step: usize, from: State, to: State },
}

/// Check that `path` starts at the initial state, ends at the goal, and that
/// every consecutive pair of states is an edge of the successor relation.
pub fn validate(path: &[State], problem: &Problem) -> Result<(), ValidationError> {
    let (first, last) = match (path.first(), path.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(ValidationError::EmptyPath),
    };
    if first != problem.initial_state() {
        return Err(ValidationError::WrongStart {
            expected: problem.initial_state(),
            found: first,
        });
    }

    for (step, pair) in path.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        if !problem.successors(from).contains(&to) {
            return Err(ValidationError::InvalidTransition { step, from, to });
        }
    }

    if !problem.is_goal(last) {
        return Err(ValidationError::WrongEnd {
            expected: problem.goal_state(),
            found: last,
        });
    }

    Ok(())
}
