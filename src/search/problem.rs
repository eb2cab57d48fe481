use crate::parsed_types::{ProblemDescription, State};
use crate::parsers::{parse_problem_description, ProblemFormatError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Every parsed problem starts its search from this state.
pub const INITIAL_STATE: State = 0;

#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("failed to read problem file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Format(#[from] ProblemFormatError),
}

/// A single-goal path finding problem over a finite state graph whose states
/// are laid out on a `size` by `size` grid. Every transition has unit cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    size: usize,
    initial_state: State,
    goal_state: State,
    successors: Vec<Vec<State>>,
}

impl Problem {
    /// Creates a problem from its parts. Each successor list is expected to be
    /// sorted ascending; search engines visit successors in this order.
    pub fn new(
        size: usize,
        successors: Vec<Vec<State>>,
        initial_state: State,
        goal_state: State,
    ) -> Self {
        debug_assert!(
            successors.iter().all(|list| list.windows(2).all(|w| w[0] <= w[1])),
            "Successor lists must be sorted"
        );
        Self {
            size,
            initial_state,
            goal_state,
            successors,
        }
    }

    pub fn from_description(description: ProblemDescription) -> Self {
        let (size, successors, goal_state) = description.into_parts();
        Self::new(size, successors, INITIAL_STATE, goal_state)
    }

    pub fn from_path(path: &Path) -> Result<Self, ProblemError> {
        let text = fs::read_to_string(path).map_err(|source| ProblemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text)?)
    }

    pub fn from_text(text: &str) -> Result<Self, ProblemFormatError> {
        parse_problem_description(text).map(Self::from_description)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn initial_state(&self) -> State {
        self.initial_state
    }

    pub fn goal_state(&self) -> State {
        self.goal_state
    }

    pub fn is_goal(&self, state: State) -> bool {
        state == self.goal_state
    }

    /// Successors of `state` in ascending order. States without a successor
    /// line in the problem text have none.
    pub fn successors(&self, state: State) -> &[State] {
        self.successors
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of states with an explicit successor list.
    pub fn num_listed_states(&self) -> usize {
        self.successors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use tempfile::NamedTempFile;

    #[test]
    fn parsed_problem_starts_at_zero() {
        let problem = problem(OPEN_GRID_3_TEXT);
        assert_eq!(problem.initial_state(), 0);
        assert_eq!(problem.goal_state(), 8);
        assert!(problem.is_goal(8));
        assert!(!problem.is_goal(0));
        assert_eq!(problem.size(), 3);
        assert_eq!(problem.num_listed_states(), 9);
    }

    #[test]
    fn successors_are_sorted() {
        let problem = Problem::from_text("2\n2 1\n\n\n\n3").unwrap();
        assert_eq!(problem.successors(0), &[1, 2]);
    }

    #[test]
    fn unlisted_state_has_no_successors() {
        let problem = problem(DIAMOND_TEXT);
        assert!(problem.successors(3).is_empty());
        assert!(problem.successors(42).is_empty());
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, DIAMOND_TEXT.as_bytes()).unwrap();
        let problem = Problem::from_path(file.path()).unwrap();
        assert_eq!(problem, diamond_with_goal(3));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Problem::from_path(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(ProblemError::Io { .. })));
    }

    #[test]
    fn from_path_reports_format_errors() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"size\n3").unwrap();
        let result = Problem::from_path(file.path());
        assert!(matches!(
            result,
            Err(ProblemError::Format(ProblemFormatError::InvalidInteger { line: 1, .. }))
        ));
    }
}
