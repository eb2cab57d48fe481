//! Contains the [`ProblemDescription`] type.

use crate::parsed_types::State;

/// A maze problem exactly as written in a problem file.
///
/// ## Example
/// ```
/// # use maze_search::parsers::parse_problem_description;
/// let input = "2\n1 2\n3\n3\n\n3";
///
/// let description = parse_problem_description(input).unwrap();
///
/// assert_eq!(description.size(), 2);
/// assert_eq!(description.successor_lists().len(), 4);
/// assert_eq!(description.goal_state(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDescription {
    /// Dimension of the square grid the states are laid out on.
    size: usize,
    /// Successors of each state, indexed by state and sorted ascending.
    successor_lists: Vec<Vec<State>>,
    /// The state to reach.
    goal_state: State,
}

impl ProblemDescription {
    /// Creates a new [`ProblemDescription`]. The successor lists are sorted
    /// ascending before being stored.
    pub fn new(size: usize, mut successor_lists: Vec<Vec<State>>, goal_state: State) -> Self {
        for successors in &mut successor_lists {
            successors.sort_unstable();
        }
        Self {
            size,
            successor_lists,
            goal_state,
        }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn successor_lists(&self) -> &[Vec<State>] {
        &self.successor_lists
    }

    pub const fn goal_state(&self) -> State {
        self.goal_state
    }

    /// Consumes the description, returning its parts.
    pub fn into_parts(self) -> (usize, Vec<Vec<State>>, State) {
        (self.size, self.successor_lists, self.goal_state)
    }
}
