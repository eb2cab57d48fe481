mod explored;
mod frontier;
pub mod heuristics;
mod problem;
pub mod search_engines;
mod search_node;
mod search_space;
mod validate;
mod verbosity;

pub use crate::parsed_types::State;
pub use explored::ExploredStates;
pub use frontier::{BestFirstEntry, BestFirstFrontier, Priority};
pub use heuristics::{
    Heuristic, HeuristicError, HeuristicName, HeuristicValue, ManhattanDistance, ZeroHeuristic,
};
pub use problem::{Problem, ProblemError, INITIAL_STATE};
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_space::{SearchSpace, UNIT_COST};
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
