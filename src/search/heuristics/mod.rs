mod heuristic;
mod manhattan;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicError, HeuristicName, HeuristicValue};
pub use manhattan::ManhattanDistance;
pub use zero_heuristic::ZeroHeuristic;
