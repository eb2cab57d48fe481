//! One-call entry points that run a search engine on a problem and return
//! its report.

use crate::search::search_engines::{SearchEngineName, SearchError, SearchOutcome};
use crate::search::{Heuristic, ManhattanDistance, Problem};
use tracing::info;

/// Run `engine` on `problem`. Engines that do not rank by a heuristic ignore
/// `heuristic`.
pub fn solve(
    problem: &Problem,
    engine: SearchEngineName,
    heuristic: &dyn Heuristic,
) -> Result<SearchOutcome, SearchError> {
    info!(%engine, "running search engine");
    engine.search(problem, heuristic)
}

fn report(problem: &Problem, engine: SearchEngineName) -> Result<String, SearchError> {
    let outcome = solve(problem, engine, &ManhattanDistance::new())?;
    Ok(outcome.to_string())
}

/// Uniform-cost search report.
pub fn ucs(problem: &Problem) -> Result<String, SearchError> {
    report(problem, SearchEngineName::Ucs)
}

/// Iterative deepening search report.
pub fn ids(problem: &Problem) -> Result<String, SearchError> {
    report(problem, SearchEngineName::Ids)
}

/// Greedy best-first search report, ranked by Manhattan distance.
pub fn gbfs(problem: &Problem) -> Result<String, SearchError> {
    report(problem, SearchEngineName::Gbfs)
}

/// A* search report, using Manhattan distance.
pub fn astar(problem: &Problem) -> Result<String, SearchError> {
    report(problem, SearchEngineName::AStar)
}
