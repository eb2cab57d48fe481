use crate::parsed_types::State;
use crate::search::{
    search_engines::{AStar, SearchStatistics, GBFS, IDS, UCS},
    Heuristic, HeuristicError, Problem,
};
use serde::Serialize;
use std::fmt::Debug;
use strum::IntoEnumIterator;
use thiserror::Error;

/// How a search ended. Running out of nodes to expand is an outcome, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The goal was reached along `path`, which runs from the initial state to
    /// the goal.
    Success {
        explored: Vec<State>,
        path: Vec<State>,
    },
    /// Every reachable node was expanded, or every depth limit was tried,
    /// without reaching the goal.
    Failed { explored: Vec<State> },
}

impl SearchOutcome {
    pub fn explored(&self) -> &[State] {
        match self {
            SearchOutcome::Success { explored, .. } | SearchOutcome::Failed { explored } => {
                explored
            }
        }
    }

    pub fn path(&self) -> Option<&[State]> {
        match self {
            SearchOutcome::Success { path, .. } => Some(path),
            SearchOutcome::Failed { .. } => None,
        }
    }

    /// Elapsed time in the reports, one unit per explored state.
    pub fn elapsed(&self) -> usize {
        self.explored().len()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("heuristic evaluation failed: {0}")]
    Heuristic(#[from] HeuristicError),
}

pub trait SearchEngine: Debug {
    fn search(
        &mut self,
        problem: &Problem,
        heuristic: &dyn Heuristic,
    ) -> Result<(SearchOutcome, SearchStatistics), SearchError>;
}

#[derive(
    clap::ValueEnum,
    strum_macros::Display,
    strum_macros::EnumIter,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Uniform-cost search.")]
    #[strum(serialize = "UCS")]
    #[serde(rename = "UCS")]
    Ucs,
    #[clap(help = "Iterative deepening over depth-limited search.")]
    #[strum(serialize = "IDS")]
    #[serde(rename = "IDS")]
    Ids,
    #[clap(help = "Greedy best-first search on the heuristic alone.")]
    #[strum(serialize = "GBFS")]
    #[serde(rename = "GBFS")]
    Gbfs,
    #[clap(name = "astar", help = "A* search.")]
    #[strum(serialize = "AStar")]
    #[serde(rename = "AStar")]
    AStar,
}

impl SearchEngineName {
    /// Every engine, in the order UCS, IDS, GBFS, A*.
    pub fn all() -> impl Iterator<Item = SearchEngineName> {
        Self::iter()
    }

    pub fn create(&self) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Ucs => Box::new(UCS::new()),
            SearchEngineName::Ids => Box::new(IDS::new()),
            SearchEngineName::Gbfs => Box::new(GBFS::new()),
            SearchEngineName::AStar => Box::new(AStar::new()),
        }
    }

    /// Whether the engine consults the heuristic at all.
    pub fn uses_heuristic(&self) -> bool {
        matches!(self, SearchEngineName::Gbfs | SearchEngineName::AStar)
    }

    pub fn search(
        &self,
        problem: &Problem,
        heuristic: &dyn Heuristic,
    ) -> Result<SearchOutcome, SearchError> {
        let mut engine = self.create();
        let (outcome, _statistics) = engine.search(problem, heuristic)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engines_run_in_declaration_order() {
        let names: Vec<String> = SearchEngineName::all().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["UCS", "IDS", "GBFS", "AStar"]);
    }

    #[test]
    fn only_informed_engines_use_the_heuristic() {
        let informed: Vec<SearchEngineName> = SearchEngineName::all()
            .filter(SearchEngineName::uses_heuristic)
            .collect();
        assert_eq!(informed, vec![SearchEngineName::Gbfs, SearchEngineName::AStar]);
    }

    #[test]
    fn outcome_accessors() {
        let success = SearchOutcome::Success {
            explored: vec![0, 1],
            path: vec![0, 1, 3],
        };
        assert!(success.is_success());
        assert_eq!(success.elapsed(), 2);
        assert_eq!(success.path(), Some(&[0, 1, 3][..]));

        let failed = SearchOutcome::Failed { explored: vec![] };
        assert!(!failed.is_success());
        assert_eq!(failed.elapsed(), 0);
        assert_eq!(failed.path(), None);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let failed = SearchOutcome::Failed {
            explored: vec![0, 1],
        };
        assert_eq!(
            serde_json::to_string(&failed).unwrap(),
            r#"{"status":"failed","explored":[0,1]}"#
        );
    }
}
