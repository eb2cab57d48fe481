use crate::parsed_types::State;
use crate::search::heuristics::{ManhattanDistance, ZeroHeuristic};
use crate::search::Problem;
use std::fmt::Debug;
use thiserror::Error;

pub type HeuristicValue = usize;

/// A state or the goal lies outside the problem's grid, so it has no grid
/// coordinates to measure from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeuristicError {
    #[error("state {state} lies outside the {size}x{size} grid")]
    StateOutOfRange { state: State, size: usize },
    #[error("goal state {goal} lies outside the {size}x{size} grid")]
    GoalOutOfRange { goal: State, size: usize },
}

pub trait Heuristic: Debug {
    /// Estimate the remaining cost from `state` to the goal of `problem`.
    fn evaluate(&self, state: State, problem: &Problem) -> Result<HeuristicValue, HeuristicError>;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state in order and stops at the first error.
    fn evaluate_batch(
        &self,
        states: &[State],
        problem: &Problem,
    ) -> Result<Vec<HeuristicValue>, HeuristicError> {
        states
            .iter()
            .map(|&state| self.evaluate(state, problem))
            .collect()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "Manhattan distance between grid cells, the default.")]
    Manhattan,
    #[clap(
        name = "zero",
        help = "The zero heuristic. Turns A* into uniform-cost search and \
        GBFS into an arbitrary-order search."
    )]
    Zero,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Manhattan => Box::new(ManhattanDistance::new()),
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        }
    }
}
