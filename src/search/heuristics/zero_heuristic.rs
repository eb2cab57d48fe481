use crate::parsed_types::State;
use crate::search::{Heuristic, HeuristicError, HeuristicValue, Problem};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _state: State, _problem: &Problem) -> Result<HeuristicValue, HeuristicError> {
        Ok(0)
    }
}
