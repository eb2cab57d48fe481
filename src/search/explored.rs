use crate::parsed_types::State;
use std::collections::HashSet;
use std::ops::Deref;

/// The states expanded by a search, in the order they were expanded. A state
/// may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploredStates {
    order: Vec<State>,
    seen: HashSet<State>,
}

impl ExploredStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, state: State) {
        self.order.push(state);
        self.seen.insert(state);
    }

    pub fn contains(&self, state: State) -> bool {
        self.seen.contains(&state)
    }

    pub fn into_vec(self) -> Vec<State> {
        self.order
    }
}

impl Deref for ExploredStates {
    type Target = [State];

    fn deref(&self) -> &Self::Target {
        &self.order
    }
}
