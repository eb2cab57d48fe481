use crate::parsed_types::State;

/// Index of a [`SearchNode`] inside the [`SearchSpace`](crate::search::SearchSpace)
/// that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is one point of a search tree: a state, the cost of the
/// path that reached it and the node that generated it. Nodes never change
/// after creation.
///
/// Two nodes stand for the same frontier or explored entry whenever their
/// [`key`](SearchNode::key)s are equal; cost and parent play no part in this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    state: State,
    /// Accumulated path cost from the root, zero for the root itself.
    cost: usize,
    /// Node that generated this one, [`NO_NODE`] for the root.
    parent_id: NodeId,
}

impl SearchNode {
    /// Create the root node of a search tree.
    pub fn new_without_parent(state: State) -> Self {
        Self {
            state,
            cost: 0,
            parent_id: NO_NODE,
        }
    }

    /// Create a node generated from `parent` by one transition of cost
    /// `step_cost`.
    pub fn new_with_parent(
        state: State,
        parent_id: NodeId,
        parent: &SearchNode,
        step_cost: usize,
    ) -> Self {
        Self {
            state,
            cost: parent.cost + step_cost,
            parent_id,
        }
    }

    /// Deduplication key.
    pub fn key(&self) -> State {
        self.state
    }

    pub fn get_state(&self) -> State {
        self.state
    }

    pub fn get_cost(&self) -> usize {
        self.cost
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }
}
