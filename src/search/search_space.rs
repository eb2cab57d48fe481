use crate::parsed_types::State;
use crate::search::{BestFirstEntry, NodeId, Priority, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};

/// Step cost of every transition.
pub const UNIT_COST: usize = 1;

/// A [`SearchSpace`] owns every node created during one search. Nodes refer
/// to their parents by [`NodeId`], so many children can share an ancestor and
/// paths can only be followed towards the root.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let mut nodes = SegVec::new();
        nodes.push(SearchNode::new_without_parent(initial_state));
        Self {
            root_node_id: NodeId::new(0),
            nodes,
        }
    }

    pub fn get_root_node_id(&self) -> NodeId {
        self.root_node_id
    }

    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.index()).expect("Invalid node id")
    }

    /// Create a node for `state` generated from `parent_id` with the given
    /// step cost.
    pub fn insert_child(&mut self, parent_id: NodeId, state: State, step_cost: usize) -> NodeId {
        let child = SearchNode::new_with_parent(state, parent_id, self.get_node(parent_id), step_cost);
        let child_id = NodeId::new(self.nodes.len());
        self.nodes.push(child);
        child_id
    }

    /// Create a unit-cost child of `parent_id` and wrap it into a frontier
    /// entry with the given priority.
    pub fn make_child(&mut self, parent_id: NodeId, state: State, priority: Priority) -> BestFirstEntry {
        let node_id = self.insert_child(parent_id, state, UNIT_COST);
        BestFirstEntry::new(priority, state, node_id)
    }

    /// The states from the root to `node_id`, both included.
    pub fn extract_path(&self, node_id: NodeId) -> Vec<State> {
        let mut path = vec![];
        let mut current_id = node_id;
        while current_id != NO_NODE {
            let node = self.get_node(current_id);
            path.push(node.get_state());
            current_id = node.get_parent_id();
        }
        path.reverse();
        path
    }

    /// Whether `state` appears on the path from `node_id` up to the root,
    /// `node_id` itself included.
    pub fn is_on_path(&self, node_id: NodeId, state: State) -> bool {
        let mut current_id = node_id;
        while current_id != NO_NODE {
            let node = self.get_node(current_id);
            if node.key() == state {
                return true;
            }
            current_id = node.get_parent_id();
        }
        false
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_parent() {
        let space = SearchSpace::new(7);
        let root = space.get_node(space.get_root_node_id());
        assert!(root.is_root());
        assert_eq!(root.get_state(), 7);
        assert_eq!(root.get_cost(), 0);
        assert_eq!(space.extract_path(space.get_root_node_id()), vec![7]);
    }

    #[test]
    fn children_accumulate_cost() {
        let mut space = SearchSpace::new(0);
        let root = space.get_root_node_id();
        let a = space.insert_child(root, 1, UNIT_COST);
        let b = space.insert_child(a, 4, 3);
        assert_eq!(space.get_node(a).get_cost(), 1);
        assert_eq!(space.get_node(b).get_cost(), 4);
        assert_eq!(space.get_node(b).get_parent_id(), a);
    }

    #[test]
    fn make_child_builds_entry() {
        let mut space = SearchSpace::new(0);
        let root = space.get_root_node_id();
        let entry = space.make_child(root, 2, 5);
        assert_eq!(entry.priority, 5);
        assert_eq!(entry.state, 2);
        assert_eq!(space.get_node(entry.node_id).get_cost(), 1);
        assert_eq!(space.num_nodes(), 2);
    }

    #[test]
    fn shared_ancestors() {
        let mut space = SearchSpace::new(0);
        let root = space.get_root_node_id();
        let a = space.insert_child(root, 1, UNIT_COST);
        let b = space.insert_child(a, 3, UNIT_COST);
        let c = space.insert_child(a, 4, UNIT_COST);
        assert_eq!(space.extract_path(b), vec![0, 1, 3]);
        assert_eq!(space.extract_path(c), vec![0, 1, 4]);
    }

    #[test]
    fn path_membership() {
        let mut space = SearchSpace::new(0);
        let root = space.get_root_node_id();
        let a = space.insert_child(root, 1, UNIT_COST);
        let b = space.insert_child(a, 2, UNIT_COST);
        assert!(space.is_on_path(b, 0));
        assert!(space.is_on_path(b, 2));
        assert!(!space.is_on_path(a, 2));
    }
}
