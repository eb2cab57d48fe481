//! The best-first frontier shared by UCS, GBFS and A*.
//!
//! Entries are popped in ascending `(priority, state, insertion order)`, which
//! makes every run reproducible. Deduplication is deliberately loose: a child
//! only replaces entries for its state whose priority is strictly worse, so
//! entries with equal priority may coexist, and nothing stops a state from
//! being pushed again after it has been explored.

use crate::parsed_types::State;
use crate::search::NodeId;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

pub type Priority = usize;

/// A generated node waiting to be expanded, together with its ranking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BestFirstEntry {
    pub priority: Priority,
    pub state: State,
    pub node_id: NodeId,
}

impl BestFirstEntry {
    pub fn new(priority: Priority, state: State, node_id: NodeId) -> Self {
        Self {
            priority,
            state,
            node_id,
        }
    }
}

/// Pop order: lowest priority, then lowest state, then oldest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    priority: Priority,
    state: State,
    sequence: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct QueuedEntry {
    sequence: u64,
    entry: BestFirstEntry,
}

#[derive(Debug)]
pub struct BestFirstFrontier {
    queue: PriorityQueue<QueuedEntry, Reverse<FrontierKey>>,
    next_sequence: u64,
}

impl BestFirstFrontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, entry: BestFirstEntry) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let key = FrontierKey {
            priority: entry.priority,
            state: entry.state,
            sequence,
        };
        self.queue.push(QueuedEntry { sequence, entry }, Reverse(key));
    }

    pub fn pop(&mut self) -> Option<BestFirstEntry> {
        self.queue.pop().map(|(queued, _)| queued.entry)
    }

    pub fn contains_state(&self, state: State) -> bool {
        self.queue.iter().any(|(queued, _)| queued.entry.state == state)
    }

    /// Remove every entry for `entry.state` whose priority is strictly
    /// greater than `entry.priority`, pushing `entry` once for each removed
    /// entry. Returns the number of replaced entries.
    pub fn replace_worse(&mut self, entry: BestFirstEntry) -> usize {
        let worse: Vec<QueuedEntry> = self
            .queue
            .iter()
            .map(|(queued, _)| *queued)
            .filter(|queued| {
                queued.entry.state == entry.state && queued.entry.priority > entry.priority
            })
            .collect();
        for queued in &worse {
            self.queue.remove(queued);
            self.push(entry);
        }
        worse.len()
    }

    /// Apply the admission rule to a freshly generated child: it is pushed if
    /// its state is neither queued nor explored, and it then replaces any
    /// strictly worse entries for the same state. Returns the number of
    /// replaced entries.
    pub fn admit(&mut self, entry: BestFirstEntry, is_explored: bool) -> usize {
        if !is_explored && !self.contains_state(entry.state) {
            self.push(entry);
        }
        self.replace_worse(entry)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(priority: Priority, state: State, node: usize) -> BestFirstEntry {
        BestFirstEntry::new(priority, state, NodeId::new(node))
    }

    fn drain(frontier: &mut BestFirstFrontier) -> Vec<(Priority, State, usize)> {
        std::iter::from_fn(|| frontier.pop())
            .map(|e| (e.priority, e.state, e.node_id.index()))
            .collect()
    }

    #[test]
    fn pops_lowest_priority_first() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(entry(3, 1, 1));
        frontier.push(entry(1, 2, 2));
        frontier.push(entry(2, 3, 3));
        assert_eq!(drain(&mut frontier), vec![(1, 2, 2), (2, 3, 3), (3, 1, 1)]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_break_on_state_then_age() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(entry(1, 5, 1));
        frontier.push(entry(1, 2, 2));
        frontier.push(entry(1, 5, 3));
        assert_eq!(drain(&mut frontier), vec![(1, 2, 2), (1, 5, 1), (1, 5, 3)]);
    }

    #[test]
    fn admits_new_state() {
        let mut frontier = BestFirstFrontier::new();
        assert_eq!(frontier.admit(entry(2, 4, 1), false), 0);
        assert!(frontier.contains_state(4));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn skips_explored_state() {
        let mut frontier = BestFirstFrontier::new();
        assert_eq!(frontier.admit(entry(2, 4, 1), true), 0);
        assert!(frontier.is_empty());
    }

    #[test]
    fn keeps_existing_entry_on_tie() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(entry(2, 4, 1));
        assert_eq!(frontier.admit(entry(2, 4, 2), false), 0);
        assert_eq!(drain(&mut frontier), vec![(2, 4, 1)]);
    }

    #[test]
    fn replaces_strictly_worse_entry() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(entry(5, 4, 1));
        frontier.push(entry(3, 6, 2));
        assert_eq!(frontier.admit(entry(2, 4, 3), false), 1);
        assert_eq!(drain(&mut frontier), vec![(2, 4, 3), (3, 6, 2)]);
    }

    #[test]
    fn replaces_even_when_explored() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(entry(5, 4, 1));
        assert_eq!(frontier.admit(entry(2, 4, 3), true), 1);
        assert_eq!(drain(&mut frontier), vec![(2, 4, 3)]);
    }

    #[test]
    fn every_worse_duplicate_is_replaced() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(entry(5, 4, 1));
        frontier.push(entry(6, 4, 2));
        frontier.push(entry(1, 4, 3));
        assert_eq!(frontier.replace_worse(entry(2, 4, 4)), 2);
        assert_eq!(
            drain(&mut frontier),
            vec![(1, 4, 3), (2, 4, 4), (2, 4, 4)]
        );
    }
}
