use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of nodes generated, including the ones that were never queued
    generated_nodes: usize,
    /// Number of frontier entries replaced by a cheaper node for their state
    replaced_entries: usize,
    /// Number of nodes dropped by depth-limited search for being too deep
    pruned_nodes: usize,
    /// Number of depth limits tried by iterative deepening
    depth_limits: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            replaced_entries: 0,
            pruned_nodes: 0,
            depth_limits: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_replaced_entries(&mut self, num_entries: usize) {
        self.replaced_entries += num_entries;
        self.log_if_needed();
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_depth_limits(&mut self, depth_limit: usize) {
        self.depth_limits += 1;
        debug!(depth_limit, "starting depth-limited pass");
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn replaced_entries(&self) -> usize {
        self.replaced_entries
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn depth_limits(&self) -> usize {
        self.depth_limits
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            replaced_entries = self.replaced_entries,
            pruned_nodes = self.pruned_nodes,
            depth_limits = self.depth_limits,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
