//! Pruning: edge-weight thresholding and isolate removal.
//!
//! Always applied in this order:
//!
//! 1. [`CoGraph::prune_edges`] — drop edges whose weight is strictly below
//!    the threshold. The comparison is `<`, so a threshold equal to the
//!    minimum edge weight (the default of 1) removes nothing.
//! 2. [`CoGraph::prune_isolates`] — drop nodes left with no incident edges.
//!
//! Both are pure removals; no node or edge is ever created here. Each
//! rebuilds the id map afterwards because petgraph reassigns indices on
//! removal.

use tracing::debug;

use super::CoGraph;

impl CoGraph {
    /// Remove every edge with weight strictly less than `min_weight`.
    pub fn prune_edges(&mut self, min_weight: u64) {
        let before = self.edge_count();
        self.graph.retain_edges(|g, e| g[e] >= min_weight);
        self.rebuild_node_map();
        debug!(
            min_weight,
            removed = before - self.edge_count(),
            remaining = self.edge_count(),
            "pruned edges below threshold"
        );
    }

    /// Remove every node with zero incident edges.
    pub fn prune_isolates(&mut self) {
        let before = self.node_count();
        self.graph
            .retain_nodes(|g, n| g.neighbors(n).next().is_some());
        self.rebuild_node_map();
        debug!(
            removed = before - self.node_count(),
            remaining = self.node_count(),
            "pruned isolated nodes"
        );
    }
}
