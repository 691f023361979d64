//! The weighted undirected co-occurrence graph.
//!
//! ## Submodules
//!
//! - [`build`] — quadratic pair expansion of grouped records into the graph.
//! - [`prune`] — edge-weight thresholding and isolate removal.
//!
//! Nodes carry the entity id, its display label, and a scalar `weight` that
//! starts at 1.0 and is overwritten by the metric engine. Edge weights count
//! the distinct groups in which the two endpoints co-occur.

pub mod build;
pub mod prune;

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

/// Node payload: entity id, display label, and metric weight.
#[derive(Debug, Clone, PartialEq)]
pub struct CoNode {
    /// Entity id (contributor id or page id, depending on group mode).
    pub id: String,
    /// Display label, resolved first-seen-wins across the dump.
    pub label: String,
    /// Metric value; 1.0 until the metric engine runs.
    pub weight: f64,
}

/// An undirected simple graph of co-occurring entities.
///
/// Wraps a petgraph [`UnGraph`] together with an id → [`NodeIndex`] map so
/// callers can address nodes by entity id. No self-loops and no parallel
/// edges exist by construction; co-occurrence counts accumulate into a
/// single edge's `u64` weight.
#[derive(Debug, Clone, Default)]
pub struct CoGraph {
    /// Undirected graph: nodes = entities, edge weights = co-occurrence counts.
    pub graph: UnGraph<CoNode, u64>,
    /// Mapping from entity id to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl CoGraph {
    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for an entity id.
    #[must_use]
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    /// Co-occurrence weight of the edge between two entity ids, if present.
    #[must_use]
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<u64> {
        let ia = self.node_index(a)?;
        let ib = self.node_index(b)?;
        self.graph
            .find_edge(ia, ib)
            .and_then(|e| self.graph.edge_weight(e).copied())
    }

    /// Number of incident edges on an entity id (0 if absent).
    #[must_use]
    pub fn degree(&self, id: &str) -> usize {
        self.node_index(id)
            .map_or(0, |idx| self.graph.neighbors(idx).count())
    }

    /// Edge density: `2E / (N * (N - 1))`. Zero for graphs with fewer than
    /// two nodes.
    #[must_use]
    pub fn density(&self) -> f64 {
        let n = self.node_count();
        if n < 2 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            2.0 * self.edge_count() as f64 / (n as f64 * (n as f64 - 1.0))
        }
    }

    /// Rebuild `node_map` from the graph's current node set.
    ///
    /// Must be called after any `retain_*` operation: petgraph reassigns
    /// node indices when nodes are removed.
    pub(crate) fn rebuild_node_map(&mut self) {
        self.node_map = self
            .graph
            .node_indices()
            .map(|idx| (self.graph[idx].id.clone(), idx))
            .collect();
    }
}
