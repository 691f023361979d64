//! Cheap single-pass metrics: degree centrality and local clustering.
//!
//! Both run in one sweep over the node set (clustering additionally probes
//! neighbor pairs) and need no iteration bounds. Scores are returned as a
//! vector indexed by node position.

use petgraph::graph::NodeIndex;

use crate::graph::CoGraph;

/// Degree centrality: `degree / (n - 1)`.
///
/// A node connected to every other node scores exactly 1.0. Graphs with a
/// single node (or none) score 0.0 — there is nothing to be connected to.
#[must_use]
pub fn degree_centrality(graph: &CoGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = 1.0 / (n as f64 - 1.0);
    graph
        .graph
        .node_indices()
        .map(|v| {
            #[allow(clippy::cast_precision_loss)]
            {
                graph.graph.neighbors(v).count() as f64 * scale
            }
        })
        .collect()
}

/// Local clustering coefficient: the fraction of a node's neighbor pairs
/// that are themselves connected.
///
/// Nodes with fewer than two neighbors score 0.0 (no pair can close a
/// triangle).
#[must_use]
pub fn clustering_coefficient(graph: &CoGraph) -> Vec<f64> {
    graph
        .graph
        .node_indices()
        .map(|v| {
            let neighbors: Vec<NodeIndex> = graph.graph.neighbors(v).collect();
            let k = neighbors.len();
            if k < 2 {
                return 0.0;
            }

            let mut closed = 0_usize;
            for (i, &a) in neighbors.iter().enumerate() {
                for &b in &neighbors[i + 1..] {
                    if graph.graph.find_edge(a, b).is_some() {
                        closed += 1;
                    }
                }
            }

            #[allow(clippy::cast_precision_loss)]
            {
                2.0 * closed as f64 / (k as f64 * (k as f64 - 1.0))
            }
        })
        .collect()
}
