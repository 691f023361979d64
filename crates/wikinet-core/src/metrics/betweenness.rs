//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness measures how often a node lies on shortest paths between
//! other pairs. High-betweenness contributors are the "bridges" between
//! otherwise separate editing communities.
//!
//! # Algorithm
//!
//! Brandes (2001) for unweighted undirected graphs:
//!
//! 1. BFS from each source to count shortest paths and distances.
//! 2. Accumulate dependency scores in reverse BFS order.
//! 3. Sum accumulations over all sources.
//!
//! Complexity: O(V * E). Shortest paths ignore edge weights — the
//! co-occurrence counts size edges, not path lengths.
//!
//! # Normalization
//!
//! Scores are divided by `(n - 1)(n - 2)`, which both normalizes to the
//! fraction of pairs and folds in the factor-of-two double counting from
//! running every node as a source in an undirected graph. Graphs with fewer
//! than three nodes score 0.0 everywhere.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use tracing::instrument;

use crate::graph::CoGraph;

/// Compute normalized betweenness centrality for every node.
#[must_use]
#[instrument(skip(graph))]
pub fn betweenness_centrality(graph: &CoGraph) -> Vec<f64> {
    let g = &graph.graph;
    let n = g.node_count();

    if n == 0 {
        return Vec::new();
    }
    if n < 3 {
        return vec![0.0; n];
    }

    // Node-indexed betweenness accumulator.
    let mut cb: Vec<f64> = vec![0.0; n];

    for s in g.node_indices() {
        let si = s.index();

        // Nodes in order of discovery; farthest popped first.
        let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);

        // predecessors[w] = nodes immediately preceding w on shortest paths
        // from s.
        let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];

        // sigma[t]: number of shortest paths from s to t.
        let mut sigma: Vec<f64> = vec![0.0; n];
        sigma[si] = 1.0;

        // dist[t]: distance from s to t (-1 = unvisited).
        let mut dist: Vec<i64> = vec![-1; n];
        dist[si] = 0;

        let mut queue: VecDeque<NodeIndex> = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            let vi = v.index();
            stack.push(v);

            for w in g.neighbors(v) {
                let wi = w.index();

                if dist[wi] < 0 {
                    dist[wi] = dist[vi] + 1;
                    queue.push_back(w);
                }

                if dist[wi] == dist[vi] + 1 {
                    sigma[wi] += sigma[vi];
                    predecessors[wi].push(v);
                }
            }
        }

        // Accumulate dependencies in reverse BFS order.
        let mut delta: Vec<f64> = vec![0.0; n];

        while let Some(w) = stack.pop() {
            let wi = w.index();

            for &v in &predecessors[wi] {
                let vi = v.index();
                if sigma[wi] > 0.0 {
                    delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
                }
            }

            if wi != si {
                cb[wi] += delta[wi];
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = 1.0 / ((n as f64 - 1.0) * (n as f64 - 2.0));
    for score in &mut cb {
        *score *= scale;
    }
    cb
}
