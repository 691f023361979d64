//! Pagerank over the weighted co-occurrence graph.
//!
//! # Overview
//!
//! Pagerank is the stationary distribution of a damped random walk: from a
//! node, with probability `damping` the walker follows an incident edge
//! (chosen proportionally to its co-occurrence weight), otherwise it
//! teleports to a uniformly random node.
//!
//! # Algorithm
//!
//! Standard power method:
//!
//! ```text
//! PR(v) = (1 - d) / N + d * ( Σ PR(u) * w(u,v) / strength(u)  +  D / N )
//! ```
//!
//! over neighbors `u` of `v`, where `strength(u)` is the sum of `u`'s
//! incident edge weights and `D` is the rank mass sitting on dangling
//! (edgeless) nodes, redistributed uniformly. Iteration stops when the L1
//! norm of the rank delta drops below the tolerance.
//!
//! # Edge cases and failure
//!
//! An edgeless graph gets the uniform distribution `1/n`. Exhausting the
//! iteration bound is a reported failure with the bound attached.

use petgraph::visit::EdgeRef;
use tracing::instrument;

use crate::config::MetricSettings;
use crate::error::{Error, Result};
use crate::graph::CoGraph;

/// Compute pagerank scores for every node. Scores sum to 1.
///
/// # Errors
///
/// Returns [`Error::Convergence`] if the iteration does not reach
/// `settings.tolerance` within `settings.max_iter` iterations.
#[instrument(skip(graph, settings))]
pub fn pagerank(graph: &CoGraph, settings: &MetricSettings) -> Result<Vec<f64>> {
    let g = &graph.graph;
    let n = g.node_count();

    if n == 0 {
        return Ok(Vec::new());
    }

    #[allow(clippy::cast_precision_loss)]
    let n_f64 = n as f64;
    if g.edge_count() == 0 {
        return Ok(vec![1.0 / n_f64; n]);
    }

    // Total incident edge weight per node; 0 marks a dangling node.
    #[allow(clippy::cast_precision_loss)]
    let strength: Vec<f64> = g
        .node_indices()
        .map(|v| g.edges(v).map(|e| *e.weight() as f64).sum())
        .collect();

    let damping = settings.damping;
    let base = (1.0 - damping) / n_f64;

    let mut ranks = vec![1.0 / n_f64; n];

    for _ in 0..settings.max_iter {
        let dangling: f64 = g
            .node_indices()
            .filter(|v| strength[v.index()] == 0.0)
            .map(|v| ranks[v.index()])
            .sum();
        let dangling_share = damping * dangling / n_f64;

        let mut new_ranks = vec![base + dangling_share; n];

        for v in g.node_indices() {
            let vi = v.index();
            for edge in g.edges(v) {
                let u = edge.target();
                #[allow(clippy::cast_precision_loss)]
                let w = *edge.weight() as f64;
                new_ranks[u.index()] += damping * ranks[vi] * w / strength[vi];
            }
        }

        let l1: f64 = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();

        ranks = new_ranks;

        if l1 < settings.tolerance {
            return Ok(ranks);
        }
    }

    Err(Error::Convergence {
        metric: "pagerank",
        max_iter: settings.max_iter,
        tolerance: settings.tolerance,
    })
}
