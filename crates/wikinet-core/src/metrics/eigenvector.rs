//! Eigenvector centrality via power iteration.
//!
//! # Overview
//!
//! Eigenvector centrality scores nodes by the principle that connections to
//! high-scoring nodes are worth more: the scores form the principal
//! eigenvector of the adjacency matrix.
//!
//! # Algorithm
//!
//! Power iteration on the shifted matrix `A + I`:
//!
//! 1. Initialize scores uniformly at `1/√n`.
//! 2. For each node `v`: `score'(v) = score(v) + Σ score(u)` over neighbors.
//! 3. Normalize to unit L2 norm.
//! 4. Repeat until the L2 change drops below the tolerance.
//!
//! The `+ I` shift keeps the iteration from oscillating on bipartite graphs
//! (stars and paths are bipartite, and both are everyday co-occurrence
//! shapes) without changing the eigenvector.
//!
//! # Edge cases and failure
//!
//! A graph with no edges has no adjacency structure to iterate on; every
//! node gets the uniform score `1/√n`. Exhausting the iteration bound
//! without converging is a reported failure, never silent output.

use tracing::instrument;

use crate::config::MetricSettings;
use crate::error::{Error, Result};
use crate::graph::CoGraph;

/// Compute eigenvector centrality for every node.
///
/// # Errors
///
/// Returns [`Error::Convergence`] if the iteration does not reach
/// `settings.tolerance` within `settings.max_iter` iterations.
#[instrument(skip(graph, settings))]
pub fn eigenvector_centrality(graph: &CoGraph, settings: &MetricSettings) -> Result<Vec<f64>> {
    let g = &graph.graph;
    let n = g.node_count();

    if n == 0 {
        return Ok(Vec::new());
    }

    #[allow(clippy::cast_precision_loss)]
    let uniform = 1.0 / (n as f64).sqrt();
    if g.edge_count() == 0 {
        return Ok(vec![uniform; n]);
    }

    let mut scores: Vec<f64> = vec![uniform; n];

    for _ in 0..settings.max_iter {
        let mut new_scores = scores.clone();

        for v in g.node_indices() {
            let vi = v.index();
            for u in g.neighbors(v) {
                new_scores[vi] += scores[u.index()];
            }
        }

        // Normalize to unit L2 norm.
        let norm: f64 = new_scores.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut new_scores {
                *x /= norm;
            }
        }

        let diff: f64 = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt();

        scores = new_scores;

        if diff < settings.tolerance {
            return Ok(scores);
        }
    }

    Err(Error::Convergence {
        metric: "eigenvector",
        max_iter: settings.max_iter,
        tolerance: settings.tolerance,
    })
}
