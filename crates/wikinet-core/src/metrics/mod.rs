//! Centrality metrics for the co-occurrence graph.
//!
//! # Overview
//!
//! Exactly one metric runs per analysis request. Each computes a real-valued
//! score per node; [`apply`] writes the score into the node's `weight` field
//! and reduces the global minimum/maximum over all nodes as it goes.
//!
//! - **Degree centrality** (`basic`): how many collaborators, normalized.
//! - **Local clustering** (`basic`): how interconnected a node's
//!   collaborators are among themselves.
//! - **Betweenness centrality** (`betweenness`): which nodes bridge
//!   otherwise-distant parts of the network.
//! - **Eigenvector centrality** (`eigenvector`): connection to other
//!   high-scoring nodes.
//! - **Pagerank** (`pagerank`): stationary distribution of a damped random
//!   walk over the weighted edges.
//!
//! The iterative metrics (eigenvector, pagerank) take bounds from
//! [`MetricSettings`] and report [`Error::Convergence`] when exhausted —
//! never silent zero-filled output.

pub mod basic;
pub mod betweenness;
pub mod eigenvector;
pub mod pagerank;

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::config::MetricSettings;
use crate::error::{Error, Result};
use crate::graph::CoGraph;

/// The centrality-style metrics the engine can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricKind {
    /// Degree centrality, normalized by `n - 1`.
    #[default]
    Degree,
    /// Betweenness centrality over unweighted shortest paths.
    Betweenness,
    /// Eigenvector centrality via power iteration.
    Eigenvector,
    /// Damped random-walk pagerank.
    Pagerank,
    /// Local clustering coefficient.
    Clustering,
}

impl MetricKind {
    /// Canonical name used in logs, errors, and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Betweenness => "betweenness",
            Self::Eigenvector => "eigenvector",
            Self::Pagerank => "pagerank",
            Self::Clustering => "clustering",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    /// Parse a metric name. `betweennes` (the historical request-parameter
    /// spelling) is accepted as an alias.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "degree" => Ok(Self::Degree),
            "betweenness" | "betweennes" => Ok(Self::Betweenness),
            "eigenvector" => Ok(Self::Eigenvector),
            "pagerank" => Ok(Self::Pagerank),
            "clustering" => Ok(Self::Clustering),
            other => Err(Error::UnknownMetric(other.to_string())),
        }
    }
}

/// Global extrema of the metric values written to the graph.
///
/// `(0, 0)` for an empty graph; consumers use these to linearly rescale
/// node sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricSummary {
    /// Smallest per-node metric value.
    pub min: f64,
    /// Largest per-node metric value.
    pub max: f64,
}

/// Compute `kind` for every node, write scores into node weights, and
/// return the global extrema.
///
/// # Errors
///
/// Returns [`Error::Convergence`] if an iterative metric exhausts
/// `settings.max_iter` without reaching `settings.tolerance`.
#[instrument(skip(graph, settings), fields(metric = %kind))]
pub fn apply(
    graph: &mut CoGraph,
    kind: MetricKind,
    settings: &MetricSettings,
) -> Result<MetricSummary> {
    let scores = match kind {
        MetricKind::Degree => basic::degree_centrality(graph),
        MetricKind::Clustering => basic::clustering_coefficient(graph),
        MetricKind::Betweenness => betweenness::betweenness_centrality(graph),
        MetricKind::Eigenvector => eigenvector::eigenvector_centrality(graph, settings)?,
        MetricKind::Pagerank => pagerank::pagerank(graph, settings)?,
    };

    let summary = write_scores(graph, &scores);
    debug!(min = summary.min, max = summary.max, "metric applied");
    Ok(summary)
}

/// Write per-node scores (indexed by node position) into the graph and
/// reduce the running extrema. Explicitly `(0, 0)` on an empty node set —
/// no sentinel initial values leak out.
fn write_scores(graph: &mut CoGraph, scores: &[f64]) -> MetricSummary {
    debug_assert_eq!(scores.len(), graph.node_count());

    let mut extrema: Option<(f64, f64)> = None;
    for idx in graph.graph.node_indices() {
        let score = scores[idx.index()];
        graph.graph[idx].weight = score;
        extrema = Some(match extrema {
            None => (score, score),
            Some((lo, hi)) => (lo.min(score), hi.max(score)),
        });
    }

    extrema.map_or_else(MetricSummary::default, |(min, max)| MetricSummary {
        min,
        max,
    })
}
