//! The node/edge exchange structure consumed by the visualization client.
//!
//! # Overview
//!
//! [`ExchangeGraph::project`] is a pure projection: every graph node becomes
//! one entry in `nodes`, every edge one entry in `edges`, nothing is added
//! or dropped. The metric extrema are broadcast onto every node as
//! `min_weight`/`max_weight` so the client can linearly rescale visual size
//! without a second pass.
//!
//! # Edge identifiers
//!
//! Edge ids are `"{source}|{target}"`. Bare concatenation of endpoint ids
//! would collide ("1"+"23" == "12"+"3"); the delimiter keeps composite keys
//! distinct for distinct pairs.

use serde::{Deserialize, Serialize};

use crate::graph::CoGraph;
use crate::metrics::MetricSummary;

/// One node entry in the exchange structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeNode {
    /// Entity id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Metric value for this node.
    pub weight: f64,
    /// Global minimum metric value (same on every node).
    pub min_weight: f64,
    /// Global maximum metric value (same on every node).
    pub max_weight: f64,
}

/// One edge entry in the exchange structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeEdge {
    /// Delimiter-composite id, unique per endpoint pair.
    pub id: String,
    /// Entity id of one endpoint.
    pub source: String,
    /// Entity id of the other endpoint.
    pub target: String,
    /// Co-occurrence count.
    pub weight: u64,
}

/// Node/edge lists in graph insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeGraph {
    /// All nodes of the annotated graph.
    pub nodes: Vec<ExchangeNode>,
    /// All edges of the annotated graph.
    pub edges: Vec<ExchangeEdge>,
}

impl ExchangeGraph {
    /// Project an annotated graph and its metric extrema into the exchange
    /// structure.
    #[must_use]
    pub fn project(graph: &CoGraph, summary: MetricSummary) -> Self {
        let nodes = graph
            .graph
            .node_indices()
            .map(|idx| {
                let node = &graph.graph[idx];
                ExchangeNode {
                    id: node.id.clone(),
                    label: node.label.clone(),
                    weight: node.weight,
                    min_weight: summary.min,
                    max_weight: summary.max,
                }
            })
            .collect();

        let edges = graph
            .graph
            .edge_indices()
            .filter_map(|e| {
                let (a, b) = graph.graph.edge_endpoints(e)?;
                let weight = *graph.graph.edge_weight(e)?;
                let source = graph.graph[a].id.clone();
                let target = graph.graph[b].id.clone();
                Some(ExchangeEdge {
                    id: format!("{source}|{target}"),
                    source,
                    target,
                    weight,
                })
            })
            .collect();

        Self { nodes, edges }
    }
}

/// Full reply for one analysis request: the exchange graph plus the
/// request-scoped summary the client renders alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// The projected node/edge lists.
    pub result: ExchangeGraph,
    /// Node count of the annotated graph.
    pub node_count: usize,
    /// Edge count of the annotated graph.
    pub edge_count: usize,
    /// Global minimum metric value.
    pub min: f64,
    /// Global maximum metric value.
    pub max: f64,
    /// Client-side linear rescale expression derived from the extrema.
    pub rescale: String,
}

impl AnalysisResponse {
    /// Assemble the reply from an annotated graph and its metric extrema.
    #[must_use]
    pub fn new(graph: &CoGraph, summary: MetricSummary) -> Self {
        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            min: summary.min,
            max: summary.max,
            rescale: format!("mapData(weight, {}, {}, 2, 10)", summary.min, summary.max),
            result: ExchangeGraph::project(graph, summary),
        }
    }
}
