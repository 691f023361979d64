#![forbid(unsafe_code)]
//! wikinet-core: co-occurrence graph construction and analysis.
//!
//! Turns grouped edit records (editor ↔ page events from a `;`-delimited
//! wiki dump) into a weighted undirected co-occurrence graph, prunes it to a
//! signal-bearing subgraph, annotates every node with one centrality-style
//! metric, and projects the result into a node/edge exchange structure for a
//! visualization client.
//!
//! The pipeline runs once per analysis request, statelessly:
//!
//! ```text
//! dump::group_records → CoGraph::from_groups → prune_edges → prune_isolates
//!     → metrics::apply → ExchangeGraph::project
//! ```
//!
//! # Conventions
//!
//! - **Errors**: library code returns [`error::Error`] via [`error::Result`];
//!   binaries wrap with `anyhow::Context`.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod config;
pub mod dump;
pub mod error;
pub mod exchange;
pub mod graph;
pub mod metrics;
pub mod pipeline;

pub use config::{EngineConfig, MetricSettings};
pub use dump::{AnonymousPolicy, GroupMode, Groups};
pub use error::{Error, Result};
pub use exchange::{AnalysisResponse, ExchangeGraph};
pub use graph::CoGraph;
pub use metrics::{MetricKind, MetricSummary};
pub use pipeline::{AnalysisRequest, analyze, analyze_dump};
