//! Single-dispatch analysis pipeline.
//!
//! One call runs the whole engine, statelessly: group the dump records,
//! expand them into the co-occurrence graph, prune, apply the requested
//! metric, and project the exchange structure. Nothing is retained between
//! invocations; concurrent callers may analyze the same dump file because
//! it is only ever read.
//!
//! Centrality is the CPU-heavy stage on large graphs (betweenness and
//! eigenvector especially); hosts that serve many requests should run
//! [`analyze_dump`] on a worker pool rather than a request thread.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{info, instrument};

use crate::config::MetricSettings;
use crate::dump::{self, AnonymousPolicy, GroupMode};
use crate::error::{Error, Result};
use crate::exchange::AnalysisResponse;
use crate::graph::CoGraph;
use crate::metrics::{self, MetricKind};

/// Parameters of one analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Which field groups the records (and which becomes the node set).
    pub mode: GroupMode,
    /// Edges below this co-occurrence count are pruned (strict `<`).
    pub min_edge_weight: u64,
    /// Drop anonymous members entirely.
    pub drop_anonymous: bool,
    /// Keep anonymous members but blank their label.
    pub strip_anonymous_label: bool,
    /// Which metric annotates the nodes.
    pub metric: MetricKind,
}

impl Default for AnalysisRequest {
    /// Users grouping, threshold 1 (a no-op), anonymous switches off,
    /// degree centrality.
    fn default() -> Self {
        Self {
            mode: GroupMode::Users,
            min_edge_weight: 1,
            drop_anonymous: false,
            strip_anonymous_label: false,
            metric: MetricKind::Degree,
        }
    }
}

impl AnalysisRequest {
    const fn anonymous_policy(&self) -> AnonymousPolicy {
        AnonymousPolicy {
            drop: self.drop_anonymous,
            strip_label: self.strip_anonymous_label,
        }
    }
}

/// Run the full pipeline over an already-open dump reader.
///
/// # Errors
///
/// Propagates grouping errors ([`Error::MalformedRow`]) and metric
/// convergence failures ([`Error::Convergence`]).
#[instrument(skip(reader, request, settings), fields(mode = request.mode.as_str(), metric = %request.metric))]
pub fn analyze<R: Read>(
    reader: R,
    request: &AnalysisRequest,
    settings: &MetricSettings,
) -> Result<AnalysisResponse> {
    let groups = dump::group_records(reader, request.mode, request.anonymous_policy())?;

    let mut graph = CoGraph::from_groups(&groups);
    graph.prune_edges(request.min_edge_weight);
    graph.prune_isolates();

    let summary = metrics::apply(&mut graph, request.metric, settings)?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        min = summary.min,
        max = summary.max,
        "analysis complete"
    );
    Ok(AnalysisResponse::new(&graph, summary))
}

/// Open `path` and run [`analyze`] over it.
///
/// The engine expects an already-resolved path from its caller; it does no
/// directory enumeration of its own.
///
/// # Errors
///
/// Returns [`Error::DumpRead`] if the file cannot be opened, plus everything
/// [`analyze`] can return.
pub fn analyze_dump(
    path: &Path,
    request: &AnalysisRequest,
    settings: &MetricSettings,
) -> Result<AnalysisResponse> {
    let file = File::open(path).map_err(|source| Error::DumpRead {
        path: path.to_path_buf(),
        source,
    })?;
    analyze(BufReader::new(file), request, settings)
}
