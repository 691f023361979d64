//! `wn stats` — graph shape summary without running a metric.
//!
//! Builds and prunes the graph exactly like `analyze`, then reports counts
//! before and after pruning plus edge density. Useful for picking an edge
//! weight threshold before paying for an expensive centrality run.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;

use wikinet_core::{AnonymousPolicy, CoGraph, dump};

use crate::output::{OutputMode, pretty_kv, render};

use super::GroupByArg;

/// Arguments for `wn stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Path to the `;`-delimited dump file.
    pub dump: PathBuf,

    /// Which field groups the records.
    #[arg(long, value_enum, default_value_t)]
    pub group_by: GroupByArg,

    /// Prune edges whose co-occurrence count is below this threshold.
    #[arg(long, default_value_t = 1)]
    pub min_edge_weight: u64,

    /// Drop anonymous contributors entirely.
    #[arg(long)]
    pub drop_anonymous: bool,

    /// Keep anonymous contributors but blank their label.
    #[arg(long)]
    pub strip_anonymous_label: bool,
}

/// Shape summary of a built-then-pruned graph.
#[derive(Debug, Serialize)]
struct DumpStats {
    group_by: &'static str,
    groups: usize,
    nodes_before_prune: usize,
    edges_before_prune: usize,
    min_edge_weight: u64,
    nodes: usize,
    edges: usize,
    isolates_pruned: usize,
    density: f64,
}

pub fn run_stats(args: &StatsArgs, mode: OutputMode) -> Result<()> {
    let file = File::open(&args.dump)
        .with_context(|| format!("failed to open dump {}", args.dump.display()))?;

    let group_mode = args.group_by.into();
    let groups = dump::group_records(
        BufReader::new(file),
        group_mode,
        AnonymousPolicy {
            drop: args.drop_anonymous,
            strip_label: args.strip_anonymous_label,
        },
    )
    .with_context(|| format!("failed to group records from {}", args.dump.display()))?;

    let mut graph = CoGraph::from_groups(&groups);
    let nodes_before_prune = graph.node_count();
    let edges_before_prune = graph.edge_count();

    graph.prune_edges(args.min_edge_weight);
    graph.prune_isolates();

    let stats = DumpStats {
        group_by: group_mode.as_str(),
        groups: groups.len(),
        nodes_before_prune,
        edges_before_prune,
        min_edge_weight: args.min_edge_weight,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        // Edge pruning never removes nodes, so the node delta is exactly
        // the isolates swept afterwards.
        isolates_pruned: nodes_before_prune - graph.node_count(),
        density: graph.density(),
    };

    render(mode, &stats, |s, w| {
        pretty_kv(w, "Group by", s.group_by)?;
        pretty_kv(w, "Groups", s.groups.to_string())?;
        pretty_kv(
            w,
            "Built",
            format!("{} nodes, {} edges", s.nodes_before_prune, s.edges_before_prune),
        )?;
        pretty_kv(
            w,
            "Pruned",
            format!(
                "{} nodes, {} edges (threshold {})",
                s.nodes, s.edges, s.min_edge_weight
            ),
        )?;
        pretty_kv(w, "Isolates", s.isolates_pruned.to_string())?;
        pretty_kv(w, "Density", format!("{:.4}", s.density))
    })
}
