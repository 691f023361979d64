//! `wn analyze` — run the full co-occurrence analysis pipeline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context as _, Result};
use clap::Args;
use tracing::debug;

use wikinet_core::{AnalysisRequest, EngineConfig, MetricKind, analyze_dump};

use crate::output::{OutputMode, pretty_kv, render};

use super::GroupByArg;

/// Arguments for `wn analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
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

    /// Centrality metric written to node weights.
    #[arg(long, default_value = "degree", value_parser = parse_metric)]
    pub metric: MetricKind,

    /// Write the JSON reply to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Engine config file (defaults to ./wikinet.toml when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

fn parse_metric(s: &str) -> Result<MetricKind, String> {
    MetricKind::from_str(s).map_err(|e| e.to_string())
}

/// Load engine configuration from `--config` or the default location.
pub fn load_config(flag: Option<&PathBuf>) -> Result<EngineConfig> {
    let path = flag
        .cloned()
        .unwrap_or_else(|| PathBuf::from("wikinet.toml"));
    let config = EngineConfig::load(&path)
        .with_context(|| format!("failed to load engine config from {}", path.display()))?;
    debug!(?path, "engine config resolved");
    Ok(config)
}

pub fn run_analyze(args: &AnalyzeArgs, mode: OutputMode) -> Result<()> {
    let config = load_config(args.config.as_ref())?;

    let request = AnalysisRequest {
        mode: args.group_by.into(),
        min_edge_weight: args.min_edge_weight,
        drop_anonymous: args.drop_anonymous,
        strip_anonymous_label: args.strip_anonymous_label,
        metric: args.metric,
    };

    let response = analyze_dump(&args.dump, &request, &config.metric)
        .with_context(|| format!("analysis of {} failed", args.dump.display()))?;

    if let Some(path) = args.output.as_ref() {
        let file = File::create(path)
            .with_context(|| format!("failed to create output file {}", path.display()))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, &response)?;
        writeln!(out)?;
    }

    if mode.is_json() && args.output.is_some() {
        // Reply already on disk; don't duplicate it on stdout.
        return Ok(());
    }

    render(mode, &response, |r, w| {
        pretty_kv(w, "Metric", args.metric.as_str())?;
        pretty_kv(w, "Nodes", r.node_count.to_string())?;
        pretty_kv(w, "Edges", r.edge_count.to_string())?;
        pretty_kv(w, "Min", format!("{:.6}", r.min))?;
        pretty_kv(w, "Max", format!("{:.6}", r.max))?;
        pretty_kv(w, "Rescale", &r.rescale)
    })
}
