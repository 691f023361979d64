#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use output::OutputMode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "wikinet: co-occurrence graph engine for wiki edit networks",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Build, prune, and annotate the co-occurrence graph",
        long_about = "Build the co-occurrence graph from a dump, prune it, compute one \
                      centrality metric, and emit the node/edge exchange structure.",
        after_help = "EXAMPLES:\n    # Contributor graph with defaults (degree centrality)\n    wn analyze eswiki.csv --json\n\n    # Page graph, heavier pruning, pagerank\n    wn analyze eswiki.csv --group-by pages --min-edge-weight 3 --metric pagerank\n\n    # Write the reply to a file for the visualization client\n    wn analyze eswiki.csv --json --output graph.json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Report graph shape without computing a metric",
        long_about = "Group and build the graph, prune it, and report node/edge counts and \
                      density. Cheap way to calibrate --min-edge-weight.",
        after_help = "EXAMPLES:\n    # How big is this dump's contributor graph?\n    wn stats eswiki.csv\n\n    # What survives a threshold of 5?\n    wn stats eswiki.csv --min-edge-weight 5 --json"
    )]
    Stats(cmd::stats::StatsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("WIKINET_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "wikinet=debug,info"
        } else {
            "wikinet=info,warn"
        })
    });

    let format = env::var("WIKINET_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose && !cli.quiet {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();

    match &cli.command {
        Commands::Analyze(args) => cmd::analyze::run_analyze(args, output),
        Commands::Stats(args) => cmd::stats::run_stats(args, output),
    }
}
