//! Engine error taxonomy with stable machine-readable codes.
//!
//! Three families of failure exist:
//!
//! - **Input errors** (`E1xxx`): the dump file cannot be read, a row is
//!   malformed, or configuration cannot be parsed. These always identify the
//!   offending path/row; malformed rows are never silently skipped.
//! - **Request errors** (`E2xxx`): the caller asked for something the engine
//!   does not provide (unknown metric name).
//! - **Computation errors** (`E3xxx`): an iterative centrality algorithm did
//!   not converge within its iteration bound. Partial or zero-filled scores
//!   are never returned in disguise.
//!
//! An empty graph after pruning is *not* an error; it serializes to empty
//! node/edge lists with `min = max = 0`.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of the analysis engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The dump file could not be opened or read.
    #[error("cannot read dump file {path}: {source}")]
    DumpRead {
        /// Path of the dump that failed to open.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dump row is missing a required field or cannot be decoded.
    #[error("malformed dump row at line {line}: {message}")]
    MalformedRow {
        /// 1-based line number within the dump (header is line 1).
        line: u64,
        /// Decoder message naming the missing/invalid field.
        message: String,
    },

    /// The engine configuration file exists but cannot be parsed.
    #[error("cannot parse config {path}: {message}")]
    ConfigParse {
        /// Path of the offending config file.
        path: PathBuf,
        /// Parser or validation message.
        message: String,
    },

    /// The requested metric name is not one of the supported kinds.
    #[error("unknown metric '{0}' (expected degree, betweenness, eigenvector, pagerank, or clustering)")]
    UnknownMetric(String),

    /// An iterative metric failed to converge within its iteration bound.
    #[error("{metric} centrality did not converge within {max_iter} iterations (tolerance {tolerance})")]
    Convergence {
        /// Name of the metric that failed.
        metric: &'static str,
        /// The iteration bound that was exhausted.
        max_iter: usize,
        /// The convergence tolerance that was never reached.
        tolerance: f64,
    },
}

impl Error {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DumpRead { .. } => "E1001",
            Self::MalformedRow { .. } => "E1002",
            Self::ConfigParse { .. } => "E1003",
            Self::UnknownMetric(_) => "E2001",
            Self::Convergence { .. } => "E3001",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::DumpRead { .. } => Some("Check that the dump path exists and is readable."),
            Self::MalformedRow { .. } => Some(
                "Every row needs page_id, page_title, contributor_id, and contributor_name \
                 separated by ';'.",
            ),
            Self::ConfigParse { .. } => Some("Fix syntax in wikinet.toml and retry."),
            Self::UnknownMetric(_) => None,
            Self::Convergence { .. } => {
                Some("Raise max_iter or loosen tolerance in the [metric] config section.")
            }
        }
    }
}
