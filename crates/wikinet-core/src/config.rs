//! Engine configuration loaded from an optional `wikinet.toml`.
//!
//! All fields have defaults, so a missing config file is equivalent to an
//! empty one. Only the tuning knobs of the iterative metrics live here; the
//! per-request parameters (group mode, threshold, metric choice) travel on
//! [`crate::pipeline::AnalysisRequest`] instead.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tuning for the iterative centrality metrics.
    #[serde(default)]
    pub metric: MetricSettings,
}

/// Iteration bounds and tolerances for eigenvector and pagerank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSettings {
    /// Maximum number of power iterations before the computation is
    /// reported as failed.
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    /// Convergence threshold on the per-iteration score delta.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Pagerank damping factor (probability of following an edge vs
    /// teleporting).
    #[serde(default = "default_damping")]
    pub damping: f64,
}

impl Default for MetricSettings {
    fn default() -> Self {
        Self {
            max_iter: default_max_iter(),
            tolerance: default_tolerance(),
            damping: default_damping(),
        }
    }
}

const fn default_max_iter() -> usize {
    100
}

const fn default_tolerance() -> f64 {
    1e-6
}

const fn default_damping() -> f64 {
    0.85
}

impl EngineConfig {
    /// Load configuration from `path`, or return defaults if the file does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the file exists but is not valid
    /// TOML, or if a value is out of range.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let m = &self.metric;
        if m.max_iter == 0 {
            return Err(Error::ConfigParse {
                path: path.to_path_buf(),
                message: "metric.max_iter must be at least 1".to_string(),
            });
        }
        if !m.tolerance.is_finite() || m.tolerance <= 0.0 {
            return Err(Error::ConfigParse {
                path: path.to_path_buf(),
                message: "metric.tolerance must be positive".to_string(),
            });
        }
        if !(0.0..1.0).contains(&m.damping) {
            return Err(Error::ConfigParse {
                path: path.to_path_buf(),
                message: "metric.damping must be in [0, 1)".to_string(),
            });
        }
        Ok(())
    }
}
