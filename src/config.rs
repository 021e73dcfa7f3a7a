use std::env;

use anyhow::{Context, Result};

use crate::cluster::ClusterParams;
use crate::merge::MergeParams;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// tunable has the stock default, so an empty environment just works;
/// CLI flags override whatever is loaded here.
pub struct Config {
    pub db_path: String,
    /// Minimum similarity for cluster membership (default 0.3)
    pub similarity_threshold: f64,
    /// Smallest cluster worth emitting (default 2)
    pub min_cluster_size: usize,
    /// Strict lower bound for merge suggestions (default 0.6)
    pub merge_threshold: f64,
    /// Maximum merge suggestions per run (default 5)
    pub merge_limit: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            db_path: env::var("SEEDBED_DB_PATH").unwrap_or_else(|_| "./seedbed.db".to_string()),
            similarity_threshold: parse_env("SEEDBED_SIMILARITY_THRESHOLD", 0.3)?,
            min_cluster_size: parse_env("SEEDBED_MIN_CLUSTER_SIZE", 2)?,
            merge_threshold: parse_env("SEEDBED_MERGE_THRESHOLD", 0.6)?,
            merge_limit: parse_env("SEEDBED_MERGE_LIMIT", 5)?,
        })
    }

    /// Cluster tunables from this config.
    pub fn cluster_params(&self) -> ClusterParams {
        ClusterParams {
            similarity_threshold: self.similarity_threshold,
            min_cluster_size: self.min_cluster_size,
        }
    }

    /// Merge tunables from this config.
    pub fn merge_params(&self) -> MergeParams {
        MergeParams {
            pair_threshold: self.merge_threshold,
            limit: self.merge_limit,
        }
    }
}

/// Read and parse an env var, falling back to `default` when unset.
/// An unparseable value is an error, not a silent fallback.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw}")),
        Err(_) => Ok(default),
    }
}
