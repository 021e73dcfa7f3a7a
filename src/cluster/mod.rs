// Cluster building and analysis.
//
// A cluster is a transient, per-run result: it exists only in the output
// of one clustering pass. Callers may persist a reference from each member
// back to the cluster id, but the cluster itself has no lifecycle.

pub mod analyzer;
pub mod builder;

use serde::{Deserialize, Serialize};

use crate::store::models::IdeaRecord;

pub use builder::build_clusters;

/// Tunables for one clustering run.
///
/// These are explicit parameters rather than hidden constants so callers
/// and tests can override them per run.
#[derive(Debug, Clone, Copy)]
pub struct ClusterParams {
    /// Minimum Jaccard similarity to the base record for membership
    /// (inclusive; default 0.3)
    pub similarity_threshold: f64,
    /// Smallest cluster worth emitting (default 2; singletons are
    /// always discarded)
    pub min_cluster_size: usize,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.3,
            min_cluster_size: 2,
        }
    }
}

/// One thematic group of idea records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Generated id, sequential in emission order (`cluster-1`, ...)
    pub id: String,
    /// Short label from the dominant shared keywords
    pub theme: String,
    /// Base record first, then matches in scan order
    pub members: Vec<IdeaRecord>,
    /// Composite score: size + keyword cohesion + recency. Can exceed
    /// 100 by construction; that's valid, not an error.
    pub strength: u32,
    /// Deduplicated shared keywords, first-seen order, at most five
    pub common_keywords: Vec<String>,
}
