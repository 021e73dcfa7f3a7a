// Clustering pipeline: snapshot fetch → build → optional annotation write.

use std::collections::HashSet;

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::cluster::{build_clusters, Cluster, ClusterParams};
use crate::store::models::DEFAULT_EXCLUDED_STATUSES;
use crate::store::traits::RecordStore;

/// The default exclusion set for eligibility fetches.
pub fn default_exclusions() -> HashSet<String> {
    DEFAULT_EXCLUDED_STATUSES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Cluster every eligible record in the store.
///
/// Zero records is not an error — the result is simply empty.
pub async fn cluster_all(
    store: &dyn RecordStore,
    params: &ClusterParams,
    now: DateTime<Utc>,
) -> Result<Vec<Cluster>> {
    let records = store.fetch_eligible_records(&default_exclusions()).await?;
    info!(count = records.len(), "fetched eligible records");

    let clusters = build_clusters(&records, params, now);
    info!(clusters = clusters.len(), "clustering run complete");
    Ok(clusters)
}

/// Cluster the records of a single collection.
pub async fn cluster_collection(
    store: &dyn RecordStore,
    collection_id: &str,
    params: &ClusterParams,
    now: DateTime<Utc>,
) -> Result<Vec<Cluster>> {
    let records = store.fetch_records_in_collection(collection_id).await?;
    info!(
        collection = collection_id,
        count = records.len(),
        "fetched collection records"
    );

    let clusters = build_clusters(&records, params, now);
    info!(clusters = clusters.len(), "clustering run complete");
    Ok(clusters)
}

/// Write each member's cluster reference back to the store.
///
/// Best-effort: an individual write failure is logged and skipped — the
/// clustering result is already complete and correct without it. Returns
/// the number of references written.
pub async fn persist_references(store: &dyn RecordStore, clusters: &[Cluster]) -> Result<usize> {
    let mut written = 0;
    for cluster in clusters {
        for member in &cluster.members {
            match store.persist_cluster_reference(&member.id, &cluster.id).await {
                Ok(()) => written += 1,
                Err(err) => {
                    warn!(record = %member.id, cluster = %cluster.id, %err,
                        "cluster reference write failed");
                }
            }
        }
    }
    Ok(written)
}
