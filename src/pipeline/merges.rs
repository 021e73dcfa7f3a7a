// Merge-suggestion pipeline: independent pass over the same snapshot shape.

use anyhow::Result;
use tracing::info;

use crate::merge::{self, MergeOpportunity, MergeParams};
use crate::store::traits::RecordStore;

use super::clustering::default_exclusions;

/// Suggest merge candidates across all eligible records.
///
/// Entirely independent of clustering: a suggested pair may share a
/// cluster, span two clusters, or belong to none.
pub async fn suggest_merges(
    store: &dyn RecordStore,
    params: &MergeParams,
) -> Result<Vec<MergeOpportunity>> {
    let records = store.fetch_eligible_records(&default_exclusions()).await?;
    info!(count = records.len(), "fetched eligible records");

    let opportunities = merge::suggest_merges(&records, params);
    info!(
        opportunities = opportunities.len(),
        "merge suggestion run complete"
    );
    Ok(opportunities)
}
