// Record store trait — backend-agnostic async interface.
//
// All methods are async so both sync (rusqlite via Mutex) and native async
// backends fit behind a single interface. Fetches return an owned snapshot:
// the clustering run works on its copy, so concurrent runs never share
// state and no cross-run consistency is promised.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;

use super::models::IdeaRecord;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch all records whose lifecycle status is not in `exclude_statuses`.
    /// A failed fetch is the run's single terminal error — no clustering
    /// logic executes after it.
    async fn fetch_eligible_records(
        &self,
        exclude_statuses: &HashSet<String>,
    ) -> Result<Vec<IdeaRecord>>;

    /// Same shape, scoped to one collection.
    async fn fetch_records_in_collection(&self, collection_id: &str) -> Result<Vec<IdeaRecord>>;

    /// Annotate a record with the cluster it was grouped into. Best-effort:
    /// the clustering result is already complete when this is called.
    async fn persist_cluster_reference(&self, record_id: &str, cluster_label: &str) -> Result<()>;
}
