// MemoryStore — in-memory RecordStore for tests and examples.
//
// Holds a fixed snapshot in insertion order. The `unavailable` variant
// fails every fetch, for exercising the terminal-error path.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::models::IdeaRecord;
use super::traits::RecordStore;

pub struct MemoryStore {
    /// (owning collection, record), in insertion order
    records: Vec<(Option<String>, IdeaRecord)>,
    /// Cluster references written through the trait, by record id
    cluster_refs: Mutex<HashMap<String, String>>,
    available: bool,
}

impl MemoryStore {
    /// A store of loose records (no collections).
    pub fn new(records: Vec<IdeaRecord>) -> Self {
        Self::with_collections(records.into_iter().map(|r| (None, r)).collect())
    }

    /// A store with per-record collection membership.
    pub fn with_collections(records: Vec<(Option<String>, IdeaRecord)>) -> Self {
        Self {
            records,
            cluster_refs: Mutex::new(HashMap::new()),
            available: true,
        }
    }

    /// A store whose fetches always fail.
    pub fn unavailable() -> Self {
        Self {
            records: Vec::new(),
            cluster_refs: Mutex::new(HashMap::new()),
            available: false,
        }
    }

    /// Snapshot of the cluster references written so far.
    pub async fn cluster_refs(&self) -> HashMap<String, String> {
        self.cluster_refs.lock().await.clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_eligible_records(
        &self,
        exclude_statuses: &HashSet<String>,
    ) -> Result<Vec<IdeaRecord>> {
        if !self.available {
            anyhow::bail!("record store unavailable");
        }
        Ok(self
            .records
            .iter()
            .filter(|(_, record)| {
                record
                    .status()
                    .map_or(true, |status| !exclude_statuses.contains(status))
            })
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn fetch_records_in_collection(&self, collection_id: &str) -> Result<Vec<IdeaRecord>> {
        if !self.available {
            anyhow::bail!("record store unavailable");
        }
        Ok(self
            .records
            .iter()
            .filter(|(collection, _)| collection.as_deref() == Some(collection_id))
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn persist_cluster_reference(&self, record_id: &str, cluster_label: &str) -> Result<()> {
        if !self.records.iter().any(|(_, r)| r.id == record_id) {
            anyhow::bail!("no record with id {record_id}");
        }
        self.cluster_refs
            .lock()
            .await
            .insert(record_id.to_string(), cluster_label.to_string());
        Ok(())
    }
}
