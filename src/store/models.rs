// Data models — the record shape that flows through the pipeline.
//
// IdeaRecord is owned by the record store; the core only reads it for the
// duration of one clustering run. The struct is separate from the store
// adapters so the pure clustering code has no rusqlite dependency.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Property key holding a record's lifecycle status.
pub const STATUS_PROPERTY: &str = "status";

/// Statuses excluded from clustering by default. Ideas promoted to a
/// project have left the seed pool and shouldn't be re-grouped.
pub const DEFAULT_EXCLUDED_STATUSES: &[&str] = &["project"];

/// One captured idea note, as supplied by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaRecord {
    /// Immutable identity, assigned by the store
    pub id: String,
    /// Raw note text. A record whose stored content was missing surfaces
    /// here as an empty string and simply extracts no keywords.
    pub content: String,
    /// Capture timestamp; records without one contribute nothing to
    /// recency scoring but still count as cluster members.
    pub created_at: Option<DateTime<Utc>>,
    /// Open-ended annotations, including the lifecycle status
    /// ("captured" / "questioning" / "developed" / "project").
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl IdeaRecord {
    /// The record's lifecycle status, if one is set.
    pub fn status(&self) -> Option<&str> {
        self.properties.get(STATUS_PROPERTY).map(String::as_str)
    }
}
