// SqliteStore — rusqlite backend implementing the RecordStore trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is
// !Send. Trait methods lock the mutex, do synchronous rusqlite work, and
// return. The lock is never held across .await points — Rust enforces
// this because MutexGuard is !Send.
//
// Snapshot ordering is insertion order (rowid), so repeated fetches of an
// unchanged store feed the order-sensitive cluster builder identically.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, params_from_iter, Connection, Row};
use tokio::sync::Mutex;
use tracing::warn;

use super::models::{IdeaRecord, STATUS_PROPERTY};
use super::schema;
use super::traits::RecordStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .with_context(|| format!("opening record store at {}", path.as_ref().display()))?;
        schema::create_tables(&conn)?;
        Ok(Self::new(conn))
    }

    /// Insert a new record. Used by the capture surface, not the core.
    pub async fn insert_record(
        &self,
        record: &IdeaRecord,
        collection: Option<&str>,
    ) -> Result<()> {
        let conn = self.conn.lock().await;
        insert_record(&conn, record, collection)
    }

    /// Total number of stored records.
    pub async fn record_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        let count = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Number of records carrying a cluster reference.
    pub async fn clustered_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM records WHERE cluster_ref IS NOT NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Count of user-created tables, for the status/init commands.
    pub async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        schema::table_count(&conn)
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn fetch_eligible_records(
        &self,
        exclude_statuses: &HashSet<String>,
    ) -> Result<Vec<IdeaRecord>> {
        let conn = self.conn.lock().await;
        fetch_eligible_records(&conn, exclude_statuses)
    }

    async fn fetch_records_in_collection(&self, collection_id: &str) -> Result<Vec<IdeaRecord>> {
        let conn = self.conn.lock().await;
        fetch_records_in_collection(&conn, collection_id)
    }

    async fn persist_cluster_reference(&self, record_id: &str, cluster_label: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        persist_cluster_reference(&conn, record_id, cluster_label)
    }
}

fn fetch_eligible_records(
    conn: &Connection,
    exclude_statuses: &HashSet<String>,
) -> Result<Vec<IdeaRecord>> {
    if exclude_statuses.is_empty() {
        let mut stmt = conn.prepare(
            "SELECT id, content, created_at, status, properties FROM records ORDER BY rowid",
        )?;
        let records = stmt
            .query_map([], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        return Ok(records);
    }

    let placeholders = vec!["?"; exclude_statuses.len()].join(", ");
    let sql = format!(
        "SELECT id, content, created_at, status, properties FROM records \
         WHERE status NOT IN ({placeholders}) ORDER BY rowid"
    );
    let mut stmt = conn.prepare(&sql)?;
    let records = stmt
        .query_map(params_from_iter(exclude_statuses.iter()), row_to_record)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(records)
}

fn fetch_records_in_collection(conn: &Connection, collection_id: &str) -> Result<Vec<IdeaRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, content, created_at, status, properties FROM records \
         WHERE collection = ?1 ORDER BY rowid",
    )?;
    let records = stmt
        .query_map(params![collection_id], row_to_record)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(records)
}

fn persist_cluster_reference(
    conn: &Connection,
    record_id: &str,
    cluster_label: &str,
) -> Result<()> {
    let changed = conn.execute(
        "UPDATE records SET cluster_ref = ?1 WHERE id = ?2",
        params![cluster_label, record_id],
    )?;
    if changed == 0 {
        anyhow::bail!("no record with id {record_id}");
    }
    Ok(())
}

fn insert_record(conn: &Connection, record: &IdeaRecord, collection: Option<&str>) -> Result<()> {
    let properties_json = serde_json::to_string(&record.properties)?;
    conn.execute(
        "INSERT INTO records (id, content, created_at, status, collection, properties) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.id,
            record.content,
            record.created_at.map(|t| t.to_rfc3339()),
            record.status().unwrap_or("captured"),
            collection,
            properties_json,
        ],
    )?;
    Ok(())
}

/// Map a row to an IdeaRecord.
///
/// NULL content degrades to an empty string (and therefore an empty
/// keyword set downstream); an unparseable timestamp degrades to None.
/// Neither fails the fetch.
fn row_to_record(row: &Row<'_>) -> rusqlite::Result<IdeaRecord> {
    let id: String = row.get("id")?;
    let content: Option<String> = row.get("content")?;
    let created_at_raw: Option<String> = row.get("created_at")?;
    let status: String = row.get("status")?;
    let properties_json: Option<String> = row.get("properties")?;

    let created_at = created_at_raw.and_then(|raw| match DateTime::parse_from_rfc3339(&raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(err) => {
            warn!(record = %id, %err, "unparseable created_at, treating as absent");
            None
        }
    });

    let mut properties: HashMap<String, String> = properties_json
        .as_deref()
        .and_then(|json| serde_json::from_str(json).ok())
        .unwrap_or_default();
    properties.insert(STATUS_PROPERTY.to_string(), status);

    Ok(IdeaRecord {
        id,
        content: content.unwrap_or_default(),
        created_at,
        properties,
    })
}
