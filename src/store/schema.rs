// Database schema — table creation for the SQLite record store.

use anyhow::Result;
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// This is idempotent — safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for future migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Captured idea records
        CREATE TABLE IF NOT EXISTS records (
            id TEXT PRIMARY KEY,
            content TEXT,                      -- may be NULL for malformed imports
            created_at TEXT,                   -- RFC 3339 capture timestamp
            status TEXT NOT NULL DEFAULT 'captured',
            collection TEXT,                   -- owning page/collection, NULL for loose notes
            properties TEXT,                   -- JSON map of open-ended annotations
            cluster_ref TEXT                   -- last cluster id this record was grouped into
        );

        -- Index for the status exclusion filter
        CREATE INDEX IF NOT EXISTS idx_records_status
            ON records(status);

        -- Index for per-collection fetches
        CREATE INDEX IF NOT EXISTS idx_records_collection
            ON records(collection);

        INSERT OR IGNORE INTO schema_version (version) VALUES (1);
        ",
    )?;
    Ok(())
}

/// Count the number of user-created tables in the database.
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}
