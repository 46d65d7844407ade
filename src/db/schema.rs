// Cache schema — table creation.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// Idempotent — safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Fetched ad-analysis records.
        -- The full record is stored as JSON so the schema can evolve with
        -- the upstream API; the extracted columns exist for ranking and
        -- listing without deserializing every row.
        CREATE TABLE IF NOT EXISTS analysis_records (
            id TEXT PRIMARY KEY,               -- scoring API record id
            name TEXT NOT NULL DEFAULT '',
            overall_score INTEGER NOT NULL DEFAULT 0,
            record_json TEXT NOT NULL,         -- the full AdAnalysisRecord
            fetched_at TEXT NOT NULL           -- RFC 3339, set by the app
        );
        ",
    )
    .context("Failed to create cache tables")?;

    Ok(())
}

/// Count the tables in the database (used by init to confirm setup).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}
