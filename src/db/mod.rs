// Local record cache — SQLite storage for fetched ad-analysis records.
//
// We use rusqlite with the "bundled" feature so there's no system SQLite
// dependency. The database file lives wherever ADLENS_DB_PATH points
// (defaults to ./adlens.db). Records are cached so comparisons can re-run
// without hitting the scoring API again.

pub mod queries;
pub mod schema;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open (or create) the cache database and create tables.
///
/// This is the main entry point — called by `adlens init` and by any
/// command that needs cache access.
pub fn initialize(db_path: &str) -> Result<Connection> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for database: {db_path}"))?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {db_path}"))?;

    schema::create_tables(&conn)?;

    Ok(conn)
}

/// Open an existing cache database (fails if it doesn't exist yet).
pub fn open(db_path: &str) -> Result<Connection> {
    if !Path::new(db_path).exists() {
        anyhow::bail!("Database not found at {db_path}. Run `adlens init` first.");
    }

    Connection::open(db_path).with_context(|| format!("Failed to open database at {db_path}"))
}
