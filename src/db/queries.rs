// Cache queries — CRUD operations for stored analysis records.
//
// Every database interaction goes through this module. SQL stays contained
// here and the rest of the app gets clean Rust interfaces.

use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::model::AdAnalysisRecord;

/// A row in the cached-record listing (no full payload).
#[derive(Debug, Clone)]
pub struct CachedRecordSummary {
    pub id: String,
    pub name: String,
    pub overall_score: u32,
    pub fetched_at: String,
}

/// Save or refresh a fetched record (upsert by id).
pub fn upsert_record(conn: &Connection, record: &AdAnalysisRecord) -> Result<()> {
    let json = serde_json::to_string(record)?;
    let fetched_at = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO analysis_records (id, name, overall_score, record_json, fetched_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
            name = ?2,
            overall_score = ?3,
            record_json = ?4,
            fetched_at = ?5",
        params![record.id, record.name, record.overall_score, json, fetched_at],
    )?;
    Ok(())
}

/// Load a cached record by id.
pub fn get_record(conn: &Connection, id: &str) -> Result<Option<AdAnalysisRecord>> {
    let mut stmt = conn.prepare("SELECT record_json FROM analysis_records WHERE id = ?1")?;
    let json: Option<String> = stmt.query_row(params![id], |row| row.get(0)).optional()?;

    match json {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// List cached records ranked by overall score (highest first).
pub fn list_records(conn: &Connection) -> Result<Vec<CachedRecordSummary>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, overall_score, fetched_at
         FROM analysis_records
         ORDER BY overall_score DESC, id ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(CachedRecordSummary {
            id: row.get(0)?,
            name: row.get(1)?,
            overall_score: row.get(2)?,
            fetched_at: row.get(3)?,
        })
    })?;

    let mut summaries = Vec::new();
    for row in rows {
        summaries.push(row?);
    }
    Ok(summaries)
}

/// Number of cached records.
pub fn record_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM analysis_records", [], |row| row.get(0))?;
    Ok(count)
}
