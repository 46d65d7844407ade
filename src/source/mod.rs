// Record source — where ad-analysis records come from.
//
// The engine itself never fetches anything; it is handed already-parsed
// records. This module is the seam where those records are obtained: an
// async trait so the CLI's HTTP client and the tests' mock source are
// interchangeable.

pub mod http;

use anyhow::Result;
use async_trait::async_trait;

use crate::model::AdAnalysisRecord;

/// Trait for fetching ad-analysis records by id. Implementations are async
/// because the real source is a remote scoring API.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch a single record by id.
    async fn fetch_record(&self, id: &str) -> Result<AdAnalysisRecord>;
}

/// Fetch both sides of a comparison concurrently.
///
/// The comparison pair is all-or-nothing: if either fetch fails, the whole
/// call fails and no partial pair is returned. Comparing one real record
/// against a placeholder would fabricate a winner, so a half-resolved pair
/// is treated as no pair at all.
pub async fn fetch_pair(
    source: &dyn RecordSource,
    id_a: &str,
    id_b: &str,
) -> Result<(AdAnalysisRecord, AdAnalysisRecord)> {
    let (a, b) = futures::try_join!(source.fetch_record(id_a), source.fetch_record(id_b))?;
    Ok((a, b))
}
