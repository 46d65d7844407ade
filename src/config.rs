use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Base URL of the remote scoring API (ADLENS_API_URL). Empty when
    /// unset — offline commands work from the local cache alone.
    pub api_url: String,
    pub db_path: String,
    /// Whether the current account is on the paid tier (ADLENS_TIER=paid).
    /// Resolved here once and passed into the engine as a plain flag — the
    /// pure functions never read ambient state themselves.
    pub paid_tier: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only db_path has a default — the API URL is required for anything
    /// that fetches records.
    pub fn load() -> Result<Self> {
        let paid_tier = matches!(env::var("ADLENS_TIER").as_deref(), Ok("paid"));

        Ok(Self {
            api_url: env::var("ADLENS_API_URL").unwrap_or_default(),
            db_path: env::var("ADLENS_DB_PATH").unwrap_or_else(|_| "./adlens.db".to_string()),
            paid_tier,
        })
    }

    /// Check that the scoring API URL is configured.
    /// Call this before any operation that fetches records remotely.
    pub fn require_api(&self) -> Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!(
                "ADLENS_API_URL not set. Add it to your .env file to enable\n\
                 fetching — cached records remain available without it."
            );
        }
        Ok(())
    }
}
