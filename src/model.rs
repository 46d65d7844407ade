// Ad-analysis record types — Rust structs for the upstream scoring API schema.
//
// These are the types that flow through the engine. The upstream schema is
// not contractually complete, so every field is defaulted: missing numeric
// metrics read as 0, missing sequences as empty, and unknown fields are
// ignored. Producing a partial record beats rejecting one.

use serde::{Deserialize, Serialize};

/// The scored output for one ad creative, as delivered by the scoring API.
///
/// All metric fields are 0-100 integers. `suitable_platforms` and
/// `unsuitable_platforms` are nominally mutually exclusive but the source
/// doesn't guarantee it — see `analysis::platforms` for the precedence rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdAnalysisRecord {
    pub id: String,
    /// Display name for the creative. Empty when the upstream omits it;
    /// use `display_name()` rather than reading this directly.
    pub name: String,
    /// Primary ranking metric (0-100).
    pub overall_score: u32,
    pub confidence_score: u32,
    pub match_score: u32,
    pub cta_visibility: u32,
    pub emotional_appeal: u32,
    pub suitable_platforms: Vec<String>,
    pub unsuitable_platforms: Vec<String>,
    /// Ordered image references. Empty for video-only creatives.
    pub images: Vec<String>,
    /// Generated copy variants, insertion order significant — index 0 is
    /// the primary variant (the only one free-tier users see).
    pub ad_copies: Vec<AdCopy>,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AdAnalysisRecord {
    /// The name to use in narrative output: the creative's name when the
    /// upstream provided one, otherwise its id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// A single generated ad-copy variant.
///
/// `tone` is free text from the copy generator and may be compound
/// (e.g. "Friendly & Bold") — filtering matches on substrings, not equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdCopy {
    pub platform: String,
    pub tone: String,
    pub text: String,
}
