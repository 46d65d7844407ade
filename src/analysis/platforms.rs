// Platform suitability classifier.
//
// Maps a record's raw suitable/unsuitable platform lists onto the fixed
// canonical platform set. The source lists are free-text and not guaranteed
// mutually exclusive, so membership is case-insensitive and suitability
// takes precedence on overlap.

use serde::{Deserialize, Serialize};

use crate::model::AdAnalysisRecord;

/// The canonical platforms the dashboard reports on. Extending this set is
/// a configuration change — the classification logic doesn't care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Facebook,
    Instagram,
    LinkedIn,
    Twitter,
    Flyer,
}

impl Platform {
    /// Canonical ordering — classification output follows this, never the
    /// input lists' order.
    pub const ALL: [Platform; 5] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::LinkedIn,
        Platform::Twitter,
        Platform::Flyer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::Flyer => "Flyer",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How well a creative fits a platform. Platforms in neither source list
/// are unlisted and never surfaced, so there is no variant for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suitability {
    Suitable,
    Warning,
}

impl Suitability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suitability::Suitable => "Suitable",
            Suitability::Warning => "Warning",
        }
    }
}

/// One canonical platform's classification for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFit {
    pub platform: Platform,
    pub suitability: Suitability,
}

/// Classify a record's platform fit over the canonical set.
///
/// For each canonical platform: membership in `suitable_platforms` wins
/// over membership in `unsuitable_platforms` when both contain it; a
/// platform in neither list is omitted from the result. Output order is
/// `Platform::ALL` order regardless of input order, so two semantically
/// equivalent records classify identically.
pub fn classify(record: &AdAnalysisRecord) -> Vec<PlatformFit> {
    Platform::ALL
        .iter()
        .filter_map(|&platform| {
            let suitability = if contains_platform(&record.suitable_platforms, platform) {
                Suitability::Suitable
            } else if contains_platform(&record.unsuitable_platforms, platform) {
                Suitability::Warning
            } else {
                return None;
            };
            Some(PlatformFit {
                platform,
                suitability,
            })
        })
        .collect()
}

fn contains_platform(names: &[String], platform: Platform) -> bool {
    names
        .iter()
        .any(|name| name.trim().eq_ignore_ascii_case(platform.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(suitable: &[&str], unsuitable: &[&str]) -> AdAnalysisRecord {
        AdAnalysisRecord {
            id: "ad".to_string(),
            suitable_platforms: suitable.iter().map(|s| s.to_string()).collect(),
            unsuitable_platforms: unsuitable.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn membership_is_case_insensitive() {
        let fits = classify(&record(&["FACEBOOK", "instagram"], &["linkedin"]));
        assert_eq!(fits.len(), 3);
        assert_eq!(fits[0].platform, Platform::Facebook);
        assert_eq!(fits[0].suitability, Suitability::Suitable);
        assert_eq!(fits[2].platform, Platform::LinkedIn);
        assert_eq!(fits[2].suitability, Suitability::Warning);
    }

    #[test]
    fn suitable_wins_when_listed_in_both() {
        let fits = classify(&record(&["Twitter"], &["Twitter"]));
        assert_eq!(
            fits,
            vec![PlatformFit {
                platform: Platform::Twitter,
                suitability: Suitability::Suitable,
            }]
        );
    }

    #[test]
    fn unlisted_platforms_are_omitted() {
        let fits = classify(&record(&["Flyer"], &[]));
        assert_eq!(fits.len(), 1);
        assert_eq!(fits[0].platform, Platform::Flyer);
    }

    #[test]
    fn output_follows_canonical_order_not_input_order() {
        let shuffled = classify(&record(&["Flyer", "Facebook"], &["Twitter", "Instagram"]));
        let sorted = classify(&record(&["Facebook", "Flyer"], &["Instagram", "Twitter"]));
        assert_eq!(shuffled, sorted);
        let order: Vec<Platform> = shuffled.iter().map(|f| f.platform).collect();
        assert_eq!(
            order,
            vec![
                Platform::Facebook,
                Platform::Instagram,
                Platform::Twitter,
                Platform::Flyer
            ]
        );
    }

    #[test]
    fn non_canonical_names_are_ignored() {
        let fits = classify(&record(&["TikTok", "Myspace"], &["Billboards"]));
        assert!(fits.is_empty());
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let fits = classify(&record(&["  facebook "], &[]));
        assert_eq!(fits.len(), 1);
        assert_eq!(fits[0].platform, Platform::Facebook);
    }
}
