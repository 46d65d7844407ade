// Score comparator — winner determination and significant metric gaps.
//
// Two creatives are compared on a fixed set of metrics. A gap only counts
// as a difference when it clears the metric's threshold; near-ties are
// noise, not insight.

use crate::model::AdAnalysisRecord;

/// Minimum gap for CTA visibility and emotional appeal to be surfaced.
pub const VISUAL_GAP_THRESHOLD: u32 = 10;

/// Minimum gap for confidence score to be surfaced. Confidence moves in a
/// narrower band than the visual metrics, so its threshold is tighter.
pub const CONFIDENCE_GAP_THRESHOLD: u32 = 5;

/// The fixed set of secondary metrics compared between two records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    CtaVisibility,
    EmotionalAppeal,
    Confidence,
}

impl Metric {
    /// All comparable metrics, in the order gaps are reported.
    pub const ALL: [Metric; 3] = [
        Metric::CtaVisibility,
        Metric::EmotionalAppeal,
        Metric::Confidence,
    ];

    /// The gap below which this metric is excluded from the differences.
    pub fn threshold(&self) -> u32 {
        match self {
            Metric::CtaVisibility | Metric::EmotionalAppeal => VISUAL_GAP_THRESHOLD,
            Metric::Confidence => CONFIDENCE_GAP_THRESHOLD,
        }
    }

    /// Human-readable metric name for narrative statements.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::CtaVisibility => "CTA visibility",
            Metric::EmotionalAppeal => "emotional appeal",
            Metric::Confidence => "confidence score",
        }
    }

    /// Read this metric's value off a record.
    pub fn value_of(&self, record: &AdAnalysisRecord) -> u32 {
        match self {
            Metric::CtaVisibility => record.cta_visibility,
            Metric::EmotionalAppeal => record.emotional_appeal,
            Metric::Confidence => record.confidence_score,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A significant gap on one metric between the two compared records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricGap {
    pub metric: Metric,
    /// Absolute difference between the two values.
    pub magnitude: u32,
    /// Id of the record with the higher value on this metric.
    pub leader_id: String,
    /// The higher of the two values.
    pub leader_value: u32,
    /// The lower of the two values.
    pub trailer_value: u32,
}

/// The derived outcome of comparing two records. Ephemeral — recomputed
/// whenever either input changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    /// Id of the record with the higher overall score. An exact tie
    /// resolves to the first argument of `compare` — see its doc comment.
    pub winner_id: String,
    pub winner_score: u32,
    pub loser_score: u32,
    /// Absolute overall-score difference (0 on a tie).
    pub overall_gap: u32,
    /// Significant secondary-metric gaps, in `Metric::ALL` order.
    /// Sub-threshold gaps are excluded entirely.
    pub metric_gaps: Vec<MetricGap>,
}

/// Compare two ad-analysis records.
///
/// The winner is the record with the strictly higher overall score; on an
/// exact tie the winner is `a`. This tie-break is deliberate and matches
/// product behavior: the first-compared side wins.
///
/// Pure and idempotent — never mutates its inputs, and identical inputs
/// always produce identical output.
pub fn compare(a: &AdAnalysisRecord, b: &AdAnalysisRecord) -> ComparisonResult {
    let a_wins = a.overall_score >= b.overall_score;
    let (winner, loser) = if a_wins { (a, b) } else { (b, a) };

    let metric_gaps = Metric::ALL
        .iter()
        .filter_map(|&metric| {
            let va = metric.value_of(a);
            let vb = metric.value_of(b);
            let magnitude = va.abs_diff(vb);
            if magnitude < metric.threshold() {
                return None;
            }
            // On a metric tie the gap is below every threshold, so the
            // leader is always strict here
            let leader = if va > vb { a } else { b };
            Some(MetricGap {
                metric,
                magnitude,
                leader_id: leader.id.clone(),
                leader_value: va.max(vb),
                trailer_value: va.min(vb),
            })
        })
        .collect();

    ComparisonResult {
        winner_id: winner.id.clone(),
        winner_score: winner.overall_score,
        loser_score: loser.overall_score,
        overall_gap: a.overall_score.abs_diff(b.overall_score),
        metric_gaps,
    }
}

/// Compare two records only when both are actually present.
///
/// While either side is still loading (or failed to load), the comparison
/// is withheld entirely — comparing against a zero-valued stand-in would
/// fabricate a winner. Callers render "comparison unavailable" on `None`.
pub fn try_compare(
    a: Option<&AdAnalysisRecord>,
    b: Option<&AdAnalysisRecord>,
) -> Option<ComparisonResult> {
    match (a, b) {
        (Some(a), Some(b)) => Some(compare(a, b)),
        _ => None,
    }
}
