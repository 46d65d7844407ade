// Narrative generator — prose statements over an already-computed comparison.
//
// This is template text, not generation: plain string interpolation over the
// comparator's facts. Identical inputs always produce identical strings,
// which the UI relies on when it re-renders.

use crate::analysis::compare::{ComparisonResult, Metric};
use crate::model::AdAnalysisRecord;

/// One human-readable difference with the numeric gap it describes.
///
/// The magnitude is intentionally redundant with the statement text so
/// consumers can show prose without re-deriving numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    pub statement: String,
    pub magnitude: u32,
}

/// The narrated form of a comparison: ordered difference statements plus a
/// single commentary paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    /// Always non-empty — the first entry is the overall-score gap.
    pub differences: Vec<Difference>,
    pub commentary: String,
}

/// Narrate a comparison result.
///
/// `a` and `b` must be the same records the result was computed from; the
/// narrator only reads names and raw metric values off them.
pub fn narrate(
    result: &ComparisonResult,
    a: &AdAnalysisRecord,
    b: &AdAnalysisRecord,
) -> Narrative {
    let winner = if result.winner_id == a.id { a } else { b };
    let loser = if result.winner_id == a.id { b } else { a };

    let mut differences = vec![Difference {
        statement: format!(
            "{} has a {}-point advantage in overall performance score.",
            winner.display_name(),
            result.overall_gap
        ),
        magnitude: result.overall_gap,
    }];

    for gap in &result.metric_gaps {
        let leader = if gap.leader_id == a.id { a } else { b };
        differences.push(Difference {
            statement: format!(
                "{} leads on {} ({} vs {}).",
                leader.display_name(),
                gap.metric.label(),
                gap.leader_value,
                gap.trailer_value
            ),
            magnitude: gap.magnitude,
        });
    }

    Narrative {
        commentary: commentary(result, winner, loser),
        differences,
    }
}

/// The single commentary paragraph: winner score, loser score, the winner's
/// leading strength, and the winner's confidence score.
///
/// The strength is "CTA visibility" when the winner leads (or ties) on that
/// metric, otherwise "visual clarity" — the product's wording for the
/// emotional-appeal dimension.
fn commentary(
    result: &ComparisonResult,
    winner: &AdAnalysisRecord,
    loser: &AdAnalysisRecord,
) -> String {
    let strength = if winner.cta_visibility >= loser.cta_visibility {
        "CTA visibility"
    } else {
        "visual clarity"
    };

    format!(
        "{} scores {}/100 overall against {}/100 for {}. \
         Its clearest strength is {}, and the model reports a confidence \
         score of {}/100 for this assessment.",
        winner.display_name(),
        result.winner_score,
        result.loser_score,
        loser.display_name(),
        strength,
        Metric::Confidence.value_of(winner),
    )
}
