// Tiered content gate — which generated copy variants a user gets to see.
//
// Free tier sees at most the primary variant and the tone selector is
// inert. Paid tier sees everything, optionally narrowed by a tone filter.

use crate::model::{AdAnalysisRecord, AdCopy};

/// Sentinel tone filter meaning "no filtering" (compared case-insensitively).
pub const TONE_ALL: &str = "all";

/// Select the copy variants visible at the given tier and tone filter.
///
/// - Free tier: the first variant only (or nothing when the record has no
///   copies), regardless of `tone_filter` — including the `TONE_ALL`
///   sentinel. The selector is deliberately ignored rather than validated.
/// - Paid tier with `TONE_ALL`: the full list, insertion order preserved.
/// - Paid tier with a specific tone: variants whose tone contains the
///   filter as a case-insensitive substring. Tones are free text and often
///   compound ("Friendly & Bold"), so partial match is the contract. An
///   empty result is a valid empty state, not an error.
pub fn select_copies<'a>(
    record: &'a AdAnalysisRecord,
    paid_tier: bool,
    tone_filter: &str,
) -> Vec<&'a AdCopy> {
    if !paid_tier {
        return record.ad_copies.first().into_iter().collect();
    }

    if tone_filter.eq_ignore_ascii_case(TONE_ALL) {
        return record.ad_copies.iter().collect();
    }

    let needle = tone_filter.to_lowercase();
    record
        .ad_copies
        .iter()
        .filter(|copy| copy.tone.to_lowercase().contains(&needle))
        .collect()
}
