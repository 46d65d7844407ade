// Unit tests for the tiered content gate and the carousel state machine.

use adlens::analysis::copygate::{select_copies, TONE_ALL};
use adlens::carousel::{Carousel, CarouselSet};
use adlens::model::{AdAnalysisRecord, AdCopy};

fn record_with_tones(tones: &[&str]) -> AdAnalysisRecord {
    AdAnalysisRecord {
        id: "ad".to_string(),
        ad_copies: tones
            .iter()
            .enumerate()
            .map(|(i, tone)| AdCopy {
                platform: "Facebook".to_string(),
                tone: tone.to_string(),
                text: format!("variant {i}"),
            })
            .collect(),
        ..Default::default()
    }
}

// ============================================================
// Tier gating
// ============================================================

#[test]
fn free_tier_never_returns_more_than_one_variant() {
    let record = record_with_tones(&["Friendly", "Bold", "Professional"]);
    for tone in [TONE_ALL, "friendly", "bold", "nonsense", ""] {
        assert!(select_copies(&record, false, tone).len() <= 1);
    }
}

#[test]
fn free_tier_returns_the_insertion_order_primary() {
    let record = record_with_tones(&["Professional", "Friendly"]);
    let copies = select_copies(&record, false, TONE_ALL);
    assert_eq!(copies[0].tone, "Professional");
}

#[test]
fn free_tier_empty_copies_yields_empty_list() {
    let record = record_with_tones(&[]);
    assert!(select_copies(&record, false, TONE_ALL).is_empty());
}

#[test]
fn paid_tier_show_all_returns_everything_in_order() {
    let record = record_with_tones(&["Friendly", "Bold", "Professional"]);
    let copies = select_copies(&record, true, TONE_ALL);
    let tones: Vec<&str> = copies.iter().map(|c| c.tone.as_str()).collect();
    assert_eq!(tones, vec!["Friendly", "Bold", "Professional"]);
}

#[test]
fn show_all_sentinel_is_case_insensitive() {
    let record = record_with_tones(&["Friendly", "Bold"]);
    assert_eq!(select_copies(&record, true, "All").len(), 2);
    assert_eq!(select_copies(&record, true, "ALL").len(), 2);
}

// ============================================================
// Tone substring matching
// ============================================================

#[test]
fn tone_filter_matches_compound_tones_case_insensitively() {
    let record = record_with_tones(&["Friendly", "Bold & Friendly", "Professional"]);
    let copies = select_copies(&record, true, "friendly");
    let tones: Vec<&str> = copies.iter().map(|c| c.tone.as_str()).collect();
    assert_eq!(tones, vec!["Friendly", "Bold & Friendly"]);
}

#[test]
fn tone_filter_is_substring_not_exact() {
    let record = record_with_tones(&["Ultra-Professional"]);
    assert_eq!(select_copies(&record, true, "professional").len(), 1);
}

#[test]
fn unmatched_tone_is_an_empty_state_not_an_error() {
    let record = record_with_tones(&["Friendly"]);
    assert!(select_copies(&record, true, "sarcastic").is_empty());
}

// ============================================================
// Carousel wrap-around
// ============================================================

#[test]
fn next_from_last_index_wraps_to_zero() {
    let mut carousel = Carousel::new(3);
    carousel.jump(2);
    carousel.next();
    assert_eq!(carousel.current(), 0);
}

#[test]
fn prev_from_zero_wraps_to_last_index() {
    let mut carousel = Carousel::new(3);
    carousel.prev();
    assert_eq!(carousel.current(), 2);
}

#[test]
fn invariant_holds_under_arbitrary_navigation() {
    let mut carousel = Carousel::new(4);
    let moves: [fn(&mut Carousel); 7] = [
        Carousel::next,
        Carousel::next,
        Carousel::prev,
        Carousel::next,
        Carousel::prev,
        Carousel::prev,
        Carousel::prev,
    ];
    for step in moves {
        step(&mut carousel);
        assert!(carousel.current() < 4);
    }
}

#[test]
fn jump_out_of_range_leaves_position_unchanged() {
    let mut carousel = Carousel::new(2);
    carousel.next();
    carousel.jump(2);
    assert_eq!(carousel.current(), 1);
}

// ============================================================
// Per-record independence
// ============================================================

#[test]
fn navigating_one_record_never_moves_its_sibling() {
    let mut set = CarouselSet::new();
    set.for_record("left", 5).next();
    set.for_record("left", 5).next();
    set.for_record("left", 5).next();
    assert_eq!(set.for_record("right", 5).current(), 0);
    assert_eq!(set.for_record("left", 5).current(), 3);
}

#[test]
fn swapping_the_active_record_resets_only_that_slot() {
    let mut set = CarouselSet::new();
    set.for_record("left", 3).jump(2);
    set.for_record("right", 4).jump(1);
    // "left" is replaced by a different creative with 6 images
    assert_eq!(set.for_record("left", 6).current(), 0);
    assert_eq!(set.for_record("right", 4).current(), 1);
}
