// Colored terminal output for comparisons, records, and copy listings.
//
// This module handles all terminal-specific formatting: colors, columns,
// empty states. The main.rs commands delegate here.

use colored::Colorize;

use crate::analysis::compare::ComparisonResult;
use crate::analysis::narrative::Narrative;
use crate::analysis::platforms::{PlatformFit, Suitability};
use crate::carousel::Carousel;
use crate::model::{AdAnalysisRecord, AdCopy};

/// Display a full comparison: scores, winner, differences, commentary.
pub fn display_comparison(
    result: &ComparisonResult,
    narrative: &Narrative,
    a: &AdAnalysisRecord,
    b: &AdAnalysisRecord,
) {
    println!(
        "\n{}",
        format!(
            "=== Comparison: {} vs {} ===",
            a.display_name(),
            b.display_name()
        )
        .bold()
    );
    println!();

    println!(
        "  {:<28} {:>8} {:>8} {:>8} {:>8}",
        "Creative".dimmed(),
        "Overall".dimmed(),
        "CTA".dimmed(),
        "Emotion".dimmed(),
        "Confid".dimmed(),
    );
    println!("  {}", "-".repeat(64).dimmed());
    for record in [a, b] {
        let marker = if record.id == result.winner_id {
            "►".green().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "{} {:<28} {:>8} {:>8} {:>8} {:>8}",
            marker,
            record.display_name(),
            record.overall_score,
            record.cta_visibility,
            record.emotional_appeal,
            record.confidence_score,
        );
    }

    println!("\n  {}", "Key differences:".bold());
    for difference in &narrative.differences {
        println!("    • {}", difference.statement);
    }

    println!("\n  {}", narrative.commentary.italic());
}

/// Display a single record's detail view.
pub fn display_record_detail(
    record: &AdAnalysisRecord,
    fits: &[PlatformFit],
    carousel: Option<&Carousel>,
) {
    println!(
        "\n{}",
        format!("=== {} ===", record.display_name()).bold()
    );

    println!("  Overall score: {}/100", record.overall_score);
    println!("  Match score: {}/100", record.match_score);
    println!("  CTA visibility: {}/100", record.cta_visibility);
    println!("  Emotional appeal: {}/100", record.emotional_appeal);
    println!("  Confidence: {}/100", record.confidence_score);

    if fits.is_empty() {
        println!("\n  No platform guidance for this creative.");
    } else {
        println!("\n  {}", "Platform fit:".bold());
        for fit in fits {
            println!(
                "    {:<12} {}",
                fit.platform.as_str(),
                colorize_suitability(fit.suitability)
            );
        }
    }

    match carousel {
        Some(carousel) if !carousel.is_empty() => {
            println!(
                "\n  Images: {} (showing {} of {})",
                record.images[carousel.current()],
                carousel.current() + 1,
                carousel.len()
            );
        }
        _ => println!("\n  No images (video-only creative)."),
    }

    if !record.issues.is_empty() {
        println!("\n  {}", "Issues:".bold());
        for issue in &record.issues {
            println!("    {} {}", "!".yellow(), super::preview(issue, 100));
        }
    }
    if !record.suggestions.is_empty() {
        println!("\n  {}", "Suggestions:".bold());
        for suggestion in &record.suggestions {
            println!("    {} {}", "+".green(), super::preview(suggestion, 100));
        }
    }
}

/// Display a tier-gated copy listing.
pub fn display_copies(copies: &[&AdCopy], paid_tier: bool, tone_filter: &str) {
    if copies.is_empty() {
        println!("No copy variants match tone \"{tone_filter}\".");
        return;
    }

    println!(
        "\n{}",
        format!("=== Ad copy ({} variants) ===", copies.len()).bold()
    );
    println!();

    for (i, copy) in copies.iter().enumerate() {
        println!(
            "  {}. [{} / {}]",
            i + 1,
            copy.platform.cyan(),
            copy.tone.magenta()
        );
        println!("     {}", super::preview(&copy.text, 140));
    }

    if !paid_tier {
        println!(
            "\n  {}",
            "Free tier shows the primary variant only. Upgrade to compare tones.".dimmed()
        );
    }
}

fn colorize_suitability(suitability: Suitability) -> colored::ColoredString {
    match suitability {
        Suitability::Suitable => "Suitable".green(),
        Suitability::Warning => "Warning".yellow().bold(),
    }
}
