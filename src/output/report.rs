// Markdown report generation for comparisons.
//
// Writes a self-contained report file the user can share or archive —
// the same derived facts as the terminal view, minus the colors.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::analysis::compare::ComparisonResult;
use crate::analysis::narrative::Narrative;
use crate::analysis::platforms::classify;
use crate::model::AdAnalysisRecord;

/// Generate a markdown comparison report and write it to `path`.
/// Returns the path written, for display.
pub fn generate_report(
    result: &ComparisonResult,
    narrative: &Narrative,
    a: &AdAnalysisRecord,
    b: &AdAnalysisRecord,
    path: &str,
) -> Result<String> {
    let markdown = render(result, narrative, a, b);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory for {path}"))?;
        }
    }
    fs::write(path, markdown).with_context(|| format!("Failed to write report to {path}"))?;

    Ok(path.to_string())
}

fn render(
    result: &ComparisonResult,
    narrative: &Narrative,
    a: &AdAnalysisRecord,
    b: &AdAnalysisRecord,
) -> String {
    let winner = if result.winner_id == a.id { a } else { b };
    let mut out = String::new();

    out.push_str(&format!(
        "# Ad comparison: {} vs {}\n\n",
        a.display_name(),
        b.display_name()
    ));
    out.push_str(&format!(
        "Generated {}.\n\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    out.push_str(&format!("**Winner: {}**\n\n", winner.display_name()));

    out.push_str("| Creative | Overall | CTA | Emotional | Confidence |\n");
    out.push_str("|---|---|---|---|---|\n");
    for record in [a, b] {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            record.display_name(),
            record.overall_score,
            record.cta_visibility,
            record.emotional_appeal,
            record.confidence_score,
        ));
    }

    out.push_str("\n## Key differences\n\n");
    for difference in &narrative.differences {
        out.push_str(&format!("- {}\n", difference.statement));
    }

    out.push_str(&format!("\n{}\n", narrative.commentary));

    for record in [a, b] {
        let fits = classify(record);
        if fits.is_empty() {
            continue;
        }
        out.push_str(&format!("\n## Platform fit: {}\n\n", record.display_name()));
        for fit in fits {
            out.push_str(&format!(
                "- {}: {}\n",
                fit.platform.as_str(),
                fit.suitability.as_str()
            ));
        }
    }

    out
}
