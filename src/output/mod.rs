// Output formatting — terminal display and report generation.

pub mod report;
pub mod terminal;

/// Single-line preview of free-form text: newlines collapsed to spaces,
/// truncated to at most `max_chars` characters with "..." appended.
///
/// Truncation counts characters, not bytes, so multi-byte text (emoji,
/// accents, CJK) never panics mid-codepoint.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if flat.chars().count() <= max_chars {
        flat
    } else {
        let truncated: String = flat.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_collapses_newlines_and_runs_of_spaces() {
        assert_eq!(preview("line one\nline  two", 50), "line one line two");
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        assert_eq!(preview("café résumé", 4), "café...");
    }

    #[test]
    fn preview_leaves_short_text_alone() {
        assert_eq!(preview("short", 10), "short");
    }
}
