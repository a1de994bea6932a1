//! Post-processing: deterministic cleanup of decoded flat text.
//!
//! Text layers out of PDFs and Word packages carry artefacts the heuristics
//! downstream must not see: `\r\n` line endings from pdfium, zero-width
//! characters and soft hyphens from word processors, non-breaking spaces
//! around dates, long runs of empty lines between pages.
//!
//! ## Rule Order
//!
//! Line endings are normalised before anything works line by line, and blank
//! lines are collapsed last so that lines emptied by the earlier rules are
//! counted. Exactly one blank line survives wherever there was at least one:
//! the summary extractor uses "blank line, then capitalized line" as its end
//! boundary.

use once_cell::sync::Lazy;
use regex::Regex;

/// Apply all cleanup rules to freshly decoded text.
///
/// Rules (applied in order):
/// 1. Normalise line endings (CRLF / CR → LF)
/// 2. Strip invisible Unicode (zero-width spaces, BOM, soft hyphens, U+FFFE)
/// 3. Replace non-breaking and other exotic spaces with a plain space
/// 4. Trim trailing whitespace per line
/// 5. Collapse runs of blank lines to a single blank line
/// 6. Trim leading/trailing blank lines of the whole text
pub fn clean_text(input: &str) -> String {
    let s = normalise_line_endings(input);
    let s = remove_invisible_chars(&s);
    let s = normalise_spaces(&s);
    let s = trim_trailing_whitespace(&s);
    let s = collapse_blank_lines(&s);
    s.trim_matches('\n').to_string()
}

// ── Rule 1: Normalise line endings ───────────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 2: Remove invisible Unicode characters ─────────────────────────────

const INVISIBLE_CHARS: &[char] = &[
    '\u{200B}', // zero-width space
    '\u{200C}', // zero-width non-joiner
    '\u{200D}', // zero-width joiner
    '\u{2060}', // word joiner
    '\u{FEFF}', // BOM
    '\u{00AD}', // soft hyphen
    '\u{FFFE}', // pdfium's marker for a hyphenated line break
    '\u{0002}', // pdfium's soft-hyphen placeholder
];

fn remove_invisible_chars(input: &str) -> String {
    input.chars().filter(|c| !INVISIBLE_CHARS.contains(c)).collect()
}

// ── Rule 3: Normalise exotic spaces ──────────────────────────────────────────

fn normalise_spaces(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\t' => ' ',
            other => other,
        })
        .collect()
}

// ── Rule 4: Trim trailing whitespace per line ────────────────────────────────

fn trim_trailing_whitespace(input: &str) -> String {
    input
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Rule 5: Collapse blank lines ─────────────────────────────────────────────

static RE_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

fn collapse_blank_lines(input: &str) -> String {
    RE_BLANK_LINES.replace_all(input, "\n\n").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_line_endings() {
        assert_eq!(normalise_line_endings("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_trim_trailing() {
        assert_eq!(trim_trailing_whitespace("hello   \nworld  "), "hello\nworld");
    }

    #[test]
    fn test_collapse_blank_lines_keeps_one() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_remove_invisible() {
        let input = "Jane\u{200B} Doe\u{FEFF}\u{00AD}";
        assert_eq!(remove_invisible_chars(input), "Jane Doe");
    }

    #[test]
    fn test_non_breaking_spaces() {
        assert_eq!(normalise_spaces("Jan\u{00A0}2020\tX"), "Jan 2020 X");
    }

    #[test]
    fn test_clean_text_full_pipeline() {
        let input = "\r\n\r\nJane Doe  \r\njane@example.com\r\n \r\n\r\n\r\nSkills\r\nRust\r\n\r\n";
        assert_eq!(
            clean_text(input),
            "Jane Doe\njane@example.com\n\nSkills\nRust"
        );
    }
}
