//! Skills list from the Skills section.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_SKILL_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\n•·▪●◦‣]").unwrap());

/// Split on commas, bullets and newlines. Order and duplicates are kept.
pub fn extract_skills(section: &str) -> Vec<String> {
    RE_SKILL_SEPARATOR
        .split(section)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_and_newlines() {
        assert_eq!(
            extract_skills("React, Node.js\nSQL"),
            vec!["React", "Node.js", "SQL"]
        );
    }

    #[test]
    fn bullets_and_blanks() {
        assert_eq!(
            extract_skills("• Rust\n• Go ▪ Kafka\n\n,, ● Rust"),
            vec!["Rust", "Go", "Kafka", "Rust"]
        );
    }

    #[test]
    fn empty_section() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills(" \n , ").is_empty());
    }
}
