//! Contact-field rules applied to the whole document text.
//!
//! Every rule returns an empty string when it finds nothing. None of them
//! validates what it finds: a syntactically odd email is still an email.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static RE_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[ .-]?)?\(?\d{3}\)?[ .-]?\d{3}[ .-]?\d{4}\b").unwrap()
});

static RE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\p{Lu}\p{Ll}+)[ \t]+(\p{Lu}\p{Ll}+)\b").unwrap());

// "Springfield, IL" / "San Francisco, CA"
static RE_CITY_STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\p{Lu}\p{Ll}+(?: \p{Lu}\p{Ll}+){0,2}, [A-Z]{2}\b").unwrap()
});

// "Berlin, Germany" / "Cape Town, South Africa"
static RE_CITY_COUNTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\p{Lu}\p{Ll}+(?: \p{Lu}\p{Ll}+){0,2}, \p{Lu}\p{Ll}+(?: \p{Lu}\p{Ll}+)?\b")
        .unwrap()
});

static RE_SUMMARY_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n[ \t]*\p{Lu}").unwrap());

/// First email address in document order.
pub fn extract_email(text: &str) -> String {
    RE_EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone-number-shaped digit group in document order.
pub fn extract_phone(text: &str) -> String {
    RE_PHONE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// `(first_name, last_name)` from the first non-empty line, if that line
/// starts with two capitalized words.
pub fn extract_name(text: &str) -> (String, String) {
    let Some(first_line) = text.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return Default::default();
    };
    RE_NAME
        .captures(first_line)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .unwrap_or_default()
}

/// First "City, ST" or "City, Country" in document order.
///
/// Matches starting inside `skip` (the Skills region) are ignored, as is a
/// match running straight into `.` plus a letter, so skill lists such as
/// `React, UI design` or `React, Node.js` do not read as a place.
pub fn extract_location(text: &str, skip: Option<Range<usize>>) -> String {
    [&*RE_CITY_STATE, &*RE_CITY_COUNTRY]
        .into_iter()
        .filter_map(|re| {
            re.find_iter(text).find(|m| {
                !skip.as_ref().is_some_and(|r| r.contains(&m.start()))
                    && !continues_as_identifier(&text[m.end()..])
            })
        })
        .min_by_key(|m| m.start())
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn continues_as_identifier(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some('.') && chars.next().is_some_and(|c| c.is_alphanumeric())
}

/// The summary section up to the first blank line followed by a
/// capitalized line.
pub fn extract_summary(section: &str) -> String {
    let end = RE_SUMMARY_END
        .find(section)
        .map_or(section.len(), |m| m.start());
    section[..end].trim().to_string()
}
