//! Date-shaped tokens inside an entry.
//!
//! Three shapes are recognised, scanned left to right in one pass:
//! month name + year (`Jan 2020`, `Sept. 2019`, `March 2021`), numeric
//! `MM/YYYY`, and a bare year in 1900–2099. Tokens are returned verbatim;
//! nothing is parsed into a calendar date.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder for an open-ended experience entry.
pub const PRESENT: &str = "Present";

static RE_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?[ \t]+(?:19|20)\d{2}|(?:0?[1-9]|1[0-2])/(?:19|20)\d{2}|(?:19|20)\d{2})\b",
    )
    .unwrap()
});

/// All date tokens in `text`, in document order.
pub fn date_tokens(text: &str) -> Vec<&str> {
    RE_DATE.find_iter(text).map(|m| m.as_str()).collect()
}

/// `true` if `text` holds at least one date token.
pub fn has_date(text: &str) -> bool {
    RE_DATE.is_match(text)
}

/// Start and end date of an experience entry.
///
/// A single token yields an end date of [`PRESENT`]; no token yields two
/// empty strings.
pub fn experience_dates(text: &str) -> (String, String) {
    let mut tokens = RE_DATE.find_iter(text).map(|m| m.as_str().to_string());
    match (tokens.next(), tokens.next()) {
        (Some(start), Some(end)) => (start, end),
        (Some(start), None) => (start, PRESENT.to_string()),
        _ => (String::new(), String::new()),
    }
}

/// Graduation date of an education entry: the first token, or `""`.
///
/// There is no open-ended default here; a lone start year is taken as the
/// graduation date.
pub fn graduation_date(text: &str) -> String {
    RE_DATE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_year_shapes() {
        assert_eq!(
            date_tokens("Jan 2020 – Sept. 2021, March 2022, dec 2023"),
            vec!["Jan 2020", "Sept. 2021", "March 2022", "dec 2023"]
        );
    }

    #[test]
    fn numeric_and_bare_year_shapes() {
        assert_eq!(
            date_tokens("01/2019 - 12/2020 then 2021-2023"),
            vec!["01/2019", "12/2020", "2021", "2023"]
        );
    }

    #[test]
    fn ignores_non_years() {
        assert!(date_tokens("Managed 1500 users across 12 teams").is_empty());
        assert!(date_tokens("Order #20201").is_empty());
        assert!(!has_date("Software Engineer"));
    }

    #[test]
    fn single_date_is_open_ended() {
        assert_eq!(
            experience_dates("Engineer\nAcme\nJan 2020 - Present"),
            ("Jan 2020".to_string(), "Present".to_string())
        );
    }

    #[test]
    fn two_dates_fill_both_ends() {
        assert_eq!(
            experience_dates("Jan 2018 - Dec 2019"),
            ("Jan 2018".to_string(), "Dec 2019".to_string())
        );
    }

    #[test]
    fn no_dates_leave_both_empty() {
        assert_eq!(experience_dates("Engineer"), (String::new(), String::new()));
    }

    #[test]
    fn graduation_takes_first_without_present() {
        assert_eq!(graduation_date("State University\n2015 - 2019"), "2015");
        assert_eq!(graduation_date("State University"), "");
    }
}
