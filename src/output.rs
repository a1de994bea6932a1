//! The structured record produced by one parse.
//!
//! Every field is a plain `String` / `Vec` that defaults to empty. The form
//! layer that consumes this record renders empty fields as ordinary blank
//! inputs, so "not found" and "absent in the document" are the same value.
//! The only absent marker is the outer `Option` returned by
//! [`crate::parse::parse_resume`].
//!
//! JSON field names are camelCase (`firstName`, `jobTitle`, …).

use serde::{Deserialize, Serialize};

/// Top-level result of parsing one resume document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResumeData {
    pub personal: PersonalData,
    /// Work history in document order. Never empty once assembled.
    pub experiences: Vec<Experience>,
    /// Degrees in document order. Never empty once assembled.
    pub educations: Vec<Education>,
    /// Skills in document order; duplicates are kept.
    pub skills: Vec<String>,
}

/// Contact details and summary, taken from the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

/// One job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    /// `"Present"` when only a start date was found.
    pub end_date: String,
    pub description: String,
}

/// One degree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    /// Not populated by the current heuristics.
    pub course: String,
    pub institution: String,
    pub graduation_date: String,
    /// Not populated by the current heuristics.
    pub location: String,
}

impl Experience {
    /// `true` when every field is empty (the placeholder row).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Education {
    /// `true` when every field is empty (the placeholder row).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_field_names() {
        let data = ParsedResumeData {
            personal: PersonalData {
                first_name: "Jane".into(),
                ..Default::default()
            },
            experiences: vec![Experience {
                job_title: "Engineer".into(),
                end_date: "Present".into(),
                ..Default::default()
            }],
            educations: vec![Education {
                graduation_date: "2019".into(),
                ..Default::default()
            }],
            skills: vec!["Rust".into()],
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["personal"]["firstName"], "Jane");
        assert_eq!(json["experiences"][0]["jobTitle"], "Engineer");
        assert_eq!(json["experiences"][0]["endDate"], "Present");
        assert_eq!(json["educations"][0]["graduationDate"], "2019");
        assert_eq!(json["skills"][0], "Rust");
    }

    #[test]
    fn default_entries_are_empty() {
        assert!(Experience::default().is_empty());
        assert!(Education::default().is_empty());
        let e = Education {
            degree: "BSc".into(),
            ..Default::default()
        };
        assert!(!e.is_empty());
    }
}
