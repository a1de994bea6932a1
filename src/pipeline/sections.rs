//! Section segmentation by heading keywords.
//!
//! A heading is a line consisting of one of the known synonyms, in any case,
//! optionally followed by a colon. With a colon, whatever follows on the same
//! line already belongs to the section. A section runs from its heading to
//! the next recognised heading of any kind, or to the end of the text. When a
//! kind appears twice, the first occurrence wins.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::ops::Range;
use tracing::debug;

/// The section kinds the heuristics know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    Summary,
}

impl SectionKind {
    fn from_heading(word: &str) -> Option<Self> {
        let lower = word.to_lowercase();
        let normalised = lower.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalised.as_str() {
            "experience" | "work history" => Some(Self::Experience),
            "education" => Some(Self::Education),
            "skills" => Some(Self::Skills),
            "summary" | "objective" | "profile" => Some(Self::Summary),
            _ => None,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Summary => "summary",
        })
    }
}

static RE_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(experience|work[ \t]+history|education|skills|summary|objective|profile)[ \t]*(?::|$)",
    )
    .unwrap()
});

/// The regions of one document, each possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub summary: String,
    /// Byte range of each found section in the segmented text, heading
    /// included.
    spans: Vec<(SectionKind, Range<usize>)>,
}

impl Sections {
    pub fn get(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Experience => &self.experience,
            SectionKind::Education => &self.education,
            SectionKind::Skills => &self.skills,
            SectionKind::Summary => &self.summary,
        }
    }

    /// Where `kind` sits in the segmented text, if it was found.
    pub fn span(&self, kind: SectionKind) -> Option<Range<usize>> {
        self.spans
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, r)| r.clone())
    }

    fn slot(&mut self, kind: SectionKind) -> &mut String {
        match kind {
            SectionKind::Experience => &mut self.experience,
            SectionKind::Education => &mut self.education,
            SectionKind::Skills => &mut self.skills,
            SectionKind::Summary => &mut self.summary,
        }
    }
}

struct Heading {
    kind: SectionKind,
    /// Byte offset of the heading line.
    start: usize,
    /// Byte offset right after the heading word (and colon, if any).
    body: usize,
}

/// Slice `text` into sections.
pub fn segment(text: &str) -> Sections {
    let headings: Vec<Heading> = RE_HEADING
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let kind = SectionKind::from_heading(caps.get(1)?.as_str())?;
            Some(Heading {
                kind,
                start: whole.start(),
                body: whole.end(),
            })
        })
        .collect();

    let mut sections = Sections::default();
    let mut seen: Vec<SectionKind> = Vec::with_capacity(4);

    for (i, heading) in headings.iter().enumerate() {
        if seen.contains(&heading.kind) {
            debug!(
                "Ignoring repeated {} heading at byte {}",
                heading.kind, heading.start
            );
            continue;
        }
        seen.push(heading.kind);

        let end = headings.get(i + 1).map_or(text.len(), |next| next.start);
        let region = text.get(heading.body..end).unwrap_or_default();
        *sections.slot(heading.kind) = region.trim().to_string();
        sections.spans.push((heading.kind, heading.start..end));
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\njane@example.com\n\nSummary\nBackend engineer.\n\nExperience\nEngineer\nAcme\nJan 2020\n\nEducation\nBSc\nState University\n2019\n\nSkills\nRust, Go";

    #[test]
    fn splits_known_sections() {
        let s = segment(RESUME);
        assert_eq!(s.summary, "Backend engineer.");
        assert_eq!(s.experience, "Engineer\nAcme\nJan 2020");
        assert_eq!(s.education, "BSc\nState University\n2019");
        assert_eq!(s.skills, "Rust, Go");
    }

    #[test]
    fn headings_are_case_insensitive_with_optional_colon() {
        let s = segment("SKILLS: Rust, SQL\nwork   history\nEngineer");
        assert_eq!(s.skills, "Rust, SQL");
        assert_eq!(s.experience, "Engineer");
        assert_eq!(s.get(SectionKind::Education), "");
    }

    #[test]
    fn synonyms_map_to_summary() {
        assert_eq!(segment("Objective\nGrow.").summary, "Grow.");
        assert_eq!(segment("Profile:\nCurious.").summary, "Curious.");
    }

    #[test]
    fn word_inside_a_line_is_not_a_heading() {
        let s = segment("Ten years of experience in Rust\nSkills in leadership");
        assert_eq!(s, Sections::default());
    }

    #[test]
    fn first_heading_of_a_kind_wins() {
        let s = segment("Skills\nRust\nEducation\nBSc\nSkills\nCobol");
        assert_eq!(s.skills, "Rust");
        assert_eq!(s.education, "BSc");
    }

    #[test]
    fn qualified_headings_are_not_recognised() {
        let s = segment("Work Experience\nEngineer\nAcme\n2020\nTechnical Skills\nRust, Go\nProfessional Summary\nCurious.");
        assert_eq!(s, Sections::default());
    }

    #[test]
    fn spans_cover_heading_and_body() {
        let text = "Jane Doe\nSkills\nRust\nEducation\nBSc";
        let s = segment(text);
        assert_eq!(s.span(SectionKind::Skills), Some(9..21));
        assert_eq!(&text[9..21], "Skills\nRust\n");
        assert_eq!(s.span(SectionKind::Education), Some(21..text.len()));
        assert_eq!(s.span(SectionKind::Summary), None);
    }

    #[test]
    fn missing_sections_are_empty() {
        let s = segment("Jane Doe\njane@example.com");
        assert!(s.experience.is_empty());
        assert!(s.education.is_empty());
        assert!(s.skills.is_empty());
        assert!(s.summary.is_empty());
    }

    #[test]
    fn section_kind_display() {
        assert_eq!(SectionKind::Experience.to_string(), "experience");
        assert_eq!(SectionKind::Summary.to_string(), "summary");
    }
}
