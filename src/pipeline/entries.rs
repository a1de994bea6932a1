//! Entry splitting for the Experience and Education sections.
//!
//! Splitting a section into entries is the least reliable heuristic in the
//! pipeline, so it sits behind the [`EntrySplitter`] trait and is injected
//! through [`crate::config::ParseConfig`]. Any `Fn(&str) -> Vec<String>`
//! closure is a splitter too.
//!
//! Turning an entry into a record is fixed: the first line is the title (or
//! degree), the second the company (or institution), and for experience the
//! remaining lines form the description.

use crate::output::{Education, Experience};
use crate::pipeline::dates;

/// Strategy that breaks a section into entry texts, in document order.
pub trait EntrySplitter: Send + Sync {
    fn split(&self, section: &str) -> Vec<String>;
}

impl<F> EntrySplitter for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn split(&self, section: &str) -> Vec<String> {
        self(section)
    }
}

/// The default splitter: a new entry starts at a line beginning with a
/// capital letter, unless that line still belongs to the current entry's
/// header.
///
/// A header is at most a title line and a company (or institution) line,
/// followed by the entry's dates, so `Bachelor's Degree` / `State University`
/// / `2019` stays one entry. A capitalized line opens a new entry when
///
/// * it follows a blank line,
/// * the current entry has two lines and the new line is a third undated
///   header line, or the current entry is already dated,
/// * both the new line and the current entry's first line carry a date
///   (one line per entry, `BSc Physics, MIT, 2015`).
///
/// Blank lines are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizedLineSplitter;

impl EntrySplitter for CapitalizedLineSplitter {
    fn split(&self, section: &str) -> Vec<String> {
        let mut entries = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut dated = false;
        let mut after_blank = false;

        for line in section.lines().map(str::trim) {
            if line.is_empty() {
                after_blank = true;
                continue;
            }

            let line_dated = dates::has_date(line);
            let boundary = starts_capitalized(line)
                && !current.is_empty()
                && (after_blank
                    || (current.len() >= 2 && (dated || !line_dated))
                    || (line_dated && dates::has_date(current[0])));
            if boundary {
                entries.push(current.join("\n"));
                current.clear();
                dated = false;
            }

            after_blank = false;
            dated |= line_dated;
            current.push(line);
        }

        if !current.is_empty() {
            entries.push(current.join("\n"));
        }
        entries
    }
}

fn starts_capitalized(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
}

fn entry_lines(entry: &str) -> Vec<&str> {
    entry
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Build one experience record from an entry's text.
pub fn experience_from_entry(entry: &str) -> Experience {
    let lines = entry_lines(entry);
    let (start_date, end_date) = dates::experience_dates(entry);
    Experience {
        job_title: lines.first().map(|s| s.to_string()).unwrap_or_default(),
        company: lines.get(1).map(|s| s.to_string()).unwrap_or_default(),
        start_date,
        end_date,
        description: lines.get(2..).map(|rest| rest.join(" ")).unwrap_or_default(),
    }
}

/// Build one education record from an entry's text.
pub fn education_from_entry(entry: &str) -> Education {
    let lines = entry_lines(entry);
    Education {
        degree: lines.first().map(|s| s.to_string()).unwrap_or_default(),
        institution: lines.get(1).map(|s| s.to_string()).unwrap_or_default(),
        graduation_date: dates::graduation_date(entry),
        ..Default::default()
    }
}

/// Split and build the experience entries of a section. Entries that end up
/// with no content are dropped.
pub fn extract_experiences(section: &str, splitter: &dyn EntrySplitter) -> Vec<Experience> {
    splitter
        .split(section)
        .iter()
        .map(String::as_str)
        .map(experience_from_entry)
        .filter(|e| !e.is_empty())
        .collect()
}

/// Split and build the education entries of a section. Entries that end up
/// with no content are dropped.
pub fn extract_educations(section: &str, splitter: &dyn EntrySplitter) -> Vec<Education> {
    splitter
        .split(section)
        .iter()
        .map(String::as_str)
        .map(education_from_entry)
        .filter(|e| !e.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_block_stays_one_entry() {
        let entries = CapitalizedLineSplitter.split("Bachelor's Degree\nState University\n2019");
        assert_eq!(entries, vec!["Bachelor's Degree\nState University\n2019"]);
    }

    #[test]
    fn capitalized_line_after_dated_entry_starts_new_one() {
        let section = "Senior Engineer\nAcme Corp\nJan 2020 - Present\n• shipped billing\nEngineer\nInitech\n2017 - 2019";
        let entries = CapitalizedLineSplitter.split(section);
        assert_eq!(
            entries,
            vec![
                "Senior Engineer\nAcme Corp\nJan 2020 - Present\n• shipped billing",
                "Engineer\nInitech\n2017 - 2019",
            ]
        );
    }

    #[test]
    fn blank_line_then_capital_always_splits() {
        let entries = CapitalizedLineSplitter.split("BSc Physics\nState University\n\nMSc Physics\nTech Institute");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], "MSc Physics\nTech Institute");
    }

    #[test]
    fn one_line_entries_split() {
        let found = extract_educations(
            "BSc Physics, MIT, 2015\nMSc Computing, Stanford, 2017",
            &CapitalizedLineSplitter,
        );
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].degree, "BSc Physics, MIT, 2015");
        assert_eq!(found[0].institution, "");
        assert_eq!(found[0].graduation_date, "2015");
        assert_eq!(found[1].degree, "MSc Computing, Stanford, 2017");
        assert_eq!(found[1].graduation_date, "2017");
    }

    #[test]
    fn undated_back_to_back_entries_split() {
        let found = extract_experiences("Engineer\nAcme\nDeveloper\nInitech", &CapitalizedLineSplitter);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].job_title, "Engineer");
        assert_eq!(found[0].company, "Acme");
        assert_eq!(found[0].description, "");
        assert_eq!(found[1].job_title, "Developer");
        assert_eq!(found[1].company, "Initech");
    }

    #[test]
    fn date_line_after_header_stays_in_entry() {
        let entries = CapitalizedLineSplitter.split("Engineer\nAcme\nJan 2020 - Present\nEngineer\nInitech\nMarch 2018");
        assert_eq!(
            entries,
            vec!["Engineer\nAcme\nJan 2020 - Present", "Engineer\nInitech\nMarch 2018"]
        );
    }

    #[test]
    fn lowercase_continuation_stays_in_entry() {
        let entries = CapitalizedLineSplitter.split("Engineer\nAcme\n2020\nbuilt the ledger\n\n- on call rotation");
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn empty_section_has_no_entries() {
        assert!(CapitalizedLineSplitter.split("").is_empty());
        assert!(CapitalizedLineSplitter.split("\n\n  \n").is_empty());
    }

    #[test]
    fn experience_fields_by_line_position() {
        let e = experience_from_entry("Senior Engineer\nAcme Corp\nJan 2020 - Present\nled payments\nowned SLOs");
        assert_eq!(e.job_title, "Senior Engineer");
        assert_eq!(e.company, "Acme Corp");
        assert_eq!(e.start_date, "Jan 2020");
        assert_eq!(e.end_date, "Present");
        assert_eq!(e.description, "Jan 2020 - Present led payments owned SLOs");
    }

    #[test]
    fn education_fields_by_line_position() {
        let e = education_from_entry("Bachelor's Degree\nState University\n2019");
        assert_eq!(e.degree, "Bachelor's Degree");
        assert_eq!(e.institution, "State University");
        assert_eq!(e.graduation_date, "2019");
        assert_eq!(e.course, "");
        assert_eq!(e.location, "");
    }

    #[test]
    fn closures_are_splitters() {
        let by_blank = |s: &str| -> Vec<String> {
            s.split("\n\n").map(str::to_string).collect()
        };
        let found = extract_educations("BSc\nUni A\n\nMSc\nUni B", &by_blank);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].institution, "Uni B");
    }

    #[test]
    fn blank_entries_are_dropped() {
        let noisy = |_: &str| vec![String::new(), "  ".to_string()];
        assert!(extract_experiences("anything", &noisy).is_empty());
    }
}
