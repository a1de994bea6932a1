//! Result assembly: run every field rule and compose one record.
//!
//! Each rule runs in its own unwind guard. A rule that panics on some odd
//! input costs only its own field, which falls back to its default, and the
//! rest of the record is kept. The never-empty rule for experiences and
//! educations is applied here and nowhere else.

use crate::output::{ParsedResumeData, PersonalData};
use crate::pipeline::entries::{self, EntrySplitter};
use crate::pipeline::sections::{self, SectionKind};
use crate::pipeline::{contact, skills};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Build the record for already-decoded, normalised text.
pub fn assemble(text: &str, splitter: &dyn EntrySplitter) -> ParsedResumeData {
    let sections = isolated("sections", || sections::segment(text));
    debug!(
        "Sections: experience={}B education={}B skills={}B summary={}B",
        sections.experience.len(),
        sections.education.len(),
        sections.skills.len(),
        sections.summary.len()
    );

    let (first_name, last_name) = isolated("name", || contact::extract_name(text));
    let personal = PersonalData {
        first_name,
        last_name,
        email: isolated("email", || contact::extract_email(text)),
        phone: isolated("phone", || contact::extract_phone(text)),
        location: isolated("location", || {
            contact::extract_location(text, sections.span(SectionKind::Skills))
        }),
        summary: isolated("summary", || contact::extract_summary(&sections.summary)),
    };

    let experiences = isolated("experiences", || {
        entries::extract_experiences(&sections.experience, splitter)
    });
    let educations = isolated("educations", || {
        entries::extract_educations(&sections.education, splitter)
    });
    let skills = isolated("skills", || skills::extract_skills(&sections.skills));

    debug!(
        "Entries: {} experience, {} education, {} skills",
        experiences.len(),
        educations.len(),
        skills.len()
    );

    ParsedResumeData {
        personal,
        experiences: or_single_empty(experiences),
        educations: or_single_empty(educations),
        skills,
    }
}

fn isolated<T: Default>(field: &'static str, rule: impl FnOnce() -> T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(rule)) {
        Ok(value) => value,
        Err(payload) => {
            warn!(
                "Extraction of `{}` panicked ({}); using the empty default",
                field,
                panic_message(payload.as_ref())
            );
            T::default()
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn or_single_empty<T: Default>(mut found: Vec<T>) -> Vec<T> {
    if found.is_empty() {
        found.push(T::default());
    }
    found
}
