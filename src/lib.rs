//! # resume-extract
//!
//! Turn an uploaded resume (PDF, DOC or DOCX) into a structured record of
//! personal details, work experience, education and skills.
//!
//! Extraction is heuristic: headings are found by keyword, contact fields by
//! pattern, entries by line shape. A field the heuristics cannot find comes
//! back empty rather than as an error, so the caller can always present the
//! record as an editable form.
//!
//! ## Pipeline Overview
//!
//! ```text
//! bytes + filename
//!  │
//!  ├─ 1. Input     dispatch on extension, size and magic-byte checks
//!  ├─ 2. Decode    pdfium text layer (PDF) / docx-rs paragraphs (Word)
//!  ├─ 3. Clean     line endings, invisible characters, blank-line runs
//!  ├─ 4. Segment   Experience / Education / Skills / Summary regions
//!  ├─ 5. Extract   contact fields, entries, dates, skills
//!  └─ 6. Assemble  one ParsedResumeData, never-empty entry lists
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resume_extract::{parse_resume, ParseConfig};
//!
//! let bytes = std::fs::read("resume.pdf").unwrap();
//! if let Some(record) = parse_resume(&bytes, "resume.pdf", &ParseConfig::default()) {
//!     println!("{}", serde_json::to_string_pretty(&record).unwrap());
//! }
//! ```
//!
//! ## PDFium
//!
//! PDF text is read through the PDFium shared library, bound once per
//! process on first use. Set `PDFIUM_LIB_PATH` to point at a specific
//! `libpdfium`; otherwise the system library path is searched. Word
//! documents do not need PDFium.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `resume-extract` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! resume-extract = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod parse;
pub mod pipeline;
pub mod progress;
pub mod stream;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{PageSelection, ParseConfig, ParseConfigBuilder, DEFAULT_MAX_INPUT_BYTES};
pub use error::ResumeParseError;
pub use output::{Education, Experience, ParsedResumeData, PersonalData};
pub use parse::{
    extract_text, parse_file, parse_file_async, parse_resume, parse_resume_async, parse_text,
    parse_to_file, try_parse_resume,
};
pub use pipeline::entries::{CapitalizedLineSplitter, EntrySplitter};
pub use progress::{NoopProgressCallback, ParseProgressCallback, ProgressCallback};
pub use stream::{parse_stream, FileOutcome, FileStream};
