//! Error types for the resume-extract library.
//!
//! Only *fatal* conditions are errors here: the document could not be turned
//! into flat text at all (unsupported extension, corrupt file, wrong
//! password, no PDF engine). A heuristic that finds nothing is never an
//! error; the affected field simply keeps its empty default (see
//! [`crate::output`]).
//!
//! [`crate::parse::parse_resume`] collapses every variant into `None` after
//! logging it, which is the contract the form layer consumes.
//! [`crate::parse::try_parse_resume`] exposes the variant for callers that
//! want to report *why* a document was rejected.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the resume-extract library.
#[derive(Debug, Error)]
pub enum ResumeParseError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The filename's extension is not one of `pdf`, `doc`, `docx`.
    #[error("Unsupported document format: '{filename}' (expected .pdf, .doc or .docx)")]
    UnsupportedFormat { filename: String },

    /// Input file was not found at the given path.
    #[error("Resume file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The input exceeds the configured size limit.
    #[error("Input is {size} bytes, larger than the {limit}-byte limit")]
    InputTooLarge { size: usize, limit: usize },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF is corrupt: {detail}")]
    CorruptPdf { detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired,

    /// A password was provided but it is wrong.
    #[error("Wrong password for encrypted PDF")]
    WrongPassword,

    /// Selected page numbers exceed the actual page count.
    #[error("Page {page} is out of range (document has {total} pages)")]
    PageOutOfRange { page: usize, total: usize },

    /// pdfium could not read the text layer of a page.
    #[error("Text extraction failed for page {page}: {detail}")]
    PageTextFailed { page: usize, detail: String },

    // ── Word-processor errors ─────────────────────────────────────────────
    /// The bytes are not a readable OOXML word-processor package.
    #[error("Word document could not be read: {detail}")]
    CorruptDocument { detail: String },

    /// A decoding library panicked on malformed input.
    #[error("The {format} decoder panicked on malformed input")]
    DecoderPanicked { format: &'static str },

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
PDF parsing needs the PDFium shared library. You can:\n\
  • Install libpdfium so the system loader can find it.\n\
  • Set PDFIUM_LIB_PATH=/path/to/libpdfium to use a specific copy.\n"
    )]
    PdfiumBindingFailed(String),

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output JSON file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResumeParseError {
    /// `true` for the expected, non-exceptional rejection of a file type the
    /// pipeline does not handle. Everything else is a decode failure.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ResumeParseError::UnsupportedFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_display() {
        let e = ResumeParseError::UnsupportedFormat {
            filename: "photo.png".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("photo.png"), "got: {msg}");
        assert!(e.is_unsupported());
    }

    #[test]
    fn decode_failures_are_not_unsupported() {
        let e = ResumeParseError::CorruptPdf {
            detail: "bad xref".into(),
        };
        assert!(!e.is_unsupported());
        assert!(e.to_string().contains("bad xref"));
    }

    #[test]
    fn input_too_large_display() {
        let e = ResumeParseError::InputTooLarge {
            size: 300,
            limit: 200,
        };
        assert!(e.to_string().contains("300"));
        assert!(e.to_string().contains("200"));
    }

    #[test]
    fn page_text_failed_display() {
        let e = ResumeParseError::PageTextFailed {
            page: 3,
            detail: "no text layer".into(),
        };
        assert!(e.to_string().contains("page 3"));
        assert!(e.to_string().contains("no text layer"));
    }
}
