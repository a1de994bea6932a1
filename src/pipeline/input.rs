//! Input resolution: decide the document format and sanity-check the bytes.
//!
//! Dispatch is strictly on the declared extension; the bytes are never
//! sniffed to *choose* a decoder. The magic-byte checks below only reject a
//! file early when its content cannot possibly be the format its extension
//! claims (a `.docx` that is not a zip package, a `.pdf` without `%PDF`),
//! which gives a clearer diagnostic than the decoder's own failure.

use crate::error::ResumeParseError;
use std::fmt;
use std::path::Path;
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

/// The formats routed through the parsing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Doc,
    Docx,
}

impl DocumentFormat {
    /// Map a filename (or bare extension) to a format, case-insensitively.
    ///
    /// Returns `None` for every other extension, including the ones the
    /// wider upload flow accepts (`xlsx`, `pptx`, `png`, `svg`).
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or(filename);
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Short lowercase name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Doc => "doc",
            Self::Docx => "docx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the format for `filename` and validate `bytes` against it.
pub fn resolve_format(
    filename: &str,
    bytes: &[u8],
    max_input_bytes: usize,
) -> Result<DocumentFormat, ResumeParseError> {
    let format = DocumentFormat::from_filename(filename).ok_or_else(|| {
        ResumeParseError::UnsupportedFormat {
            filename: filename.to_string(),
        }
    })?;

    if bytes.len() > max_input_bytes {
        return Err(ResumeParseError::InputTooLarge {
            size: bytes.len(),
            limit: max_input_bytes,
        });
    }

    match format {
        DocumentFormat::Pdf if !bytes.starts_with(PDF_MAGIC) => {
            return Err(ResumeParseError::CorruptPdf {
                detail: format!("missing %PDF header (first bytes: {:?})", magic(bytes)),
            });
        }
        DocumentFormat::Doc | DocumentFormat::Docx if bytes.starts_with(OLE_MAGIC) => {
            return Err(ResumeParseError::CorruptDocument {
                detail: "legacy binary Word file; only OOXML packages can be read".into(),
            });
        }
        DocumentFormat::Doc | DocumentFormat::Docx if !bytes.starts_with(ZIP_MAGIC) => {
            return Err(ResumeParseError::CorruptDocument {
                detail: format!("not a zip package (first bytes: {:?})", magic(bytes)),
            });
        }
        _ => {}
    }

    debug!("Resolved {} as {} ({} bytes)", filename, format, bytes.len());
    Ok(format)
}

/// Read a local resume file, mapping the common I/O failures.
pub fn read_local(path: &Path) -> Result<Vec<u8>, ResumeParseError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ResumeParseError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => ResumeParseError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ResumeParseError::Internal(format!("Failed to read {}: {}", path.display(), e)),
    })
}

/// The filename component of `path`, used for extension dispatch.
pub fn filename_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn magic(bytes: &[u8]) -> &[u8] {
    &bytes[..bytes.len().min(4)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_filename() {
        assert_eq!(DocumentFormat::from_filename("cv.pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_filename("CV.PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_filename("cv.doc"), Some(DocumentFormat::Doc));
        assert_eq!(
            DocumentFormat::from_filename("my.resume.docx"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(DocumentFormat::from_filename("docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_filename("photo.png"), None);
        assert_eq!(DocumentFormat::from_filename("sheet.xlsx"), None);
        assert_eq!(DocumentFormat::from_filename("noextension"), None);
    }

    #[test]
    fn unsupported_extension_is_rejected_first() {
        let err = resolve_format("photo.png", b"%PDF-1.4", 1024).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn oversized_input_is_rejected() {
        let err = resolve_format("cv.pdf", &[b'%'; 64], 16).unwrap_err();
        assert!(matches!(
            err,
            ResumeParseError::InputTooLarge { size: 64, limit: 16 }
        ));
    }

    #[test]
    fn pdf_without_header_is_corrupt() {
        let err = resolve_format("cv.pdf", b"hello", 1024).unwrap_err();
        assert!(matches!(err, ResumeParseError::CorruptPdf { .. }));
        assert!(resolve_format("cv.pdf", b"%PDF-1.7\n", 1024).is_ok());
    }

    #[test]
    fn word_files_must_be_zip_packages() {
        let legacy = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1];
        assert!(matches!(
            resolve_format("cv.doc", &legacy, 1024).unwrap_err(),
            ResumeParseError::CorruptDocument { .. }
        ));
        assert!(matches!(
            resolve_format("cv.docx", b"plain text", 1024).unwrap_err(),
            ResumeParseError::CorruptDocument { .. }
        ));
        assert_eq!(
            resolve_format("cv.docx", b"PK\x03\x04rest", 1024).unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn read_local_missing_file() {
        let err = read_local(Path::new("/definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, ResumeParseError::FileNotFound { .. }));
    }

    #[test]
    fn filename_of_path() {
        assert_eq!(filename_of(Path::new("/tmp/dir/cv.docx")), "cv.docx");
    }
}
