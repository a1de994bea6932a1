//! Whole-document parse entry points.
//!
//! [`parse_resume`] is the contract surface: bytes and a filename in, an
//! `Option` out, with every fatal condition logged and swallowed. The
//! `try_*` and `parse_file` variants run the same pipeline but hand the
//! [`ResumeParseError`] to the caller.
//!
//! A parse is synchronous and CPU-bound. [`parse_resume_async`] and
//! [`parse_to_file`] move it onto tokio's blocking pool.

use crate::config::ParseConfig;
use crate::error::ResumeParseError;
use crate::output::ParsedResumeData;
use crate::pipeline::input::{self, DocumentFormat};
use crate::pipeline::{assemble, docx, pdf, postprocess};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Parse an uploaded resume.
///
/// Returns `None` for an unsupported extension or a document that cannot be
/// decoded. A document that decodes but yields nothing recognisable still
/// returns a record, with empty fields and single empty entries.
///
/// # Example
/// ```rust,no_run
/// use resume_extract::{parse_resume, ParseConfig};
///
/// let bytes = std::fs::read("cv.docx").unwrap();
/// match parse_resume(&bytes, "cv.docx", &ParseConfig::default()) {
///     Some(record) => println!("{} {}", record.personal.first_name, record.personal.last_name),
///     None => println!("fall back to manual entry"),
/// }
/// ```
pub fn parse_resume(
    bytes: &[u8],
    filename: &str,
    config: &ParseConfig,
) -> Option<ParsedResumeData> {
    match try_parse_resume(bytes, filename, config) {
        Ok(record) => Some(record),
        Err(e) if e.is_unsupported() => {
            info!("{}", e);
            None
        }
        Err(e) => {
            warn!("Could not parse {}: {}", filename, e);
            None
        }
    }
}

/// Parse an uploaded resume, exposing why a document was rejected.
pub fn try_parse_resume(
    bytes: &[u8],
    filename: &str,
    config: &ParseConfig,
) -> Result<ParsedResumeData, ResumeParseError> {
    reported(filename, config, || run_pipeline(bytes, filename, config))
}

fn run_pipeline(
    bytes: &[u8],
    filename: &str,
    config: &ParseConfig,
) -> Result<ParsedResumeData, ResumeParseError> {
    let text = extract_text(bytes, filename, config)?;
    Ok(assemble::assemble(&text, config.entry_splitter.as_ref()))
}

/// Wrap one document's parse in start/complete progress events and timing.
fn reported<T>(
    filename: &str,
    config: &ParseConfig,
    run: impl FnOnce() -> Result<T, ResumeParseError>,
) -> Result<T, ResumeParseError> {
    let start = Instant::now();
    info!("Parsing {}", filename);
    if let Some(ref cb) = config.progress_callback {
        cb.on_parse_start(filename);
    }

    let result = run();

    if let Some(ref cb) = config.progress_callback {
        cb.on_parse_complete(filename, result.is_ok());
    }
    if result.is_ok() {
        info!("Parsed {} in {}ms", filename, start.elapsed().as_millis());
    }
    result
}

/// Decode and normalise a document to flat text, without the heuristics.
pub fn extract_text(
    bytes: &[u8],
    filename: &str,
    config: &ParseConfig,
) -> Result<String, ResumeParseError> {
    let format = input::resolve_format(filename, bytes, config.max_input_bytes)?;

    let decoded = panic::catch_unwind(AssertUnwindSafe(|| match format {
        DocumentFormat::Pdf => pdf::decode_pdf(bytes, config),
        DocumentFormat::Doc | DocumentFormat::Docx => docx::decode_docx(bytes),
    }))
    .map_err(|payload| {
        warn!(
            "{} decoder panicked: {}",
            format,
            assemble::panic_message(payload.as_ref())
        );
        ResumeParseError::DecoderPanicked {
            format: format.as_str(),
        }
    })??;

    let text = postprocess::clean_text(&decoded);
    debug!(
        "Decoded {} chars of {} text ({} before cleanup)",
        text.len(),
        format,
        decoded.len()
    );
    Ok(text)
}

/// Run the heuristics over text that is already decoded.
///
/// The text is normalised first, so output of other extractors can be fed
/// in as-is.
pub fn parse_text(text: &str, config: &ParseConfig) -> ParsedResumeData {
    let text = postprocess::clean_text(text);
    assemble::assemble(&text, config.entry_splitter.as_ref())
}

/// Read and parse a local file.
pub fn parse_file(
    path: impl AsRef<Path>,
    config: &ParseConfig,
) -> Result<ParsedResumeData, ResumeParseError> {
    let path = path.as_ref();
    let filename = input::filename_of(path);
    reported(&filename, config, || {
        let bytes = input::read_local(path)?;
        run_pipeline(&bytes, &filename, config)
    })
}

/// [`parse_resume`] on tokio's blocking pool.
///
/// A blocking task that fails to join is reported like a decode failure.
pub async fn parse_resume_async(
    bytes: Vec<u8>,
    filename: String,
    config: ParseConfig,
) -> Option<ParsedResumeData> {
    match tokio::task::spawn_blocking(move || parse_resume(&bytes, &filename, &config)).await {
        Ok(record) => record,
        Err(e) => {
            warn!("Parse task failed: {}", e);
            None
        }
    }
}

/// [`parse_file`] on tokio's blocking pool.
pub async fn parse_file_async(
    path: impl AsRef<Path>,
    config: &ParseConfig,
) -> Result<ParsedResumeData, ResumeParseError> {
    let path = path.as_ref().to_path_buf();
    let config = config.clone();
    tokio::task::spawn_blocking(move || parse_file(&path, &config))
        .await
        .map_err(|e| ResumeParseError::Internal(format!("Parse task failed: {}", e)))?
}

/// Parse a file and write the record as pretty JSON.
///
/// Uses atomic write (temp file + rename) so a reader never sees a partial
/// file.
pub async fn parse_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ParseConfig,
) -> Result<ParsedResumeData, ResumeParseError> {
    let record = parse_file_async(input_path, config).await?;
    let path = output_path.as_ref();

    let json = serde_json::to_string_pretty(&record)
        .map_err(|e| ResumeParseError::Internal(format!("JSON serialisation failed: {}", e)))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ResumeParseError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
    }

    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, json)
        .await
        .map_err(|e| ResumeParseError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| ResumeParseError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(record)
}
