//! Configuration types for resume parsing.
//!
//! All parsing behaviour is controlled through [`ParseConfig`], built via its
//! [`ParseConfigBuilder`]. The heuristics themselves take no knobs; the
//! config covers the decoder (password, page selection, size guard), batch
//! concurrency, the entry-splitting strategy and progress reporting.

use crate::error::ResumeParseError;
use crate::pipeline::entries::{CapitalizedLineSplitter, EntrySplitter};
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Default input size limit: 20 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 20 * 1024 * 1024;

/// Configuration for a parse.
///
/// Built via [`ParseConfig::builder()`] or using [`ParseConfig::default()`].
///
/// # Example
/// ```rust
/// use resume_extract::{PageSelection, ParseConfig};
///
/// let config = ParseConfig::builder()
///     .pages(PageSelection::Range(1, 2))
///     .concurrency(4)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ParseConfig {
    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Which PDF pages feed the flat text. Default: all pages.
    ///
    /// Word-processor documents have no page structure and ignore this.
    pub pages: PageSelection,

    /// Inputs larger than this many bytes are rejected before decoding.
    /// Default: [`DEFAULT_MAX_INPUT_BYTES`].
    pub max_input_bytes: usize,

    /// Files parsed at once by [`crate::stream::parse_stream`]. Default: 4.
    ///
    /// Each document is still parsed synchronously on its own blocking
    /// thread; this only bounds how many of those run together.
    pub concurrency: usize,

    /// Strategy that breaks an Experience/Education section into entries.
    pub entry_splitter: Arc<dyn EntrySplitter>,

    /// Optional per-document progress events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            password: None,
            pages: PageSelection::default(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            concurrency: 4,
            entry_splitter: Arc::new(CapitalizedLineSplitter),
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ParseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseConfig")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("pages", &self.pages)
            .field("max_input_bytes", &self.max_input_bytes)
            .field("concurrency", &self.concurrency)
            .field("entry_splitter", &"<dyn EntrySplitter>")
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn ParseProgressCallback>"),
            )
            .finish()
    }
}

impl ParseConfig {
    /// Create a new builder for `ParseConfig`.
    pub fn builder() -> ParseConfigBuilder {
        ParseConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ParseConfig`].
#[derive(Debug)]
pub struct ParseConfigBuilder {
    config: ParseConfig,
}

impl ParseConfigBuilder {
    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn pages(mut self, selection: PageSelection) -> Self {
        self.config.pages = selection;
        self
    }

    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.config.max_input_bytes = bytes;
        self
    }

    pub fn concurrency(mut self, n: usize) -> Self {
        self.config.concurrency = n.max(1);
        self
    }

    pub fn entry_splitter(mut self, splitter: Arc<dyn EntrySplitter>) -> Self {
        self.config.entry_splitter = splitter;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ParseConfig, ResumeParseError> {
        let c = &self.config;
        if c.max_input_bytes == 0 {
            return Err(ResumeParseError::InvalidConfig(
                "max_input_bytes must be ≥ 1".into(),
            ));
        }
        if c.concurrency == 0 {
            return Err(ResumeParseError::InvalidConfig(
                "Concurrency must be ≥ 1".into(),
            ));
        }
        if let PageSelection::Range(start, end) = c.pages {
            if start == 0 || start > end {
                return Err(ResumeParseError::InvalidConfig(format!(
                    "Invalid page range {start}-{end}"
                )));
            }
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Specifies which pages of a PDF contribute to the flat text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSelection {
    /// All pages (default).
    #[default]
    All,
    /// A single page (1-indexed).
    Single(usize),
    /// A contiguous range of pages (1-indexed, inclusive).
    Range(usize, usize),
    /// Specific pages (1-indexed, deduplicated).
    Set(Vec<usize>),
}

impl PageSelection {
    /// Expand the selection into a sorted, deduplicated list of 0-indexed
    /// page numbers. Reading order depends on this being ascending.
    pub fn to_indices(&self, total_pages: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = match self {
            PageSelection::All => (0..total_pages).collect(),
            PageSelection::Single(p) => {
                if *p >= 1 && *p <= total_pages {
                    vec![p - 1]
                } else {
                    vec![]
                }
            }
            PageSelection::Range(start, end) => {
                let s = (*start).max(1) - 1;
                let e = (*end).min(total_pages);
                (s..e).collect()
            }
            PageSelection::Set(pages) => pages
                .iter()
                .filter(|&&p| p >= 1 && p <= total_pages)
                .map(|p| p - 1)
                .collect(),
        };
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_selection_to_indices() {
        assert_eq!(PageSelection::All.to_indices(3), vec![0, 1, 2]);
        assert_eq!(PageSelection::Single(2).to_indices(3), vec![1]);
        assert_eq!(PageSelection::Single(4).to_indices(3), Vec::<usize>::new());
        assert_eq!(PageSelection::Range(2, 9).to_indices(3), vec![1, 2]);
        assert_eq!(
            PageSelection::Set(vec![3, 1, 3, 7]).to_indices(3),
            vec![0, 2]
        );
    }

    #[test]
    fn builder_rejects_zero_size_limit() {
        let err = ParseConfig::builder().max_input_bytes(0).build().unwrap_err();
        assert!(err.to_string().contains("max_input_bytes"));
    }

    #[test]
    fn builder_rejects_backwards_range() {
        assert!(ParseConfig::builder()
            .pages(PageSelection::Range(4, 2))
            .build()
            .is_err());
    }

    #[test]
    fn builder_clamps_concurrency() {
        let c = ParseConfig::builder().concurrency(0).build().unwrap();
        assert_eq!(c.concurrency, 1);
    }

    #[test]
    fn debug_redacts_password() {
        let c = ParseConfig::builder().password("hunter2").build().unwrap();
        let dbg = format!("{c:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<redacted>"));
    }
}
