//! Progress-callback trait for per-document parse events.
//!
//! Inject an [`Arc<dyn ParseProgressCallback>`] via
//! [`crate::config::ParseConfigBuilder::progress_callback`] to receive events
//! as documents are decoded. The CLI uses this to drive its progress bar when
//! several files are parsed in one run.
//!
//! # Example
//!
//! ```rust
//! use resume_extract::{ParseConfig, ParseProgressCallback};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     parsed: AtomicUsize,
//! }
//!
//! impl ParseProgressCallback for CountingCallback {
//!     fn on_parse_complete(&self, filename: &str, success: bool) {
//!         self.parsed.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("{filename}: {}", if success { "ok" } else { "failed" });
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { parsed: AtomicUsize::new(0) });
//!
//! let config = ParseConfig::builder()
//!     .progress_callback(counter as Arc<dyn ParseProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

/// Called by the pipeline as it processes a document.
///
/// Implementations must be `Send + Sync`: [`crate::stream::parse_stream`]
/// parses several documents at once, so events for different files may
/// arrive concurrently from different threads. All methods default to no-ops.
pub trait ParseProgressCallback: Send + Sync {
    /// Called once before the document is decoded.
    fn on_parse_start(&self, filename: &str) {
        let _ = filename;
    }

    /// Called after the text layer of one PDF page has been read.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — pages selected for decoding
    /// * `text_len`    — byte length of the page text
    fn on_page_decoded(&self, page_num: usize, total_pages: usize, text_len: usize) {
        let _ = (page_num, total_pages, text_len);
    }

    /// Called once after the document has been parsed or rejected.
    fn on_parse_complete(&self, filename: &str, success: bool) {
        let _ = (filename, success);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ParseProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ParseConfig`].
pub type ProgressCallback = Arc<dyn ParseProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct TrackingCallback {
        starts: AtomicUsize,
        pages: AtomicUsize,
        successes: AtomicUsize,
        failures: AtomicUsize,
    }

    impl ParseProgressCallback for TrackingCallback {
        fn on_parse_start(&self, _filename: &str) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_page_decoded(&self, _page_num: usize, _total_pages: usize, _text_len: usize) {
            self.pages.fetch_add(1, Ordering::SeqCst);
        }

        fn on_parse_complete(&self, _filename: &str, success: bool) {
            if success {
                self.successes.fetch_add(1, Ordering::SeqCst);
            } else {
                self.failures.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_parse_start("cv.pdf");
        cb.on_page_decoded(1, 2, 120);
        cb.on_parse_complete("cv.pdf", true);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback::default();

        tracker.on_parse_start("a.pdf");
        tracker.on_page_decoded(1, 2, 100);
        tracker.on_page_decoded(2, 2, 80);
        tracker.on_parse_complete("a.pdf", true);
        tracker.on_parse_start("b.png");
        tracker.on_parse_complete("b.png", false);

        assert_eq!(tracker.starts.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.pages.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.successes.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.failures.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn ParseProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_parse_start("cv.docx");
        cb.on_parse_complete("cv.docx", true);
    }
}
