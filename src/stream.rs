//! Batch parsing: many files, one outcome per file, as each completes.
//!
//! Every file is parsed independently on the blocking pool; at most
//! [`ParseConfig::concurrency`] run at once. Outcomes arrive in completion
//! order, not input order. A failing file never affects the others.

use crate::config::ParseConfig;
use crate::error::ResumeParseError;
use crate::output::ParsedResumeData;
use crate::parse::parse_file_async;
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::pin::Pin;
use tokio_stream::Stream;
use tracing::info;

/// The result of parsing one file in a batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<ParsedResumeData, ResumeParseError>,
}

/// A boxed stream of per-file outcomes.
pub type FileStream = Pin<Box<dyn Stream<Item = FileOutcome> + Send>>;

/// Parse `paths` concurrently, streaming one [`FileOutcome`] per path.
pub fn parse_stream(paths: Vec<PathBuf>, config: &ParseConfig) -> FileStream {
    info!(
        "Starting batch parse: {} files, concurrency {}",
        paths.len(),
        config.concurrency
    );
    let concurrency = config.concurrency.max(1);
    let config_clone = config.clone();

    let s = stream::iter(paths.into_iter().map(move |path| {
        let cfg = config_clone.clone();
        async move {
            let result = parse_file_async(&path, &cfg).await;
            FileOutcome { path, result }
        }
    }))
    .buffer_unordered(concurrency);

    Box::pin(s)
}
