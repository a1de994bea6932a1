//! CLI binary for resume-extract.
//!
//! A thin shim over the library crate that maps CLI flags to `ParseConfig`
//! and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use resume_extract::pipeline::input::filename_of;
use resume_extract::{
    extract_text, parse_file_async, parse_stream, parse_to_file, PageSelection, ParseConfig,
    ParseProgressCallback, ParsedResumeData, ProgressCallback, DEFAULT_MAX_INPUT_BYTES,
};
use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// One bar over the whole batch; files finish in any order.
struct CliProgressCallback {
    bar: ProgressBar,
    failures: AtomicUsize,
}

impl CliProgressCallback {
    fn new(total_files: usize) -> Arc<Self> {
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} files  \
             ⏱ {elapsed_precise}  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        let bar = ProgressBar::new(total_files as u64);
        bar.set_style(style);
        bar.set_prefix("Parsing");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            failures: AtomicUsize::new(0),
        })
    }

    fn finish(&self) {
        let total = self.bar.length().unwrap_or(0) as usize;
        let failed = self.failures.load(Ordering::SeqCst);
        self.bar.finish_and_clear();
        if failed == 0 {
            eprintln!("{} {} files parsed", green("✔"), bold(&total.to_string()));
        } else {
            eprintln!(
                "{} {}/{} files parsed  ({} failed)",
                if failed == total { red("✘") } else { cyan("⚠") },
                bold(&total.saturating_sub(failed).to_string()),
                total,
                red(&failed.to_string()),
            );
        }
    }
}

impl ParseProgressCallback for CliProgressCallback {
    fn on_parse_start(&self, filename: &str) {
        self.bar.set_message(filename.to_string());
    }

    fn on_parse_complete(&self, filename: &str, success: bool) {
        if success {
            self.bar.println(format!("  {} {}", green("✓"), filename));
        } else {
            self.failures.fetch_add(1, Ordering::SeqCst);
            self.bar.println(format!("  {} {}", red("✗"), filename));
        }
        self.bar.inc(1);
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Human-readable summary
  resume-extract cv.pdf

  # Structured record as JSON
  resume-extract --json cv.docx

  # Write the record to a file
  resume-extract cv.pdf -o cv.json

  # Only the first page of an encrypted PDF
  resume-extract --pages 1 --password secret cv.pdf

  # Inspect the flat text the heuristics see
  resume-extract --text-only cv.pdf

  # A whole folder, one JSON file per resume (parsed/cv.pdf.json, ...)
  resume-extract uploads/*.pdf uploads/*.docx -o parsed/

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to libpdfium; otherwise the system library path is used
  RUST_LOG          Overrides the log filter (e.g. resume_extract=debug)
"#;

/// Extract structured data from PDF and Word resumes.
#[derive(Parser, Debug)]
#[command(
    name = "resume-extract",
    version,
    about = "Extract structured data from PDF and Word resumes",
    long_about = "Extract personal details, work experience, education and skills from PDF, \
DOC and DOCX resumes using keyword and pattern heuristics. Fields that cannot be found \
are left empty.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Resume files (.pdf, .doc, .docx).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (single input) or directory (several inputs, written as
    /// `<file name>.json`).
    #[arg(short, long, env = "RESUME_EXTRACT_OUTPUT")]
    output: Option<PathBuf>,

    /// Print the record as pretty JSON instead of a summary.
    #[arg(long, env = "RESUME_EXTRACT_JSON")]
    json: bool,

    /// Print the normalised flat text instead of the record.
    #[arg(long, env = "RESUME_EXTRACT_TEXT_ONLY", conflicts_with = "json")]
    text_only: bool,

    /// PDF page selection: all, 5, 3-15, or 1,3,5.
    #[arg(long, env = "RESUME_EXTRACT_PAGES", default_value = "all")]
    pages: String,

    /// PDF user password for encrypted documents.
    #[arg(long, env = "RESUME_EXTRACT_PASSWORD")]
    password: Option<String>,

    /// Reject inputs larger than this many bytes.
    #[arg(long, env = "RESUME_EXTRACT_MAX_BYTES", default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    max_bytes: usize,

    /// Number of files parsed at once.
    #[arg(short, long, env = "RESUME_EXTRACT_CONCURRENCY", default_value_t = 4)]
    concurrency: usize,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "RESUME_EXTRACT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "RESUME_EXTRACT_QUIET")]
    quiet: bool,

    /// Disable progress bar.
    #[arg(long, env = "RESUME_EXTRACT_NO_PROGRESS")]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The bar gives all the feedback that matters while a batch runs.
    let show_progress = !cli.quiet && !cli.no_progress && cli.inputs.len() > 1;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let progress_cb = show_progress.then(|| CliProgressCallback::new(cli.inputs.len()));
    let config = build_config(
        &cli,
        progress_cb
            .clone()
            .map(|cb| cb as Arc<dyn ParseProgressCallback>),
    )?;

    // ── Run ──────────────────────────────────────────────────────────────
    let failed = if cli.inputs.len() == 1 {
        run_single(&cli, &cli.inputs[0], &config).await?;
        0
    } else if cli.text_only {
        run_batch_text(&cli, &config).await?
    } else {
        run_batch(&cli, &config).await?
    };

    if let Some(cb) = progress_cb {
        cb.finish();
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files could not be parsed", failed, cli.inputs.len());
    }
    Ok(())
}

/// One input: write to `-o` or print to stdout; any failure is fatal.
async fn run_single(cli: &Cli, path: &Path, config: &ParseConfig) -> Result<()> {
    if cli.text_only {
        let text = text_of(path, config).await?;
        match cli.output {
            Some(ref out) => tokio::fs::write(out, format!("{text}\n"))
                .await
                .with_context(|| format!("Failed to write {}", out.display()))?,
            None => write_stdout(&text)?,
        }
        return Ok(());
    }

    match cli.output {
        Some(ref out) => {
            parse_to_file(path, out, config)
                .await
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            if !cli.quiet {
                eprintln!(
                    "{}  {}  →  {}",
                    green("✔"),
                    path.display(),
                    bold(&out.display().to_string())
                );
            }
        }
        None => {
            let record = parse_file_async(path, config)
                .await
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            if cli.json {
                let json =
                    serde_json::to_string_pretty(&record).context("Failed to serialise record")?;
                write_stdout(&json)?;
            } else {
                write_stdout(&render_summary(&path.display().to_string(), &record))?;
            }
        }
    }
    Ok(())
}

/// Several inputs through the concurrent batch stream. Returns the number of
/// files that failed.
async fn run_batch(cli: &Cli, config: &ParseConfig) -> Result<usize> {
    if let Some(ref dir) = cli.output {
        check_output_names(&cli.inputs, "json")?;
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let mut outcomes = parse_stream(cli.inputs.clone(), config);
    let mut records: BTreeMap<String, ParsedResumeData> = BTreeMap::new();
    let mut failed = 0;

    while let Some(outcome) = outcomes.next().await {
        let name = outcome.path.display().to_string();
        let record = match outcome.result {
            Ok(record) => record,
            Err(e) => {
                failed += 1;
                tracing::error!("{}: {}", name, e);
                continue;
            }
        };

        if let Some(ref dir) = cli.output {
            let target = dir.join(output_name(&outcome.path, "json"));
            let json =
                serde_json::to_string_pretty(&record).context("Failed to serialise record")?;
            tokio::fs::write(&target, json)
                .await
                .with_context(|| format!("Failed to write {}", target.display()))?;
        } else {
            records.insert(name, record);
        }
    }

    if cli.output.is_none() {
        if cli.json {
            let json =
                serde_json::to_string_pretty(&records).context("Failed to serialise records")?;
            write_stdout(&json)?;
        } else {
            let summaries: Vec<String> = records
                .iter()
                .map(|(name, record)| render_summary(name, record))
                .collect();
            write_stdout(&summaries.join("\n"))?;
        }
    }

    Ok(failed)
}

/// Several inputs in `--text-only` mode, one after another.
async fn run_batch_text(cli: &Cli, config: &ParseConfig) -> Result<usize> {
    if let Some(ref dir) = cli.output {
        check_output_names(&cli.inputs, "txt")?;
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let mut failed = 0;
    for path in &cli.inputs {
        let name = path.display().to_string();
        if let Some(ref cb) = config.progress_callback {
            cb.on_parse_start(&name);
        }
        let result = text_of(path, config).await;
        if let Some(ref cb) = config.progress_callback {
            cb.on_parse_complete(&name, result.is_ok());
        }

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                failed += 1;
                tracing::error!("{:#}", e);
                continue;
            }
        };

        match cli.output {
            Some(ref dir) => {
                let target = dir.join(output_name(path, "txt"));
                tokio::fs::write(&target, format!("{text}\n"))
                    .await
                    .with_context(|| format!("Failed to write {}", target.display()))?;
            }
            None => write_stdout(&format!("{} {}\n{}\n", cyan("◆"), bold(&name), text))?,
        }
    }
    Ok(failed)
}

async fn text_of(path: &Path, config: &ParseConfig) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = filename_of(path);
    let config = config.clone();
    let text = tokio::task::spawn_blocking(move || extract_text(&bytes, &filename, &config))
        .await
        .context("Decoder task failed")?
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    Ok(text)
}

/// `cv.pdf` → `cv.pdf.json`; the source extension is kept so `cv.pdf` and
/// `cv.docx` land in different files.
fn output_name(input: &Path, extension: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());
    PathBuf::from(format!("{name}.{extension}"))
}

/// Refuse a batch in which two inputs would write the same output file.
fn check_output_names(inputs: &[PathBuf], extension: &str) -> Result<()> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::with_capacity(inputs.len());
    for input in inputs {
        let name = output_name(input, extension);
        if let Some(other) = seen.insert(name.clone(), input.as_path()) {
            anyhow::bail!(
                "{} and {} would both be written to {}; parse them in separate runs",
                other.display(),
                input.display(),
                name.display()
            );
        }
    }
    Ok(())
}

fn write_stdout(s: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(s.as_bytes())
        .context("Failed to write to stdout")?;
    if !s.ends_with('\n') {
        handle.write_all(b"\n").ok();
    }
    Ok(())
}

/// Render a record for a terminal.
fn render_summary(name: &str, r: &ParsedResumeData) -> String {
    let p = &r.personal;
    let mut out = format!("{} {}\n", cyan("◆"), bold(name));

    let full_name = format!("{} {}", p.first_name, p.last_name);
    for (label, value) in [
        ("Name", full_name.trim()),
        ("Email", p.email.as_str()),
        ("Phone", p.phone.as_str()),
        ("Location", p.location.as_str()),
        ("Summary", p.summary.as_str()),
    ] {
        out.push_str(&format!("  {:<10} {}\n", label, or_dash(value)));
    }

    out.push_str("  Experience\n");
    for e in &r.experiences {
        if e.is_empty() {
            out.push_str(&format!("    {}\n", dim("—")));
            continue;
        }
        out.push_str(&format!(
            "    • {} {} {}  {}\n",
            or_dash(&e.job_title),
            dim("@"),
            or_dash(&e.company),
            dim(&format!("{} – {}", or_dash(&e.start_date), or_dash(&e.end_date))),
        ));
    }

    out.push_str("  Education\n");
    for e in &r.educations {
        if e.is_empty() {
            out.push_str(&format!("    {}\n", dim("—")));
            continue;
        }
        out.push_str(&format!(
            "    • {}, {}  {}\n",
            or_dash(&e.degree),
            or_dash(&e.institution),
            dim(or_dash(&e.graduation_date)),
        ));
    }

    out.push_str(&format!(
        "  {:<10} {}\n",
        "Skills",
        or_dash(&r.skills.join(", "))
    ));
    out
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "—"
    } else {
        s
    }
}

/// Map CLI args to `ParseConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<ParseConfig> {
    let mut builder = ParseConfig::builder()
        .pages(parse_pages(&cli.pages)?)
        .max_input_bytes(cli.max_bytes)
        .concurrency(cli.concurrency);

    if let Some(ref pwd) = cli.password {
        builder = builder.password(pwd.clone());
    }
    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}

/// Parse `--pages` into `PageSelection`.
fn parse_pages(s: &str) -> Result<PageSelection> {
    let s = s.trim().to_lowercase();

    if s == "all" {
        return Ok(PageSelection::All);
    }

    if let Some((start, end)) = s.split_once('-') {
        let start = page_number(start)?;
        let end = page_number(end)?;
        if start > end {
            anyhow::bail!("Invalid page range '{}-{}': start must be <= end", start, end);
        }
        return Ok(PageSelection::Range(start, end));
    }

    if s.contains(',') {
        let pages = s
            .split(',')
            .map(page_number)
            .collect::<Result<Vec<_>>>()?;
        return Ok(PageSelection::Set(pages));
    }

    Ok(PageSelection::Single(page_number(&s)?))
}

fn page_number(s: &str) -> Result<usize> {
    let s = s.trim();
    let page: usize = s
        .parse()
        .with_context(|| format!("Invalid page number: '{}'", s))?;
    if page < 1 {
        anyhow::bail!("Pages are 1-indexed, minimum is 1 (got {})", page);
    }
    Ok(page)
}
