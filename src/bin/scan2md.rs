//! CLI binary for scan2md.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use scan2md::{
    convert_dir, BatchProgressCallback, ConversionConfig, PageStatus, ProgressCallback,
};
use std::io;
use std::path::PathBuf;
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
fn yellow(s: &str) -> String {
    format!("\x1b[33m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: renders a live progress bar and per-file log
/// lines using [indicatif]. The batch is strictly sequential, so events
/// arrive in order.
struct CliProgressCallback {
    /// The single progress bar anchored at the bottom of the terminal.
    bar: ProgressBar,
    /// Count of files that errored out.
    errors: AtomicUsize,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_batch_start

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(spinner_style);
        bar.set_prefix("Scanning");
        bar.set_message("Collecting images…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            errors: AtomicUsize::new(0),
        })
    }

    /// Switch to the full progress-bar style once we know `total`.
    fn activate_bar(&self, total: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} images  \
             ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        self.bar.set_length(total as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Converting");
    }
}

impl BatchProgressCallback for CliProgressCallback {
    fn on_batch_start(&self, total_files: usize) {
        self.activate_bar(total_files);
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Converting {total_files} images…"))
        ));
    }

    fn on_page_start(&self, _file_num: usize, _total: usize, name: &str) {
        self.bar.set_message(name.to_string());
    }

    fn on_page_complete(&self, file_num: usize, total: usize, name: &str, markdown_len: usize) {
        self.bar.println(format!(
            "  {} {:>3}/{:<3}  {:<28}  {}",
            green("✓"),
            file_num,
            total,
            name,
            dim(&format!("{markdown_len:>5} chars")),
        ));
        self.bar.inc(1);
    }

    fn on_page_no_text(&self, file_num: usize, total: usize, name: &str) {
        self.bar.println(format!(
            "  {} {:>3}/{:<3}  {:<28}  {}",
            yellow("∅"),
            file_num,
            total,
            name,
            dim("no text found"),
        ));
        self.bar.inc(1);
    }

    fn on_page_error(&self, file_num: usize, total: usize, name: &str, error: &str) {
        self.errors.fetch_add(1, Ordering::SeqCst);

        // Truncate very long error messages to keep output tidy.
        let msg = if error.len() > 80 {
            format!("{}\u{2026}", &error[..79])
        } else {
            error.to_string()
        };

        self.bar.println(format!(
            "  {} {:>3}/{:<3}  {:<28}  {}",
            red("✗"),
            file_num,
            total,
            name,
            red(&msg),
        ));
        self.bar.inc(1);
    }

    fn on_batch_complete(&self, total_files: usize, converted: usize) {
        let failed = self.errors.load(Ordering::SeqCst);
        self.bar.finish_and_clear();

        if failed == 0 {
            eprintln!(
                "{} {}/{} images converted",
                green("✔"),
                bold(&converted.to_string()),
                total_files,
            );
        } else {
            eprintln!(
                "{} {}/{} images converted  ({} failed)",
                if converted == 0 { red("✘") } else { cyan("⚠") },
                bold(&converted.to_string()),
                total_files,
                red(&failed.to_string()),
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert ./images/*.png into ./output/*.md
  scan2md

  # Custom directories
  scan2md --images scans --output md

  # Stricter bold detection, French + English text
  scan2md --bold-multiplier 1.0 --language eng+fra

  # Machine-readable batch report
  scan2md --json > report.json

HOW BOLD DETECTION WORKS:
  Each recognized word's bounding box is binarized against its own Otsu
  threshold; the fraction of ink pixels is its density. A word is bold when
  its density exceeds mean + k·stddev of the page's densities (k set by
  --bold-multiplier). The cutoff is page-relative, so it adapts to scan
  contrast and resolution.

OUTPUT:
  One <input-stem>.md per converted image, flat paragraphs only, bold words
  wrapped in **…**. Images where OCR finds no text above the confidence
  cutoff produce no file. Two inputs sharing a stem overwrite each other's
  output.

SETUP:
  Tesseract 5.x and its language data must be installed, e.g.:
    apt install tesseract-ocr tesseract-ocr-eng
    brew install tesseract tesseract-lang
"#;

/// Convert scanned page images to Markdown with ink-density bold detection.
#[derive(Parser, Debug)]
#[command(
    name = "scan2md",
    version,
    about = "Convert scanned page images to Markdown with ink-density bold detection",
    long_about = "Convert a directory of scanned page images (PNG, JPEG, TIFF, BMP) to \
Markdown files. Words are recognised with Tesseract OCR; bold emphasis is inferred from \
each word's ink density relative to its page, not from font metadata.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory of input images.
    #[arg(long = "images", env = "SCAN2MD_IMAGES", default_value = "images")]
    images_dir: PathBuf,

    /// Directory Markdown files are written to (created if absent).
    #[arg(short, long = "output", env = "SCAN2MD_OUTPUT", default_value = "output")]
    output_dir: PathBuf,

    /// Tesseract language codes, e.g. eng or eng+fra.
    #[arg(long, env = "SCAN2MD_LANGUAGE", default_value = "eng")]
    language: String,

    /// OCR confidence cutoff (0–100); words at or below it are dropped.
    #[arg(long, env = "SCAN2MD_MIN_CONFIDENCE", default_value_t = 40.0)]
    min_confidence: f32,

    /// Bold sensitivity: density must exceed mean + k·stddev of the page.
    #[arg(long, env = "SCAN2MD_BOLD_MULTIPLIER", default_value_t = 0.5)]
    bold_multiplier: f64,

    /// Tesseract page segmentation mode.
    #[arg(long, env = "SCAN2MD_PSM", default_value_t = 3)]
    psm: u32,

    /// Output a structured JSON batch report instead of the summary.
    #[arg(long, env = "SCAN2MD_JSON")]
    json: bool,

    /// Disable progress bar.
    #[arg(long, env = "SCAN2MD_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "SCAN2MD_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "SCAN2MD_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let progress_cb: Option<ProgressCallback> = if show_progress {
        let cb = CliProgressCallback::new();
        Some(cb as Arc<dyn BatchProgressCallback>)
    } else {
        None
    };

    let mut builder = ConversionConfig::builder()
        .images_dir(&cli.images_dir)
        .output_dir(&cli.output_dir)
        .language(&cli.language)
        .min_confidence(cli.min_confidence)
        .bold_multiplier(cli.bold_multiplier)
        .page_seg_mode(cli.psm);

    if let Some(cb) = progress_cb {
        builder = builder.progress_callback(cb);
    }

    let config = builder.build().context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let batch = convert_dir(&config).context("Conversion failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&batch).context("Failed to serialise output")?;
        println!("{json}");
        return Ok(());
    }

    if batch.is_empty() {
        if !cli.quiet {
            eprintln!(
                "{} No images found in {}/",
                yellow("∅"),
                cli.images_dir.display()
            );
        }
        return Ok(());
    }

    // Summary (the callback already printed the per-file log lines).
    if !cli.quiet && !show_progress {
        eprintln!(
            "Converted {}/{} images in {}ms",
            batch.stats.converted, batch.stats.total_files, batch.stats.duration_ms
        );
        for page in &batch.pages {
            if let PageStatus::Failed(e) = &page.status {
                eprintln!("  {} {}", red("✗"), e);
            }
        }
    } else if !cli.quiet {
        eprintln!(
            "   {} words  /  {} bold  —  {}ms total  →  {}",
            dim(&batch.stats.total_words.to_string()),
            dim(&batch.stats.bold_words.to_string()),
            batch.stats.duration_ms,
            bold(&cli.output_dir.display().to_string()),
        );
    }

    Ok(())
}
