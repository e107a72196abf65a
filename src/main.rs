//! drift-monitor - reference vs. current data drift check
//!
//! Loads two CSV snapshots, runs the drift engine and writes the report
//! artifacts. The exit status is the automation signal.
//!
//! # Usage
//!
//! ```bash
//! drift-monitor --reference-csv data/train.csv --current-csv data/prod.csv
//!
//! # Stricter threshold, extra Markdown report
//! drift-monitor --reference-csv ref.csv --current-csv cur.csv \
//!     --threshold 0.1 --output-markdown drift_report.md
//! ```
//!
//! # Exit Status
//!
//! - `0`: drift share within threshold
//! - `1`: drift share above threshold
//! - `2`: fatal error, no artifacts written
//!
//! # Environment Variables
//!
//! - `DRIFT_CONFIG`: Path to TOML config (default: ./drift_config.toml)
//! - `DRIFT_THRESHOLD`: Overrides `alerting.threshold`
//! - `RUST_LOG`: Logging level (default: info)

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use drift_monitor::config::defaults;
use drift_monitor::{load_csv, DriftAnalyzer, DriftConfig, ReportRenderer, ResultSerializer};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "drift-monitor")]
#[command(about = "Detect data drift between a reference and a current dataset")]
#[command(version)]
struct CliArgs {
    /// Reference (training) CSV file
    #[arg(long, value_name = "PATH")]
    reference_csv: PathBuf,

    /// Current (production) CSV file
    #[arg(long, value_name = "PATH")]
    current_csv: PathBuf,

    /// HTML report output path
    #[arg(long, value_name = "PATH", default_value = defaults::OUTPUT_HTML)]
    output_html: PathBuf,

    /// JSON summary output path
    #[arg(long, value_name = "PATH", default_value = defaults::OUTPUT_JSON)]
    output_json: PathBuf,

    /// Optional Markdown report output path
    #[arg(long, value_name = "PATH")]
    output_markdown: Option<PathBuf>,

    /// Optional full report JSON (per-feature detail) output path
    #[arg(long, value_name = "PATH")]
    full_json: Option<PathBuf>,

    /// Drift-share threshold in [0, 1] (overrides config and DRIFT_THRESHOLD)
    #[arg(long)]
    threshold: Option<f64>,

    /// Per-feature significance level in (0, 1)
    #[arg(long)]
    significance_level: Option<f64>,

    /// TOML config file (skips the DRIFT_CONFIG / ./drift_config.toml search)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Column to drop before comparison; repeat for several. Replaces the configured list.
    #[arg(long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,
}

impl CliArgs {
    /// Config file or search order, then `DRIFT_THRESHOLD`, then flags.
    fn resolve_config(&self) -> Result<DriftConfig> {
        let mut config = match &self.config {
            Some(path) => DriftConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => DriftConfig::load().context("Failed to load drift config")?,
        }
        .apply_env_overrides();

        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        if let Some(alpha) = self.significance_level {
            config = config.with_significance_level(alpha);
        }
        if !self.exclude.is_empty() {
            config = config.with_excluded_columns(self.exclude.clone());
        }
        Ok(config)
    }
}

// ============================================================================
// Run
// ============================================================================

/// Rendered artifacts, built in full before anything touches the filesystem.
struct Artifacts {
    files: Vec<(PathBuf, String)>,
}

/// `drift_report.html` → `drift_report.html.partial`, in the same directory.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

fn remove_all<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) {
    for path in paths {
        if let Err(e) = std::fs::remove_file(path) {
            warn!(path = %path.display(), error = %e, "Failed to clean up artifact");
        }
    }
}

impl Artifacts {
    /// Stage every file next to its target, then rename them into place.
    ///
    /// On any failure the staged and already-renamed files are removed, so an
    /// error leaves none of the artifacts behind.
    fn write_all(&self) -> Result<()> {
        let mut staged = Vec::with_capacity(self.files.len());
        for (path, contents) in &self.files {
            let tmp = staging_path(path);
            if let Err(e) = std::fs::write(&tmp, contents) {
                remove_all(&staged);
                return Err(e).with_context(|| format!("Failed to write {}", path.display()));
            }
            staged.push(tmp);
        }

        let mut placed: Vec<PathBuf> = Vec::with_capacity(self.files.len());
        for ((path, _), tmp) in self.files.iter().zip(&staged) {
            if let Err(e) = std::fs::rename(tmp, path) {
                remove_all(&placed);
                remove_all(&staged[placed.len()..]);
                return Err(e).with_context(|| format!("Failed to write {}", path.display()));
            }
            info!(path = %path.display(), "Artifact written");
            placed.push(path.clone());
        }
        Ok(())
    }
}

fn load(path: &Path, role: &str) -> Result<drift_monitor::Dataset> {
    let dataset = load_csv(path).with_context(|| format!("Failed to load {role} data"))?;
    info!(
        role,
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "Dataset loaded"
    );
    Ok(dataset)
}

/// Returns whether the drift share exceeded the threshold.
fn run(args: &CliArgs) -> Result<bool> {
    let config = args.resolve_config()?;

    let reference = load(&args.reference_csv, "reference")?;
    let current = load(&args.current_csv, "current")?;

    let report = DriftAnalyzer::analyze(&reference, &current, &config)
        .context("Drift analysis failed")?;

    let mut files = vec![
        (args.output_html.clone(), ReportRenderer::html(&report)),
        (
            args.output_json.clone(),
            ResultSerializer::summary_json(&report).context("Failed to serialize summary")?,
        ),
    ];
    if let Some(path) = &args.output_markdown {
        files.push((path.clone(), ReportRenderer::markdown(&report)));
    }
    if let Some(path) = &args.full_json {
        files.push((
            path.clone(),
            ResultSerializer::report_json(&report).context("Failed to serialize report")?,
        ));
    }
    Artifacts { files }.write_all()?;

    println!("\n{}", ReportRenderer::console_summary(&report));

    if let Some(alert) = ReportRenderer::alert_message(&report) {
        info!(subject = %alert.subject, "Alert payload ready");
        println!("\n{}\n\n{}", alert.subject, alert.body);
    }

    Ok(report.exceeds_threshold)
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    match run(&args) {
        Ok(false) => ExitCode::from(defaults::EXIT_OK),
        Ok(true) => ExitCode::from(defaults::EXIT_THRESHOLD_EXCEEDED),
        Err(e) => {
            error!("Drift detection failed: {:#}", e);
            ExitCode::from(defaults::EXIT_FAILURE)
        }
    }
}
