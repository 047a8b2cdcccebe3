//! Scan pipeline: discover, probe, write.
//!
//! Files are probed one at a time in discovery order. A file that fails to
//! probe is logged and left out of the report; only failing to write the
//! report itself aborts the run.

use anyhow::Result;
use std::path::PathBuf;

use vidmeta_av::{Prober, VideoRecord};

use crate::config::Config;
use crate::{report, scanner};

/// A file that could not be probed.
#[derive(Debug)]
pub struct ProbeFailure {
    pub path: PathBuf,
    pub error: vidmeta_av::Error,
}

/// Result of probing every discovered file.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Successfully probed files, in discovery order.
    pub records: Vec<VideoRecord>,
    /// Files that were skipped, in discovery order.
    pub failures: Vec<ProbeFailure>,
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub report_path: PathBuf,
    /// Data rows written to the report.
    pub written: usize,
    /// Files skipped because probing failed.
    pub failed: usize,
}

/// Probe each file in order, collecting records and failures.
pub fn collect_records<I>(prober: &dyn Prober, files: I) -> ScanOutcome
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut outcome = ScanOutcome::default();

    for path in files {
        tracing::debug!(file = %path.display(), "Working on file");

        match prober.probe(&path) {
            Ok(record) => outcome.records.push(record),
            Err(error) => {
                tracing::warn!(
                    file = %path.display(),
                    prober = prober.name(),
                    error = %error,
                    "Failed to probe file, skipping"
                );
                outcome.failures.push(ProbeFailure { path, error });
            }
        }
    }

    outcome
}

/// Run a full scan with `config` and write the report.
///
/// # Errors
///
/// Returns an error only if the report file cannot be written.
pub fn run(config: &Config, prober: &dyn Prober) -> Result<RunSummary> {
    let report_path = config.report_path();

    tracing::info!(
        roots = ?config.directories,
        extensions = ?config.extensions,
        "Starting scan"
    );

    let files = scanner::discover(&config.directories, &config.extensions);
    let outcome = collect_records(prober, files);

    report::write_report(&report_path, &outcome.records)?;

    tracing::info!(
        report = %report_path.display(),
        written = outcome.records.len(),
        failed = outcome.failures.len(),
        "Report written"
    );

    Ok(RunSummary {
        report_path,
        written: outcome.records.len(),
        failed: outcome.failures.len(),
    })
}
