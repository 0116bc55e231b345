//! Sweep orchestration
//!
//! Live mode walks the configured job-count range in ascending order,
//! reconfiguring the device and running fio once per count, and streams one
//! statistics row per run. Replay mode re-derives the same rows from the
//! raw reports of an earlier sweep without touching the device, so a
//! statistics change can be applied retroactively to old captures.
//!
//! Directories are passed explicitly to every file operation; the process
//! working directory is never changed.

use crate::command::CommandRunner;
use crate::config::SweepConfig;
use crate::device::DeviceConfig;
use crate::fio::{self, report::FioReport};
use crate::{output, stats, util, Result};
use anyhow::Context;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Run metadata, written once at sweep start
#[derive(Serialize)]
struct RunInfo<'a> {
    /// Resolved configuration, echoed verbatim
    args: &'a SweepConfig,
    /// Sweep start time, local
    date: String,
    /// Host kernel release
    kernel_version: String,
}

/// Working directory name for a sweep starting at `now`
///
/// Local time at second precision, ISO-8601 field order.
fn working_dir_name(now: &DateTime<Local>) -> String {
    format!("null_blk_scale_{}", now.format("%Y-%m-%dT%H:%M:%S"))
}

/// Run a live sweep
///
/// Creates a fresh working directory under `base_dir`, writes the metadata
/// document, then benchmarks every job count from `min_jobs` to `max_jobs`
/// inclusive. The directory path and header go to `diag`; data rows go to
/// `out`, one per completed run, flushed immediately.
pub fn run<O: Write, D: Write>(
    config: &SweepConfig,
    runner: &dyn CommandRunner,
    base_dir: &Path,
    out: &mut O,
    diag: &mut D,
) -> Result<()> {
    let now = Local::now();
    let dir = base_dir.join(working_dir_name(&now));
    fs::create_dir(&dir)
        .with_context(|| format!("failed to create working directory {}", dir.display()))?;

    let absolute = fs::canonicalize(&dir)
        .with_context(|| format!("failed to resolve {}", dir.display()))?;
    writeln!(diag, "{}", absolute.display())?;
    diag.flush()?;

    let info = RunInfo {
        args: config,
        date: now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        kernel_version: util::kernel_release()?,
    };
    util::write_json_pretty(&dir.join("info.json"), &info)?;

    output::write_header(diag)?;

    let device = DeviceConfig::new(config.hw_queues, config.queue_depth, config.disable_iostats);
    for num_jobs in config.min_jobs..=config.max_jobs {
        let report = fio::run_one(runner, config, &device, &dir, num_jobs)?;
        let row = stats::aggregate(&report)?;
        output::write_row(out, &row)?;
    }

    Ok(())
}

/// Replay a saved sweep directory
///
/// Discovers report files named by the generator convention, orders them
/// numerically by the embedded job count (fio2 before fio10), and prints
/// the same rows a live sweep would have. Pure offline recomputation.
pub fn replay<O: Write, D: Write>(dir: &Path, out: &mut O, diag: &mut D) -> Result<()> {
    output::write_header(diag)?;

    let mut reports: Vec<(usize, PathBuf)> = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read result directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str() {
            if let Some(num_jobs) = fio::num_jobs_from_report_name(name) {
                reports.push((num_jobs, entry.path()));
            }
        }
    }
    reports.sort_by_key(|(num_jobs, _)| *num_jobs);

    for (_, path) in &reports {
        let report = FioReport::from_file(path)?;
        let row = stats::aggregate(&report)?;
        output::write_row(out, &row)?;
    }

    Ok(())
}
