//! fio invocation
//!
//! One benchmark run = one fio invocation against the freshly reloaded test
//! device. Runs are time-based (10 seconds) rather than size-based so every
//! job count gets the same wall-clock budget. The JSON report lands in the
//! sweep's working directory, named after the job count, and is kept as the
//! raw artifact for later replay.

pub mod report;

use crate::command::CommandRunner;
use crate::config::SweepConfig;
use crate::device::{DeviceConfig, DEVICE_PATH};
use crate::Result;
use report::FioReport;
use std::path::{Path, PathBuf};

/// Fixed benchmark duration in seconds
pub const RUNTIME_SECS: u32 = 10;

/// Spread jobs across CPUs instead of letting them share
const CPUS_ALLOWED_POLICY: &str = "split";

/// fio job name for a given job count
pub fn job_name(num_jobs: usize) -> String {
    format!("fio{}", num_jobs)
}

/// Report file path for a given job count
pub fn report_path(dir: &Path, num_jobs: usize) -> PathBuf {
    dir.join(format!("{}.json", job_name(num_jobs)))
}

/// Extract the job count from a report file name
///
/// Accepts exactly the names produced by [`report_path`]: `fio<digits>.json`.
pub fn num_jobs_from_report_name(name: &str) -> Option<usize> {
    name.strip_prefix("fio")?
        .strip_suffix(".json")?
        .parse()
        .ok()
}

/// Run one benchmark at `num_jobs` parallel jobs and load its report
///
/// Reconfigures the device first so every run starts from a fresh queue
/// topology. A non-zero fio exit aborts the sweep; there is nothing safe to
/// retry when the generator itself fails.
pub fn run_one(
    runner: &dyn CommandRunner,
    config: &SweepConfig,
    device: &DeviceConfig,
    dir: &Path,
    num_jobs: usize,
) -> Result<FioReport> {
    device.reload(runner)?;

    let output = report_path(dir, num_jobs);
    let args = vec![
        format!("--output={}", output.display()),
        "--output-format=json".to_string(),
        format!("--name={}", job_name(num_jobs)),
        format!("--filename={}", DEVICE_PATH),
        "--direct=1".to_string(),
        format!("--numjobs={}", num_jobs),
        format!("--cpus_allowed_policy={}", CPUS_ALLOWED_POLICY),
        format!("--runtime={}", RUNTIME_SECS),
        "--time_based".to_string(),
        format!("--ioengine={}", config.ioengine),
        format!("--iodepth={}", config.iodepth),
        format!("--rw={}", config.rw),
    ];
    runner.run("fio", &args)?;

    FioReport::from_file(&output)
}
