//! Report aggregation
//!
//! Reduces one fio report into one row of descriptive statistics. The
//! reduction is pure: no side effects, deterministic for a given report,
//! and identical whether the report was just produced by a live run or
//! loaded back from disk during replay.

use crate::fio::report::FioReport;
use crate::Result;

/// Aggregate statistics for one job count
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    /// Number of jobs in the report
    pub num_jobs: usize,
    /// Sum of per-job read IOPS
    pub total_iops: f64,
    /// Slowest job
    pub min_iops: f64,
    /// Fastest job
    pub max_iops: f64,
    /// Mean per-job read IOPS
    pub mean_iops: f64,
    /// Sample standard deviation of per-job read IOPS; 0 for a single job
    pub iops_stdev: f64,
    /// Read merges summed over every disk_util entry in the report
    pub merges: u64,
}

/// Reduce one report to its aggregate statistics
///
/// A report with no job entries is malformed and rejected; everything else
/// fio might legitimately produce (including an empty disk_util array)
/// aggregates cleanly.
pub fn aggregate(report: &FioReport) -> Result<AggregateStats> {
    let iops: Vec<f64> = report.jobs.iter().map(|job| job.read.iops).collect();
    if iops.is_empty() {
        anyhow::bail!("fio report contains no jobs");
    }

    let merges = report.disk_util.iter().map(|disk| disk.read_merges).sum();

    let total_iops: f64 = iops.iter().sum();
    let min_iops = iops.iter().copied().fold(f64::INFINITY, f64::min);
    let max_iops = iops.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean_iops = total_iops / iops.len() as f64;

    Ok(AggregateStats {
        num_jobs: iops.len(),
        total_iops,
        min_iops,
        max_iops,
        mean_iops,
        iops_stdev: sample_stdev(&iops, mean_iops),
        merges,
    })
}

/// Sample standard deviation
///
/// Defined as 0 for fewer than two samples; a single-sample deviation must
/// not surface as an error or NaN.
fn sample_stdev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let variance = values
        .iter()
        .map(|value| {
            let delta = value - mean;
            delta * delta
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}
