//! fio JSON report model
//!
//! Typed view of the fields this harness consumes from fio's
//! `--output-format=json` report. fio emits far more than this; unknown
//! fields are ignored by serde. The two top-level arrays are required, so a
//! truncated or non-fio document fails to deserialize instead of silently
//! aggregating to zeros.

use crate::Result;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One fio report, as written by a single benchmark run
#[derive(Debug, Clone, Deserialize)]
pub struct FioReport {
    /// One entry per job (worker)
    pub jobs: Vec<JobResult>,
    /// Device-level utilization, one entry per block device fio touched
    pub disk_util: Vec<DiskUtil>,
}

/// Per-job results
#[derive(Debug, Clone, Deserialize)]
pub struct JobResult {
    pub read: DirectionStats,
}

/// Per-direction throughput statistics
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionStats {
    /// Achieved I/O operations per second
    pub iops: f64,
}

/// Device utilization entry
#[derive(Debug, Clone, Deserialize)]
pub struct DiskUtil {
    /// Read requests merged at the block layer
    pub read_merges: u64,
}

impl FioReport {
    /// Load and parse a report file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read fio report: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse fio report: {}", path.display()))
    }
}
