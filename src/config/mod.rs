//! Configuration module
//!
//! Handles CLI argument parsing, validation, and resolution into the sweep
//! configuration.

pub mod cli;

use serde::Serialize;
use std::path::PathBuf;

/// Resolved execution mode, chosen once at startup
#[derive(Debug, Clone)]
pub enum Mode {
    /// Run a live sweep against the test device
    Live(SweepConfig),
    /// Re-derive statistics from a previously saved sweep directory
    Replay(PathBuf),
}

/// Complete sweep configuration
///
/// Built once from CLI input and never mutated. Serialized verbatim into
/// the run metadata document under `args`.
#[derive(Debug, Clone, Serialize)]
pub struct SweepConfig {
    /// Minimum number of fio jobs to run in parallel
    pub min_jobs: usize,
    /// Maximum number of fio jobs to run in parallel
    pub max_jobs: usize,
    /// Number of null_blk hardware queues
    pub hw_queues: usize,
    /// Depth of each null_blk hardware queue
    pub queue_depth: usize,
    /// Disable iostats collection on the device after load
    pub disable_iostats: bool,
    /// fio I/O engine
    pub ioengine: String,
    /// fio I/O depth
    pub iodepth: usize,
    /// fio I/O pattern
    pub rw: String,
}
