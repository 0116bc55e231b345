//! nullblk-scale - blk-mq scalability benchmark harness
//!
//! nullblk-scale measures how block-layer multi-queue throughput scales with
//! the number of parallel fio jobs. It reloads the null_blk test device with
//! a requested queue topology before each run, drives fio against it once
//! per job count, and reduces each JSON report into a row of descriptive
//! statistics.
//!
//! # Architecture
//!
//! - **Sequential orchestration**: reconfigure device, run fio, aggregate,
//!   print, repeat - no two sweep points ever overlap
//! - **Replayable artifacts**: raw fio reports are kept per sweep so the
//!   statistics can be recomputed offline later
//! - **Narrow process seam**: all external commands go through the
//!   `CommandRunner` trait, so orchestration is testable without a kernel

pub mod command;
pub mod config;
pub mod device;
pub mod fio;
pub mod output;
pub mod stats;
pub mod sweep;
pub mod util;

// Re-export commonly used types
pub use config::{Mode, SweepConfig};
pub use stats::AggregateStats;

/// Result type used throughout nullblk-scale
pub type Result<T> = anyhow::Result<T>;
