//! CLI argument parsing using clap

use crate::config::{Mode, SweepConfig};
use clap::Parser;
use std::path::PathBuf;

/// nullblk-scale - test blk-mq scalability with null_blk
#[derive(Parser, Debug)]
#[command(name = "nullblk-scale")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Parse a saved result directory instead of running; all other options
    /// will be ignored
    #[arg(long, value_name = "PATH")]
    pub parse: Option<PathBuf>,

    // === Sweep Options ===
    /// Minimum number of jobs to run in parallel
    #[arg(short = 'm', long, default_value = "1")]
    pub min_jobs: usize,

    /// Maximum number of jobs to run in parallel [default: CPU count]
    #[arg(short = 'M', long)]
    pub max_jobs: Option<usize>,

    // === null_blk Parameters ===
    /// Number of null_blk hardware queues to use [default: CPU count]
    #[arg(short = 'q', long)]
    pub hw_queues: Option<usize>,

    /// Depth of null_blk hardware queues
    #[arg(short = 'd', long, default_value = "64")]
    pub queue_depth: usize,

    /// Disable iostats collection on the device
    #[arg(long)]
    pub disable_iostats: bool,

    // === fio Parameters ===
    /// I/O engine
    #[arg(long, default_value = "libaio")]
    pub ioengine: String,

    /// I/O depth
    #[arg(long, default_value = "64")]
    pub iodepth: usize,

    /// I/O pattern
    #[arg(long, default_value = "randread")]
    pub rw: String,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    ///
    /// Runs before any device or process action so that invalid input never
    /// has side effects.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.min_jobs == 0 {
            anyhow::bail!("min_jobs must be at least 1");
        }
        if self.max_jobs == Some(0) {
            anyhow::bail!("max_jobs must be at least 1");
        }
        if self.hw_queues == Some(0) {
            anyhow::bail!("hw_queues must be at least 1");
        }
        if self.queue_depth == 0 {
            anyhow::bail!("queue_depth must be at least 1");
        }
        if self.iodepth == 0 {
            anyhow::bail!("iodepth must be at least 1");
        }

        Ok(())
    }

    /// Resolve the replay-vs-live branch into a mode
    ///
    /// CPU-count defaults are filled in here so the resulting configuration
    /// is complete and can be echoed into the run metadata as-is.
    pub fn into_mode(self) -> Mode {
        if let Some(dir) = self.parse {
            return Mode::Replay(dir);
        }

        Mode::Live(SweepConfig {
            min_jobs: self.min_jobs,
            max_jobs: self.max_jobs.unwrap_or_else(num_cpus::get),
            hw_queues: self.hw_queues.unwrap_or_else(num_cpus::get),
            queue_depth: self.queue_depth,
            disable_iostats: self.disable_iostats,
            ioengine: self.ioengine,
            iodepth: self.iodepth,
            rw: self.rw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("nullblk-scale").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.min_jobs, 1);
        assert_eq!(cli.max_jobs, None);
        assert_eq!(cli.queue_depth, 64);
        assert_eq!(cli.ioengine, "libaio");
        assert_eq!(cli.iodepth, 64);
        assert_eq!(cli.rw, "randread");
        assert!(!cli.disable_iostats);
        assert!(cli.parse.is_none());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(parse(&[]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_queue_depth() {
        let cli = parse(&["--queue-depth", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_jobs_and_queues() {
        assert!(parse(&["-m", "0"]).validate().is_err());
        assert!(parse(&["-M", "0"]).validate().is_err());
        assert!(parse(&["-q", "0"]).validate().is_err());
        assert!(parse(&["--iodepth", "0"]).validate().is_err());
    }

    #[test]
    fn test_into_mode_replay() {
        let cli = parse(&["--parse", "/tmp/null_blk_scale_old"]);
        match cli.into_mode() {
            Mode::Replay(dir) => assert_eq!(dir, PathBuf::from("/tmp/null_blk_scale_old")),
            Mode::Live(_) => panic!("expected replay mode"),
        }
    }

    #[test]
    fn test_into_mode_live_fills_cpu_defaults() {
        let cli = parse(&["-m", "2", "-d", "32", "--rw", "randwrite"]);
        match cli.into_mode() {
            Mode::Live(config) => {
                assert_eq!(config.min_jobs, 2);
                assert_eq!(config.max_jobs, num_cpus::get());
                assert_eq!(config.hw_queues, num_cpus::get());
                assert_eq!(config.queue_depth, 32);
                assert_eq!(config.rw, "randwrite");
            }
            Mode::Replay(_) => panic!("expected live mode"),
        }
    }

    #[test]
    fn test_explicit_queue_topology() {
        let cli = parse(&["-q", "4", "-M", "8", "--disable-iostats"]);
        match cli.into_mode() {
            Mode::Live(config) => {
                assert_eq!(config.hw_queues, 4);
                assert_eq!(config.max_jobs, 8);
                assert!(config.disable_iostats);
            }
            Mode::Replay(_) => panic!("expected live mode"),
        }
    }
}
