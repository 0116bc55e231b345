//! null_blk device configuration
//!
//! The test device is destroyed and recreated before every benchmark run so
//! that no queue state leaks between sweep points. Reload failures are
//! fatal: once a modprobe fails, the device state is unknown and the sweep
//! must not continue.

use crate::command::CommandRunner;
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

/// Block device node fio runs against
pub const DEVICE_PATH: &str = "/dev/nullb0";

/// Kernel module providing the test device
const MODULE: &str = "null_blk";

/// queue_mode=2 selects multi-queue
const QUEUE_MODE_MQ: u32 = 2;

const IOSTATS_PATH: &str = "/sys/block/nullb0/queue/iostats";

/// Desired null_blk topology for one benchmark run
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Number of hardware submission queues
    pub hw_queues: usize,
    /// Depth of each hardware queue
    pub queue_depth: usize,
    /// Write 0 to the iostats control file after load
    pub disable_iostats: bool,
    /// iostats control file; overridable so tests can use a scratch path
    pub iostats_path: PathBuf,
}

impl DeviceConfig {
    pub fn new(hw_queues: usize, queue_depth: usize, disable_iostats: bool) -> Self {
        Self {
            hw_queues,
            queue_depth,
            disable_iostats,
            iostats_path: PathBuf::from(IOSTATS_PATH),
        }
    }

    /// Recreate the device with this topology
    ///
    /// Unconditionally removes any existing instance of the module first,
    /// then loads it with the requested queue count and depth.
    pub fn reload(&self, runner: &dyn CommandRunner) -> Result<()> {
        runner.run("modprobe", &["-r".to_string(), MODULE.to_string()])?;
        runner.run(
            "modprobe",
            &[
                MODULE.to_string(),
                format!("queue_mode={}", QUEUE_MODE_MQ),
                format!("hw_queue_depth={}", self.queue_depth),
                format!("submit_queues={}", self.hw_queues),
            ],
        )?;

        if self.disable_iostats {
            fs::write(&self.iostats_path, "0\n").with_context(|| {
                format!("failed to disable iostats via {}", self.iostats_path.display())
            })?;
        }

        Ok(())
    }
}
