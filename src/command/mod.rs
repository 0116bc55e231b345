//! External command invocation
//!
//! Every external process the harness runs (modprobe, fio) goes through the
//! `CommandRunner` trait. The production implementation spawns real
//! processes; tests substitute [`mock::MockRunner`] to exercise the
//! orchestration deterministically without kernel module access.

pub mod mock;

use crate::Result;
use anyhow::Context;
use std::process::{Command, Stdio};

/// Narrow seam for running external commands to completion
///
/// Implementations block until the child exits. A non-zero exit status is
/// an error; callers treat it as fatal and abort the sweep.
pub trait CommandRunner {
    /// Run `program` with `args`, waiting for it to finish
    fn run(&self, program: &str, args: &[String]) -> Result<()>;
}

/// Runner that spawns real processes
///
/// Child stdout is discarded (fio prints a progress summary there that
/// would interleave with the result rows); stderr is inherited so failures
/// stay visible.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .stdout(Stdio::null())
            .status()
            .with_context(|| format!("failed to execute '{}'", program))?;

        if !status.success() {
            anyhow::bail!("'{}' exited with {}", program, status);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_command() {
        let runner = SystemRunner;
        assert!(runner.run("true", &[]).is_ok());
    }

    #[test]
    fn test_nonzero_exit_is_error() {
        let runner = SystemRunner;
        let err = runner.run("false", &[]).unwrap_err();
        assert!(err.to_string().contains("'false' exited with"));
    }

    #[test]
    fn test_missing_program_is_error() {
        let runner = SystemRunner;
        let err = runner
            .run("nullblk-scale-no-such-binary", &[])
            .unwrap_err();
        assert!(err.to_string().contains("failed to execute"));
    }
}
