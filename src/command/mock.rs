//! Mock command runner for testing
//!
//! This module provides a mock implementation of the `CommandRunner` trait
//! so orchestration logic can be tested without loading kernel modules or
//! running fio. The mock records every invocation, can be configured to
//! fail a given program, and synthesizes report files for fio invocations.
//!
//! # Example
//!
//! ```
//! use nullblk_scale::command::{CommandRunner, mock::MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.run("modprobe", &["-r".to_string(), "null_blk".to_string()]).unwrap();
//!
//! let calls = runner.invocations();
//! assert_eq!(calls.len(), 1);
//! assert_eq!(calls[0].program, "modprobe");
//! ```

use super::CommandRunner;
use crate::Result;
use anyhow::Context;
use std::collections::HashMap;
use std::fs;
use std::sync::Mutex;

/// Record of one command invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

/// Mock command runner
///
/// By default every command succeeds and has no effect beyond being
/// recorded. Registering a report body with [`add_fio_report`] makes the
/// mock write it to the `--output=` path whenever fio is invoked with the
/// matching `--numjobs=` value, mimicking the generator's one-report-per-run
/// contract.
///
/// [`add_fio_report`]: MockRunner::add_fio_report
pub struct MockRunner {
    /// All invocations in order
    invocations: Mutex<Vec<Invocation>>,

    /// Program name that should fail, if any
    fail_program: Mutex<Option<String>>,

    /// Canned fio report bodies keyed by job count
    fio_reports: Mutex<HashMap<usize, String>>,
}

impl MockRunner {
    /// Create a new mock runner where every command succeeds
    pub fn new() -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            fail_program: Mutex::new(None),
            fio_reports: Mutex::new(HashMap::new()),
        }
    }

    /// Make every invocation of `program` fail with a non-zero-exit error
    pub fn set_fail_program(&self, program: &str) {
        *self.fail_program.lock().unwrap() = Some(program.to_string());
    }

    /// Register the report body fio should "produce" for `num_jobs`
    pub fn add_fio_report(&self, num_jobs: usize, body: &str) {
        self.fio_reports
            .lock()
            .unwrap()
            .insert(num_jobs, body.to_string());
    }

    /// All recorded invocations, in submission order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    fn arg_value(args: &[String], key: &str) -> Option<String> {
        args.iter()
            .find_map(|arg| arg.strip_prefix(key).map(|v| v.to_string()))
    }

    fn write_fio_report(&self, args: &[String]) -> Result<()> {
        let output = Self::arg_value(args, "--output=")
            .context("mock fio invocation has no --output= argument")?;
        let num_jobs: usize = Self::arg_value(args, "--numjobs=")
            .context("mock fio invocation has no --numjobs= argument")?
            .parse()
            .context("mock fio --numjobs= is not an integer")?;

        let reports = self.fio_reports.lock().unwrap();
        let body = reports
            .get(&num_jobs)
            .with_context(|| format!("no mock fio report registered for {} jobs", num_jobs))?;
        fs::write(&output, body)
            .with_context(|| format!("failed to write mock fio report to {}", output))?;

        Ok(())
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        self.invocations.lock().unwrap().push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
        });

        if self.fail_program.lock().unwrap().as_deref() == Some(program) {
            anyhow::bail!("'{}' exited with exit status: 1", program);
        }

        if program == "fio" {
            self.write_fio_report(args)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_invocations_in_order() {
        let runner = MockRunner::new();
        runner.run("modprobe", &["-r".to_string(), "null_blk".to_string()]).unwrap();
        runner.run("modprobe", &["null_blk".to_string()]).unwrap();

        let calls = runner.invocations();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].args, vec!["-r", "null_blk"]);
        assert_eq!(calls[1].args, vec!["null_blk"]);
    }

    #[test]
    fn test_fail_program() {
        let runner = MockRunner::new();
        runner.set_fail_program("modprobe");

        assert!(runner.run("modprobe", &[]).is_err());
        // Other programs are unaffected, and the failure is still recorded
        assert_eq!(runner.invocations().len(), 1);
    }

    #[test]
    fn test_fio_writes_registered_report() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("fio2.json");

        let runner = MockRunner::new();
        runner.add_fio_report(2, r#"{"jobs": [], "disk_util": []}"#);
        runner
            .run(
                "fio",
                &[
                    format!("--output={}", output.display()),
                    "--numjobs=2".to_string(),
                ],
            )
            .unwrap();

        let body = fs::read_to_string(&output).unwrap();
        assert!(body.contains("disk_util"));
    }

    #[test]
    fn test_fio_without_registered_report_is_error() {
        let runner = MockRunner::new();
        let err = runner
            .run(
                "fio",
                &["--output=/tmp/fio9.json".to_string(), "--numjobs=9".to_string()],
            )
            .unwrap_err();
        assert!(err.to_string().contains("no mock fio report"));
    }
}
