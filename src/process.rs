//! Bounded subprocess execution for the external display control utility.
//!
//! Each invocation runs on a short-lived current-thread runtime so the caller
//! stays synchronous. When the timeout fires the child is killed.

use crate::error::ToolError;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::debug;

/// A program plus the timeout applied to every invocation of it.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: String,
    timeout: Duration,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run with `args`, capturing stdout. Stderr is passed through.
    pub fn output(&self, args: &[String]) -> Result<(ExitStatus, Vec<u8>), ToolError> {
        let mut cmd = self.command(args);
        cmd.stdout(Stdio::piped()).stderr(Stdio::inherit());
        let output = self.run(async move {
            match cmd.spawn() {
                Ok(child) => child
                    .wait_with_output()
                    .await
                    .map_err(|source| self.io_error(source)),
                Err(source) => Err(self.launch_error(source)),
            }
        })?;
        Ok((output.status, output.stdout))
    }

    /// Run with `args`, passing stdout and stderr through to the terminal.
    pub fn status(&self, args: &[String]) -> Result<ExitStatus, ToolError> {
        let mut cmd = self.command(args);
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        self.run(async move {
            match cmd.spawn() {
                Ok(mut child) => child.wait().await.map_err(|source| self.io_error(source)),
                Err(source) => Err(self.launch_error(source)),
            }
        })
    }

    fn command(&self, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).stdin(Stdio::null()).kill_on_drop(true);
        cmd
    }

    fn launch_error(&self, source: std::io::Error) -> ToolError {
        ToolError::Launch {
            program: self.program.clone(),
            source,
        }
    }

    fn io_error(&self, source: std::io::Error) -> ToolError {
        ToolError::Io {
            program: self.program.clone(),
            source,
        }
    }

    /// Any error from spawning is a launch failure; errors while waiting are I/O errors.
    fn run<T, F>(&self, fut: F) -> Result<T, ToolError>
    where
        F: std::future::Future<Output = Result<T, ToolError>>,
    {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| self.io_error(source))?;

        let started = Instant::now();
        let result = rt.block_on(async { tokio::time::timeout(self.timeout, fut).await });
        debug!(
            program = %self.program,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "External command finished"
        );

        match result {
            Ok(value) => value,
            Err(_) => Err(ToolError::Timeout {
                program: self.program.clone(),
                timeout: self.timeout,
            }),
        }
    }
}
