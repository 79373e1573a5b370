// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()  args, cwd, env, stdio
//!   |
//!   v
//! output().await   (no timeout, no cancellation)
//!   |
//!   v
//! mask secrets --> forward to log / keep in string
//!   |
//!   v
//! validate exit_code (skip if ALLOW_FAILURE)
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```

use std::fmt::Write as _;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, WikiResult};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string, secrets masked.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        self.mask(&cmd)
    }

    /// Spawns the process and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if:
    /// - Spawning the child process fails.
    /// - The process exits with a code outside the success set (and
    ///   `ALLOW_FAILURE` is not set). The error carries masked stderr.
    pub async fn run(self) -> WikiResult<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let output = command
            .output()
            .await
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        let stdout = self.mask(&String::from_utf8_lossy(&output.stdout));
        let stderr = self.mask(&String::from_utf8_lossy(&output.stderr));

        let succeeded = self.success_code_set().contains(&exit_code);
        let forward = !(succeeded
            && self
                .process_flags()
                .contains(ProcessFlags::IGNORE_OUTPUT_ON_SUCCESS));
        if forward {
            forward_lines(&name, "stdout", self.stdout_stream(), &stdout);
            forward_lines(&name, "stderr", self.stderr_stream(), &stderr);
        }

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !succeeded {
            if !stderr.is_empty() {
                error!(process = %name, stderr = %stderr.trim(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: exit_code,
                stderr: stderr.trim().to_string(),
            }
            .into());
        }

        trace!(process = %name, exit_code, "completed");
        Ok(ProcessOutput::new(
            exit_code,
            keep(self.stdout_stream(), stdout),
            keep(self.stderr_stream(), stderr),
        ))
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }
        command.envs(self.environment());

        command.stdin(Stdio::null());
        command.stdout(Self::stdio_from_flags(self.stdout_stream()));
        command.stderr(Self::stdio_from_flags(self.stderr_stream()));
        command.kill_on_drop(true);

        command
    }

    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::BIT_BUCKET) {
            Stdio::null()
        } else {
            Stdio::piped()
        }
    }
}

fn forward_lines(process: &str, stream: &str, flags: StreamFlags, text: &str) {
    if !flags.contains(StreamFlags::FORWARD_TO_LOG) {
        return;
    }
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        debug!(process, stream, "{line}");
    }
}

fn keep(flags: StreamFlags, text: String) -> String {
    if flags.contains(StreamFlags::KEEP_IN_STRING) {
        text
    } else {
        String::new()
    }
}
