// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//!   run()
//!     build_command()     args, stdio per OutputMode
//!     spawn()             kill_on_drop
//!     wait_with_output()
//!     forward piped lines to the log
//!     signal    --> ProcessError::Signaled      \  skipped with
//!     code != 0 --> ProcessError::NonZeroExit   /  ALLOW_FAILURE
//!     ProcessOutput { exit_code, signal }
//! ```

use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{OutputMode, ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::{CsResult, ProcessError};

impl ProcessBuilder {
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

    /// Returns the full command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and waits for it to exit.
    ///
    /// The caller decides what a failure means; the binary terminates with
    /// the exit code carried by [`ProcessError::NonZeroExit`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exits non-zero or is killed by a signal, unless the
    ///   `ALLOW_FAILURE` flag is set.
    pub async fn run(self) -> CsResult<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();
        debug!(cmd = %cmd_line, "exec");

        let child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line,
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| ProcessError::WaitFailed {
                command: name.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if self.output_mode() == OutputMode::ForwardToLog {
            forward_to_log(&name, "stdout", &String::from_utf8_lossy(&output.stdout));
            forward_to_log(&name, "stderr", &stderr);
        }

        let signal = exit_signal(output.status);
        let exit_code = output.status.code().unwrap_or(-1);

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) {
            if let Some(signal) = signal {
                return Err(ProcessError::Signaled {
                    command: name,
                    signal,
                }
                .into());
            }
            if exit_code != 0 {
                if !stderr.trim().is_empty() {
                    error!(process = %name, stderr = %stderr.trim_end(), "process error output");
                }
                return Err(ProcessError::NonZeroExit {
                    command: name,
                    code: exit_code,
                }
                .into());
            }
        }

        trace!(process = %name, exit_code, "completed");
        Ok(ProcessOutput::new(exit_code, signal))
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        match self.output_mode() {
            OutputMode::Inherit => {
                command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
            OutputMode::ForwardToLog => {
                command
                    .stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped());
            }
        }

        command.kill_on_drop(true);
        command
    }
}

fn forward_to_log(name: &str, stream: &str, content: &str) {
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        debug!(process = %name, stream, "{line}");
    }
}

#[cfg(unix)]
fn exit_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
const fn exit_signal(_status: ExitStatus) -> Option<i32> {
    None
}
