// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder.
//!
//! ```text
//! ProcessBuilder::new(program)
//!   .arg/.args/.name
//!   .flag(ProcessFlags::ALLOW_FAILURE)
//!   .inherit_stdio()       default: piped, lines forwarded to the log
//! ```

use bitflags::bitflags;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

bitflags! {
    /// Flags controlling process execution behavior.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// Don't fail if the process exits with a non-zero status or a signal
        const ALLOW_FAILURE = 0x01;
    }
}

/// Where the child's stdout and stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Piped and forwarded to the log line by line at debug level.
    #[default]
    ForwardToLog,
    /// Shared with the parent, stdin included.
    Inherit,
}

/// How a process ended when it was allowed to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutput {
    exit_code: i32,
    signal: Option<i32>,
}

impl ProcessOutput {
    pub(super) const fn new(exit_code: i32, signal: Option<i32>) -> Self {
        Self { exit_code, signal }
    }

    /// Exit code, or -1 when killed by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub const fn signal(&self) -> Option<i32> {
        self.signal
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0 && self.signal.is_none()
    }
}

/// Builder for an external tool invocation.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    flags: ProcessFlags,
    output: OutputMode,
    /// Display name for logging and errors
    name: Option<String>,
}

impl ProcessBuilder {
    /// A bare program name is resolved via PATH at spawn time.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            flags: ProcessFlags::empty(),
            output: OutputMode::default(),
            name: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
        self
    }

    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Gives the child the terminal (nuget credential prompts, build output).
    #[must_use]
    pub const fn inherit_stdio(mut self) -> Self {
        self.output = OutputMode::Inherit;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    #[must_use]
    pub fn args_slice(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        self.output
    }

    pub(super) const fn process_flags(&self) -> ProcessFlags {
        self.flags
    }

    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
