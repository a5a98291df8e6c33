// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("xbuild")
//!   .args() .inherit_stdio()
//!   .run()
//!       --> tokio::process::Command
//!       --> Ok(ProcessOutput { exit_code, signal })
//!       --> Err(ProcessError::NonZeroExit { code }) on failure
//! ```

pub mod builder;
mod runner;
