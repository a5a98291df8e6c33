// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tools and workspace clients.
//!
//! ```text
//! cmd handler --> ToolContext --> Tool::run --> ProcessBuilder / Downloader
//!   GitTool        clone (skipped when the destination exists)
//!   FetchTool      download | tar | zip
//!   BuildTool      msbuild / xbuild <solution> <args>
//!   ConfigureTool  <python> bootstrap.py configure --platform <p>
//!
//! cmd handler --> ClientSettings --> NuGet / Protobuild
//!   exists | fetch | run -> RunOutcome | install/get/generate | clean
//! ```
//!
//! Every tool and client honours dry-run: it logs `[dry-run] Would ...` and
//! leaves processes, network and filesystem untouched.

use std::sync::Arc;

pub use futures_util::future::BoxFuture;

use crate::config::Config;
use crate::core::platform::Platform;
use crate::error::Result;

pub mod build;
pub mod client;
pub mod fetch;
pub mod git;
pub mod nuget;
pub mod protobuild;

/// Context provided to tools during execution.
#[derive(Clone)]
pub struct ToolContext {
    /// When true, tools log what they would do without making changes.
    dry_run: bool,

    /// Host platform used for tool selection.
    platform: Platform,

    config: Arc<Config>,
}

impl ToolContext {
    /// Creates a new `ToolContext` for the running host.
    #[must_use]
    pub fn new(config: Arc<Config>, dry_run: bool) -> Self {
        Self {
            dry_run,
            platform: Platform::current(),
            config,
        }
    }

    /// Overrides the detected host platform.
    #[must_use]
    pub const fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }
}

/// Trait for single-shot operations driven by the CLI.
///
/// Each tool encapsulates one external operation (git clone, a build, a
/// download). Tools respect `ctx.is_dry_run()` and only log in that mode.
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "git", "build", "fetch").
    fn name(&self) -> &str;

    /// Executes the tool's operation.
    ///
    /// A failing external process surfaces as a `ProcessError::NonZeroExit`
    /// somewhere in the error chain.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}
