// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Solution build and project configure tools.
//!
//! ```text
//! BuildTool      tools.msbuild (Windows) | tools.xbuild (elsewhere)
//!                  <solution> <args...>
//! ConfigureTool  <python> <project>/bootstrap.py configure --platform <p>
//!                  <p> defaults to the host label
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;

/// Script every configurable project carries at its root.
pub const BOOTSTRAP_SCRIPT: &str = "bootstrap.py";

/// Builds a solution with the platform's build driver.
#[derive(Debug, Clone, Default)]
pub struct BuildTool {
    solution: Option<PathBuf>,
    args: Vec<String>,
}

impl BuildTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            solution: None,
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn solution(mut self, path: impl AsRef<Path>) -> Self {
        self.solution = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub(crate) fn command(&self, ctx: &ToolContext) -> Result<ProcessBuilder> {
        let solution = self
            .solution
            .as_ref()
            .context("BuildTool: solution is required")?;
        let driver = ctx.config().tools.build_tool_for(ctx.platform());
        Ok(ProcessBuilder::new(driver)
            .arg(solution)
            .args(&self.args)
            .inherit_stdio())
    }

    async fn do_build(&self, ctx: &ToolContext) -> Result<()> {
        let builder = self.command(ctx)?;

        if ctx.is_dry_run() {
            info!(cmd = %builder.command_line(), "[dry-run] Would build");
            return Ok(());
        }

        builder.run().await?;

        info!(
            solution = ?self.solution,
            "Build complete"
        );
        Ok(())
    }
}

impl Tool for BuildTool {
    fn name(&self) -> &str {
        "build"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_build(ctx))
    }
}

/// Runs a project's `bootstrap.py configure` step.
#[derive(Debug, Clone, Default)]
pub struct ConfigureTool {
    project: Option<PathBuf>,
    platform: Option<String>,
}

impl ConfigureTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            project: None,
            platform: None,
        }
    }

    #[must_use]
    pub fn project(mut self, path: impl AsRef<Path>) -> Self {
        self.project = Some(path.as_ref().to_path_buf());
        self
    }

    /// Target platform label; the host label when unset.
    #[must_use]
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub(crate) fn command(&self, ctx: &ToolContext) -> Result<ProcessBuilder> {
        let project = self
            .project
            .as_ref()
            .context("ConfigureTool: project is required")?;
        let platform = self
            .platform
            .as_deref()
            .unwrap_or_else(|| ctx.platform().label());
        let python = ctx.config().tools.python_for(ctx.platform());

        Ok(ProcessBuilder::new(python)
            .arg(project.join(BOOTSTRAP_SCRIPT))
            .arg("configure")
            .arg("--platform")
            .arg(platform)
            .inherit_stdio())
    }

    async fn do_configure(&self, ctx: &ToolContext) -> Result<()> {
        let builder = self.command(ctx)?;

        if ctx.is_dry_run() {
            info!(cmd = %builder.command_line(), "[dry-run] Would configure");
            return Ok(());
        }

        builder.run().await?;
        info!(project = ?self.project, "Configured");
        Ok(())
    }
}

impl Tool for ConfigureTool {
    fn name(&self) -> &str {
        "configure"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_configure(ctx))
    }
}
