// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build and configure command implementation for cstools.

use std::sync::Arc;

use crate::cli::build::{BuildArgs, ConfigureArgs};
use crate::config::Config;
use crate::error::Result;
use crate::tools::build::{BuildTool, ConfigureTool};
use crate::tools::{Tool, ToolContext};

/// Main handler for build command.
///
/// # Errors
///
/// Returns the build driver's failure; its exit code becomes the process
/// exit code.
pub async fn run_build_command(args: &BuildArgs, config: &Config, dry_run: bool) -> Result<()> {
    let ctx = ToolContext::new(Arc::new(config.clone()), dry_run);
    let tool = BuildTool::new()
        .solution(&args.solution)
        .args(args.args.iter().cloned());
    tool.run(&ctx).await
}

/// Main handler for configure command.
///
/// # Errors
///
/// Returns an error if `bootstrap.py` cannot be started or fails.
pub async fn run_configure_command(
    args: &ConfigureArgs,
    config: &Config,
    dry_run: bool,
) -> Result<()> {
    let ctx = ToolContext::new(Arc::new(config.clone()), dry_run);
    let mut tool = ConfigureTool::new().project(&args.project);
    if let Some(ref platform) = args.platform {
        tool = tool.platform(platform);
    }
    tool.run(&ctx).await
}
