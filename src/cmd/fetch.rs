// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clone, download, extract and delete commands.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::cli::fetch::{CloneArgs, DeleteArgs, FetchArgs, TarArgs, ZipArgs};
use crate::config::Config;
use crate::error::Result;
use crate::net::file_name_from_url;
use crate::tools::fetch::FetchTool;
use crate::tools::git::GitTool;
use crate::tools::{Tool, ToolContext};
use crate::utility::fs::delete::{delete_matching, find_matching};

fn context(config: &Config, dry_run: bool) -> ToolContext {
    ToolContext::new(Arc::new(config.clone()), dry_run)
}

/// Handler for `clone`.
///
/// # Errors
///
/// Returns an error if git fails.
pub async fn run_clone_command(args: &CloneArgs, config: &Config, dry_run: bool) -> Result<()> {
    let mut tool = GitTool::new().url(&args.repo).path(&args.path);
    if let Some(ref branch) = args.branch {
        tool = tool.branch(branch);
    }
    tool.run(&context(config, dry_run)).await
}

/// Handler for `fetch`.
///
/// # Errors
///
/// Returns an error if the download fails.
pub async fn run_fetch_command(args: &FetchArgs, config: &Config, dry_run: bool) -> Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(file_name_from_url(&args.url)));
    FetchTool::new()
        .url(&args.url)
        .download_op(output)
        .run(&context(config, dry_run))
        .await
}

/// Handler for `tar`.
///
/// # Errors
///
/// Returns an error if the download or extraction fails.
pub async fn run_tar_command(args: &TarArgs, config: &Config, dry_run: bool) -> Result<()> {
    FetchTool::new()
        .url(&args.url)
        .tar_op(&args.dest)
        .run(&context(config, dry_run))
        .await
}

/// Handler for `zip`.
///
/// # Errors
///
/// Returns an error if the download or extraction fails.
pub async fn run_zip_command(args: &ZipArgs, config: &Config, dry_run: bool) -> Result<()> {
    let mut tool = FetchTool::new().url(&args.url).zip_op(&args.dest);
    if args.check_paths {
        tool = tool.check_paths(true);
    }
    tool.run(&context(config, dry_run)).await
}

/// Handler for `delete`.
///
/// # Errors
///
/// Returns an error if the pattern is invalid or a removal fails.
pub fn run_delete_command(args: &DeleteArgs, dry_run: bool) -> Result<()> {
    if dry_run {
        for path in find_matching(&args.root, &args.pattern)? {
            info!(path = %path.display(), "[dry-run] Would remove");
        }
        return Ok(());
    }

    let removed = delete_matching(&args.root, &args.pattern)?;
    info!(count = removed.len(), pattern = %args.pattern, "Deleted");
    Ok(())
}
