// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git clone tool.
//!
//! ```text
//! GitTool::new().url(repo).path(dest).branch(b)
//!   dest exists  --> nothing (no update, no validation)
//!   otherwise    --> git clone [-b <branch>] <repo> <dest>
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;

/// Clones a repository unless the destination already exists.
///
/// # Example
///
/// ```ignore
/// let tool = GitTool::new()
///     .url("https://github.com/example/repo.git")
///     .path("./ThirdParty/repo")
///     .branch("stable");
/// tool.run(&ctx).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct GitTool {
    url: Option<String>,
    path: Option<PathBuf>,
    branch: Option<String>,
}

impl GitTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            url: None,
            path: None,
            branch: None,
        }
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Builds the clone invocation.
    fn clone_command(&self, ctx: &ToolContext, url: &str, path: &Path) -> ProcessBuilder {
        let mut builder = ProcessBuilder::new(&ctx.config().tools.git).arg("clone");
        if let Some(ref branch) = self.branch {
            builder = builder.arg("-b").arg(branch);
        }
        builder.arg(url).arg(path).inherit_stdio()
    }

    async fn do_clone(&self, ctx: &ToolContext) -> Result<()> {
        let url = self
            .url
            .as_ref()
            .context("GitTool: url is required for clone")?;
        let path = self
            .path
            .as_ref()
            .context("GitTool: path is required for clone")?;

        if path.exists() {
            debug!(path = %path.display(), "destination exists, skipping clone");
            return Ok(());
        }

        let builder = self.clone_command(ctx, url, path);

        if ctx.is_dry_run() {
            info!(cmd = %builder.command_line(), "[dry-run] Would clone repository");
            return Ok(());
        }

        builder
            .run()
            .await
            .with_context(|| format!("Failed to clone {url}"))?;

        info!(
            url = %url,
            path = %path.display(),
            "Repository cloned"
        );

        Ok(())
    }
}

impl Tool for GitTool {
    fn name(&self) -> &str {
        "git"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_clone(ctx))
    }
}
