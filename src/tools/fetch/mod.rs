// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Download and download-then-extract tool.
//!
//! ```text
//! FetchTool::new().url(u)
//!   .download_op(file)  --> Downloader --> file
//!   .tar_op(dest)       --> tempdir/<basename> --> ArchiveExtractor::tar --> dest
//!   .zip_op(dest)       --> tempdir/<basename> --> ArchiveExtractor::zip --> dest
//!                           (tempdir removed afterwards, success or not)
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool, ToolContext};
use crate::net::{Downloader, file_name_from_url};
use crate::utility::archive::{ArchiveExtractor, ArchiveFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchOperation {
    #[default]
    Download,
    Tar,
    Zip,
}

#[derive(Debug, Clone, Default)]
pub struct FetchTool {
    url: Option<String>,
    target: Option<PathBuf>,
    check_paths: Option<bool>,
    silent: bool,
    operation: FetchOperation,
}

impl FetchTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            url: None,
            target: None,
            check_paths: None,
            silent: false,
            operation: FetchOperation::Download,
        }
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Download `url` to `file`.
    #[must_use]
    pub fn download_op(mut self, file: impl AsRef<Path>) -> Self {
        self.target = Some(file.as_ref().to_path_buf());
        self.operation = FetchOperation::Download;
        self
    }

    /// Download a tarball and extract it into `dest`.
    #[must_use]
    pub fn tar_op(mut self, dest: impl AsRef<Path>) -> Self {
        self.target = Some(dest.as_ref().to_path_buf());
        self.operation = FetchOperation::Tar;
        self
    }

    /// Download a zip archive and extract it into `dest`.
    #[must_use]
    pub fn zip_op(mut self, dest: impl AsRef<Path>) -> Self {
        self.target = Some(dest.as_ref().to_path_buf());
        self.operation = FetchOperation::Zip;
        self
    }

    /// Overrides the format's default member path check.
    #[must_use]
    pub const fn check_paths(mut self, enabled: bool) -> Self {
        self.check_paths = Some(enabled);
        self
    }

    /// Hides the progress bar.
    #[must_use]
    pub const fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    #[must_use]
    pub const fn operation(&self) -> FetchOperation {
        self.operation
    }

    fn url_required(&self) -> Result<&str> {
        self.url.as_deref().context("FetchTool: url is required")
    }

    fn target_required(&self) -> Result<&Path> {
        self.target
            .as_deref()
            .context("FetchTool: output path is required")
    }

    fn downloader(&self, url: &str, file: &Path) -> Downloader {
        let downloader = Downloader::new().url(url).file(file);
        if self.silent {
            downloader.silent()
        } else {
            downloader
        }
    }

    async fn do_download(&self, ctx: &ToolContext) -> Result<()> {
        let url = self.url_required()?;
        let file = self.target_required()?;

        if ctx.is_dry_run() {
            info!(url = %url, file = %file.display(), "[dry-run] Would download");
            return Ok(());
        }

        self.downloader(url, file)
            .download()
            .await
            .with_context(|| format!("Failed to download {url}"))?;
        Ok(())
    }

    async fn do_extract(&self, ctx: &ToolContext, format: ArchiveFormat) -> Result<()> {
        let url = self.url_required()?;
        let dest = self.target_required()?;
        let check = self
            .check_paths
            .unwrap_or_else(|| format.checks_traversal_by_default());

        if ctx.is_dry_run() {
            info!(
                url = %url,
                dest = %dest.display(),
                format = ?format,
                check_paths = check,
                "[dry-run] Would download and extract"
            );
            return Ok(());
        }

        let scratch = tempfile::tempdir().context("Failed to create temporary directory")?;
        let archive = scratch.path().join(file_name_from_url(url));

        self.downloader(url, &archive)
            .download()
            .await
            .with_context(|| format!("Failed to download {url}"))?;

        let extractor =
            ArchiveExtractor::new(archive, dest.to_path_buf(), format).traversal_check(check);
        let count = tokio::task::spawn_blocking(move || extractor.extract())
            .await
            .context("Extraction task panicked")?
            .with_context(|| format!("Failed to extract {url}"))?;

        debug!(members = count, "extracted");
        info!(url = %url, dest = %dest.display(), "Archive extracted");

        // Dropping `scratch` deletes the downloaded archive.
        Ok(())
    }
}

impl Tool for FetchTool {
    fn name(&self) -> &str {
        "fetch"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            match self.operation {
                FetchOperation::Download => self.do_download(ctx).await,
                FetchOperation::Tar => self.do_extract(ctx, ArchiveFormat::Tar).await,
                FetchOperation::Zip => self.do_extract(ctx, ArchiveFormat::Zip).await,
            }
        })
    }
}
