// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Protobuild project-generator client.
//!
//! ```text
//! Protobuild::new(workspace, settings)   executable = workspace/Protobuild.exe
//!   run(args)            [mono] Protobuild.exe <args...>
//!   generate(platform)   run(-generate <platform>)
//!   clean(platform, exclude)
//!       run(-clean <platform>)     missing executable: logged, continue
//!       rm <ws>/*.speccache
//!       walk ws, prune exclude + .git
//!       obj/ bin/  --> "Removing: <path>", rm -r, not descended
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::client::{ClientSettings, RunOutcome, WorkspaceClient};
use crate::error::{CsResult, FsError};
use crate::utility::fs::delete::{delete_matching, find_matching};
use crate::utility::fs::walk::{WalkOptions, walk};

pub const EXECUTABLE: &str = "Protobuild.exe";

/// Directory names treated as build output.
const BUILD_OUTPUT_DIRS: [&str; 2] = ["obj", "bin"];

const SPEC_CACHE_PATTERN: &str = "*.speccache";

/// Protobuild client bound to one workspace.
#[derive(Debug, Clone)]
pub struct Protobuild {
    client: WorkspaceClient,
}

impl Protobuild {
    pub fn new(workspace: impl Into<PathBuf>, settings: ClientSettings) -> Self {
        Self {
            client: WorkspaceClient::new(workspace, EXECUTABLE, settings),
        }
    }

    #[must_use]
    pub fn workspace(&self) -> &Path {
        self.client.workspace()
    }

    #[must_use]
    pub fn executable(&self) -> &Path {
        self.client.executable()
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.client.exists()
    }

    /// Downloads `Protobuild.exe` into the workspace.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the download fails.
    pub async fn fetch(&self) -> CsResult<()> {
        self.client.fetch().await
    }

    /// Runs `Protobuild.exe <args...>`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the process fails. A missing executable is
    /// reported as [`RunOutcome::MissingExecutable`].
    pub async fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> CsResult<RunOutcome> {
        self.client.run(args).await
    }

    fn platform_or_host<'a>(&self, platform: Option<&'a str>) -> &'a str {
        platform.unwrap_or_else(|| self.client.settings().platform().label())
    }

    /// Generates project files for `platform` (defaults to the host label).
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if Protobuild fails.
    pub async fn generate(&self, platform: Option<&str>) -> CsResult<RunOutcome> {
        let platform = self.platform_or_host(platform);
        self.run(&["-generate", platform]).await
    }

    /// Cleans generated state and build output from the workspace.
    ///
    /// `exclude` holds directory *names* that are never descended into;
    /// `.git` is always excluded. Returns the removed `obj`/`bin`
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns an error if Protobuild fails or a removal fails.
    pub async fn clean(&self, platform: Option<&str>, exclude: &[String]) -> CsResult<Vec<PathBuf>> {
        let platform = self.platform_or_host(platform);
        let outcome = self.run(&["-clean", platform]).await?;
        if outcome.is_missing() {
            debug!("continuing clean without Protobuild");
        }

        let dry_run = self.client.settings().is_dry_run();

        if dry_run {
            for cache in find_matching(self.workspace(), SPEC_CACHE_PATTERN)? {
                info!(path = %cache.display(), "[dry-run] Would remove");
            }
        } else {
            delete_matching(self.workspace(), SPEC_CACHE_PATTERN)?;
        }

        let mut skip_dirs = exclude.to_vec();
        if !skip_dirs.iter().any(|name| name == ".git") {
            skip_dirs.push(".git".to_string());
        }
        let options = WalkOptions::builder()
            .with_skip_dirs(skip_dirs)
            .with_no_descend(BUILD_OUTPUT_DIRS.iter().map(ToString::to_string).collect())
            .build();

        let output_dirs: Vec<PathBuf> = walk(self.workspace(), &options)
            .directories()
            .iter()
            .filter(|dir| {
                dir.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| BUILD_OUTPUT_DIRS.contains(&name))
            })
            .cloned()
            .collect();

        for dir in &output_dirs {
            if dry_run {
                info!(path = %dir.display(), "[dry-run] Would remove");
                continue;
            }
            info!("Removing: {}", dir.display());
            std::fs::remove_dir_all(dir).map_err(|source| FsError::IoError {
                path: dir.display().to_string(),
                source,
            })?;
        }

        Ok(output_dirs)
    }
}

#[cfg(test)]
mod tests;
