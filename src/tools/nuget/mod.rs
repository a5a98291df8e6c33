// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! NuGet package client.
//!
//! ```text
//! NuGet::new(workspace, settings)     executable = workspace/nuget.exe
//!   run(cmd, args)  [mono] nuget.exe <cmd> -OutputDirectory <ws>/packages <args...>
//!   install(platform, args, exclude)
//!       walk ws, prune excluded paths
//!       packages.config | packages.<platform>.config --> run("install", args + config)
//!   get(package, version)  run("install", [package, -version v])
//!   clean()                rm -r <ws>/packages
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::client::{ClientSettings, RunOutcome, WorkspaceClient};
use crate::error::CsResult;
use crate::utility::fs::delete::{delete_matching, find_matching};
use crate::utility::fs::walk::{WalkOptions, walk};

pub const EXECUTABLE: &str = "nuget.exe";
pub const PACKAGES_DIR: &str = "packages";

/// NuGet client bound to one workspace.
#[derive(Debug, Clone)]
pub struct NuGet {
    client: WorkspaceClient,
}

impl NuGet {
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

    /// Directory packages are installed into.
    #[must_use]
    pub fn packages_dir(&self) -> PathBuf {
        self.workspace().join(PACKAGES_DIR)
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.client.exists()
    }

    /// Downloads `nuget.exe` into the workspace.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the download fails.
    pub async fn fetch(&self) -> CsResult<()> {
        self.client.fetch().await
    }

    /// Runs `nuget.exe <command> -OutputDirectory <workspace>/packages <args...>`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the process fails. A missing executable is
    /// reported as [`RunOutcome::MissingExecutable`].
    pub async fn run<S: AsRef<std::ffi::OsStr>>(
        &self,
        command: &str,
        args: &[S],
    ) -> CsResult<RunOutcome> {
        let mut full: Vec<OsString> = Vec::with_capacity(args.len() + 3);
        full.push(command.into());
        full.push("-OutputDirectory".into());
        full.push(self.packages_dir().into_os_string());
        full.extend(args.iter().map(|a| a.as_ref().to_os_string()));
        self.client.run(full).await
    }

    /// Finds the package configs `install` would use, in walk order.
    ///
    /// Matches `packages.config` and `packages.<platform>.config`. Directories
    /// whose full path is listed in `exclude` are not descended into. A
    /// missing workspace has no configs.
    #[must_use]
    pub fn package_configs(&self, platform: &str, exclude: &[PathBuf]) -> Vec<PathBuf> {
        let platform_config = format!("packages.{platform}.config");
        let options = WalkOptions::builder()
            .with_skip_paths(exclude.to_vec())
            .build();

        walk(self.workspace(), &options)
            .files()
            .iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| name == "packages.config" || name == platform_config)
            })
            .cloned()
            .collect()
    }

    /// Runs one `install` per package config found in the workspace, with
    /// the config path appended to `args`.
    ///
    /// `platform` defaults to the host label. Returns one outcome per config.
    ///
    /// # Errors
    ///
    /// Stops at the first failing invocation and returns its error.
    pub async fn install(
        &self,
        platform: Option<&str>,
        args: &[String],
        exclude: &[PathBuf],
    ) -> CsResult<Vec<RunOutcome>> {
        let platform = platform.unwrap_or_else(|| self.client.settings().platform().label());
        let configs = self.package_configs(platform, exclude);
        if configs.is_empty() {
            debug!(workspace = %self.workspace().display(), "no package configs found");
        }

        let mut outcomes = Vec::with_capacity(configs.len());
        for config in configs {
            info!(config = %config.display(), "installing packages");
            let mut invocation: Vec<OsString> = args.iter().map(OsString::from).collect();
            invocation.push(config.into_os_string());
            outcomes.push(self.run("install", &invocation).await?);
        }
        Ok(outcomes)
    }

    /// Installs a single package, optionally pinned to `version`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if nuget fails.
    pub async fn get(&self, package: &str, version: Option<&str>) -> CsResult<RunOutcome> {
        let mut args = vec![package];
        if let Some(version) = version {
            args.extend(["-version", version]);
        }
        self.run("install", &args).await
    }

    /// Deletes `packages` from the workspace, whether directory or file.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if removal fails.
    pub fn clean(&self) -> CsResult<()> {
        if self.client.settings().is_dry_run() {
            for path in find_matching(self.workspace(), PACKAGES_DIR)? {
                info!(path = %path.display(), "[dry-run] Would remove");
            }
            return Ok(());
        }
        delete_matching(self.workspace(), PACKAGES_DIR)?;
        Ok(())
    }
}
