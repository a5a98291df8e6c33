// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared plumbing for workspace clients (`nuget.exe`, `Protobuild.exe`).
//!
//! ```text
//! WorkspaceClient { workspace, executable = workspace/<exe>, settings }
//!   exists()  executable present?
//!   fetch()   settings.url --> executable
//!   run(args)
//!     dry-run            --> RunOutcome::DryRun
//!     executable missing --> RunOutcome::MissingExecutable (nothing spawned)
//!     otherwise          --> [runtime if host != Windows] <exe> <args...>
//!                            RunOutcome::Completed(output) | Err(NonZeroExit)
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::info;

use crate::config::Config;
use crate::core::platform::Platform;
use crate::core::process::builder::{ProcessBuilder, ProcessOutput};
use crate::error::{ClientError, CsResult};
use crate::net::Downloader;

/// Construction-time settings shared by every workspace client.
#[derive(Debug, Clone, Builder)]
pub struct ClientSettings {
    /// Where `fetch()` downloads the executable from.
    #[builder(into)]
    url: String,
    /// Runtime shim used to launch the executable off Windows.
    #[builder(into, default = PathBuf::from("/usr/bin/mono"))]
    runtime: PathBuf,
    #[builder(default = Platform::current())]
    platform: Platform,
    #[builder(default = false)]
    dry_run: bool,
}

impl ClientSettings {
    /// Settings taken from configuration, with the given download URL.
    #[must_use]
    pub fn from_config(config: &Config, url: impl Into<String>, dry_run: bool) -> Self {
        Self::builder()
            .url(url)
            .runtime(config.tools.mono.clone())
            .dry_run(dry_run)
            .build()
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn runtime(&self) -> &Path {
        &self.runtime
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Result of a client invocation that did not fail.
#[derive(Debug)]
pub enum RunOutcome {
    /// The process ran and exited successfully.
    Completed(ProcessOutput),
    /// The executable is not in the workspace; nothing was spawned.
    MissingExecutable { executable: PathBuf },
    /// Dry-run mode; nothing was spawned.
    DryRun,
}

impl RunOutcome {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::MissingExecutable { .. })
    }

    /// Turns a missing executable into an error, for callers that cannot
    /// proceed without it.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingExecutable` for
    /// [`RunOutcome::MissingExecutable`].
    pub fn require_executable(self) -> CsResult<Self> {
        match self {
            Self::MissingExecutable { executable } => {
                Err(ClientError::MissingExecutable { path: executable }.into())
            }
            other => Ok(other),
        }
    }
}

/// A client executable living in a workspace directory.
#[derive(Debug, Clone)]
pub struct WorkspaceClient {
    workspace: PathBuf,
    executable: PathBuf,
    settings: ClientSettings,
}

impl WorkspaceClient {
    /// The executable path is derived once, here.
    pub fn new(workspace: impl Into<PathBuf>, file_name: &str, settings: ClientSettings) -> Self {
        let workspace = workspace.into();
        let executable = workspace.join(file_name);
        Self {
            workspace,
            executable,
            settings,
        }
    }

    #[must_use]
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    #[must_use]
    pub const fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.executable.exists()
    }

    /// Downloads the executable from the configured URL.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the download fails.
    pub async fn fetch(&self) -> CsResult<()> {
        if self.settings.is_dry_run() {
            info!(
                url = %self.settings.url(),
                file = %self.executable.display(),
                "[dry-run] Would download"
            );
            return Ok(());
        }

        Downloader::new()
            .url(self.settings.url())
            .file(&self.executable)
            .download()
            .await
    }

    /// Builds the invocation without running it.
    pub fn command<I, S>(&self, args: I) -> ProcessBuilder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let builder = if self.settings.platform().is_windows() {
            ProcessBuilder::new(&self.executable)
        } else {
            ProcessBuilder::new(self.settings.runtime()).arg(&self.executable)
        };

        let name = self
            .executable
            .file_stem()
            .map_or_else(|| "client".to_string(), |s| s.to_string_lossy().into_owned());

        builder.args(args).name(name).inherit_stdio()
    }

    /// Runs the executable with `args`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the process cannot be spawned or exits
    /// with a non-zero status. A missing executable is not an error.
    pub async fn run<I, S>(&self, args: I) -> CsResult<RunOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let builder = self.command(args);

        if self.settings.is_dry_run() {
            info!(cmd = %builder.command_line(), "[dry-run] Would run");
            return Ok(RunOutcome::DryRun);
        }

        if !self.exists() {
            info!("Missing {}.", self.executable.display());
            return Ok(RunOutcome::MissingExecutable {
                executable: self.executable.clone(),
            });
        }

        let output = builder.run().await?;
        Ok(RunOutcome::Completed(output))
    }
}
