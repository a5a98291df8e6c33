// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the filesystem and network commands.
//!
//! ```text
//! clone <REPO> <PATH> [-b BRANCH]
//! fetch <URL> [-o FILE]
//! tar   <URL> <DEST>
//! zip   <URL> <DEST> [--check-paths]
//! delete <PATTERN> [-C ROOT]
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `clone` command.
#[derive(Debug, Clone, Args)]
pub struct CloneArgs {
    /// Repository URL.
    #[arg(value_name = "REPO")]
    pub repo: String,

    /// Destination directory. Nothing happens if it already exists.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Branch to check out.
    #[arg(short = 'b', long, value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// URL to download.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output file. Defaults to the last URL segment in the current directory.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `tar` command.
#[derive(Debug, Clone, Args)]
pub struct TarArgs {
    /// URL of a plain or gzip-compressed tarball.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Extraction directory.
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,
}

/// Arguments for the `zip` command.
#[derive(Debug, Clone, Args)]
pub struct ZipArgs {
    /// URL of a zip archive.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Extraction directory.
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,

    /// Rejects the archive if any member would land outside DEST.
    #[arg(long = "check-paths")]
    pub check_paths: bool,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Glob pattern, relative to ROOT (e.g. '*.speccache', '**/obj').
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Directory the pattern is resolved against.
    #[arg(short = 'C', long = "root", value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,
}
