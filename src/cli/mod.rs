// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for cstools using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! cstools [global options] <command>
//! version | options | inis | platform
//! configure <PROJECT> [--platform P]
//! build <SOLUTION> [ARGS]...
//! clone <REPO> <PATH> [-b BRANCH]
//! fetch <URL> [-o FILE]
//! tar <URL> <DEST>
//! zip <URL> <DEST> [--check-paths]
//! delete <PATTERN> [-C ROOT]
//! nuget {fetch|install|get|clean|run}
//! protobuild {fetch|generate|clean|run}
//! ```

pub mod build;
pub mod fetch;
pub mod global;
pub mod nuget;
pub mod protobuild;


use crate::cli::build::{BuildArgs, ConfigureArgs};
use crate::cli::fetch::{CloneArgs, DeleteArgs, FetchArgs, TarArgs, ZipArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::nuget::NugetArgs;
use crate::cli::protobuild::ProtobuildArgs;
use clap::{Parser, Subcommand};

/// Fetch, build and clean helpers for C# workspaces.
#[derive(Debug, Parser)]
#[command(
    name = "cstools",
    author,
    version,
    about = "Fetch, build and clean helpers for C# workspaces",
    long_about = "cstools Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Drives git, msbuild/xbuild, bootstrap.py, nuget.exe and\n\
                  Protobuild.exe for Mono/.NET workspaces. A failing tool makes\n\
                  cstools exit with that tool's exit code.",
    after_help = "CONFIGURATION:\n\n\
                  cstools reads `cstools.toml` from the current directory when it\n\
                  exists, then every --ini file in order, then CSTOOLS_* environment\n\
                  variables (e.g. CSTOOLS_TOOLS_XBUILD), then --set overrides.\n\
                  Use `cstools options` to print the effective values."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files in load order.
    Inis,

    /// Prints the detected host platform label.
    Platform,

    /// Runs a project's bootstrap.py configure step.
    Configure(ConfigureArgs),

    /// Builds a solution with msbuild (Windows) or xbuild.
    Build(BuildArgs),

    /// Clones a repository unless the destination exists.
    Clone(CloneArgs),

    /// Downloads a file.
    Fetch(FetchArgs),

    /// Downloads and extracts a tarball.
    Tar(TarArgs),

    /// Downloads and extracts a zip archive.
    Zip(ZipArgs),

    /// Deletes every file or directory matching a glob pattern.
    Delete(DeleteArgs),

    /// Manages nuget.exe and workspace packages.
    Nuget(NugetArgs),

    /// Manages Protobuild.exe and generated projects.
    Protobuild(ProtobuildArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
