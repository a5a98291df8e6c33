// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! NuGet command arguments.
//!
//! # Subcommands
//!
//! ```text
//! nuget [-w WS] fetch
//!   → download nuget.exe into WS
//! nuget [-w WS] install [--platform P] [--exclude PATH]... [--fetch] [-- ARGS]
//!   → one install per packages.config / packages.<P>.config
//! nuget [-w WS] get <PACKAGE> [--version V] [--fetch]
//! nuget [-w WS] clean
//!   → remove WS/packages
//! nuget [-w WS] run <COMMAND> [ARGS]...
//! ```

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for the `nuget` command.
#[derive(Debug, Clone, Args)]
pub struct NugetArgs {
    /// Workspace holding nuget.exe and the packages directory.
    #[arg(short = 'w', long = "workspace", value_name = "WS", default_value = ".")]
    pub workspace: PathBuf,

    /// NuGet subcommand.
    #[command(subcommand)]
    pub subcommand: NugetSubcommand,
}

/// NuGet subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum NugetSubcommand {
    /// Downloads nuget.exe into the workspace.
    Fetch,

    /// Installs the packages listed in every package config of the workspace.
    Install(NugetInstallArgs),

    /// Installs a single package.
    Get(NugetGetArgs),

    /// Removes the packages directory.
    Clean,

    /// Runs an arbitrary nuget command with -OutputDirectory set.
    Run(NugetRunArgs),
}

/// Arguments for `nuget install`.
#[derive(Debug, Clone, Args)]
pub struct NugetInstallArgs {
    /// Platform label for packages.<PLATFORM>.config. Defaults to the host.
    #[arg(short = 'p', long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Directory not to search for package configs (can repeat).
    #[arg(short = 'x', long = "exclude", value_name = "PATH", action = clap::ArgAction::Append)]
    pub exclude: Vec<PathBuf>,

    /// Downloads nuget.exe first when it is missing.
    #[arg(long)]
    pub fetch: bool,

    /// Extra arguments for every install invocation.
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Arguments for `nuget get`.
#[derive(Debug, Clone, Args)]
pub struct NugetGetArgs {
    /// Package id.
    #[arg(value_name = "PACKAGE")]
    pub package: String,

    /// Exact package version.
    #[arg(long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Downloads nuget.exe first when it is missing.
    #[arg(long)]
    pub fetch: bool,
}

/// Arguments for `nuget run`.
#[derive(Debug, Clone, Args)]
pub struct NugetRunArgs {
    /// NuGet command, e.g. restore.
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Arguments appended after -OutputDirectory.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
