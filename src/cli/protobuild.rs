// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Protobuild command arguments.
//!
//! # Subcommands
//!
//! ```text
//! protobuild [-w WS] fetch
//! protobuild [-w WS] generate [--platform P] [--fetch]
//! protobuild [-w WS] clean [--platform P] [--exclude NAME]...
//!   → -clean, *.speccache, every obj/ and bin/ outside .git and NAME
//! protobuild [-w WS] run [ARGS]...
//! ```

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for the `protobuild` command.
#[derive(Debug, Clone, Args)]
pub struct ProtobuildArgs {
    /// Workspace holding Protobuild.exe.
    #[arg(short = 'w', long = "workspace", value_name = "WS", default_value = ".")]
    pub workspace: PathBuf,

    /// Protobuild subcommand.
    #[command(subcommand)]
    pub subcommand: ProtobuildSubcommand,
}

/// Protobuild subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ProtobuildSubcommand {
    /// Downloads Protobuild.exe into the workspace.
    Fetch,

    /// Generates project files.
    Generate(GenerateArgs),

    /// Removes generated state and build output.
    Clean(ProtobuildCleanArgs),

    /// Runs Protobuild.exe with arbitrary arguments.
    Run(ProtobuildRunArgs),
}

/// Arguments for `protobuild generate`.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Target platform. Defaults to the host.
    #[arg(short = 'p', long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Downloads Protobuild.exe first when it is missing.
    #[arg(long)]
    pub fetch: bool,
}

/// Arguments for `protobuild clean`.
#[derive(Debug, Clone, Args)]
pub struct ProtobuildCleanArgs {
    /// Target platform. Defaults to the host.
    #[arg(short = 'p', long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Directory name never searched for obj/bin (can repeat). .git is always skipped.
    #[arg(short = 'x', long = "exclude", value_name = "NAME", action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,
}

/// Arguments for `protobuild run`.
#[derive(Debug, Clone, Args)]
pub struct ProtobuildRunArgs {
    /// Arguments for Protobuild.exe.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
