// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build and configure command arguments.
//!
//! ```text
//! build <SOLUTION> [ARGS]...         ARGS are passed to msbuild/xbuild verbatim
//! configure <PROJECT> [--platform P] runs <PROJECT>/bootstrap.py configure
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `build` command.
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Solution or project file.
    #[arg(value_name = "SOLUTION")]
    pub solution: PathBuf,

    /// Extra arguments for the build driver, e.g. /p:Configuration=Release.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `configure` command.
#[derive(Debug, Clone, Args)]
pub struct ConfigureArgs {
    /// Project directory containing bootstrap.py.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Target platform label. Defaults to the host platform.
    #[arg(short = 'p', long, value_name = "PLATFORM")]
    pub platform: Option<String>,
}
