// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! NuGet command implementation for cstools.

use tracing::info;

use crate::cli::nuget::{NugetArgs, NugetSubcommand};
use crate::config::Config;
use crate::error::Result;
use crate::tools::client::ClientSettings;
use crate::tools::nuget::NuGet;

/// Downloads nuget.exe when `fetch` is set and it is not there yet.
async fn fetch_if_requested(nuget: &NuGet, fetch: bool) -> Result<()> {
    if fetch && !nuget.exists() {
        nuget.fetch().await?;
    }
    Ok(())
}

/// Main handler for nuget command.
///
/// A missing `nuget.exe` is an error here, unlike in the library API.
///
/// # Errors
///
/// Returns an error if nuget.exe is missing, a download fails or nuget
/// exits with a failure.
pub async fn run_nuget_command(args: &NugetArgs, config: &Config, dry_run: bool) -> Result<()> {
    let settings = ClientSettings::from_config(config, &config.urls.nuget, dry_run);
    let nuget = NuGet::new(&args.workspace, settings);

    match &args.subcommand {
        NugetSubcommand::Fetch => nuget.fetch().await?,
        NugetSubcommand::Install(install) => {
            fetch_if_requested(&nuget, install.fetch).await?;
            let outcomes = nuget
                .install(install.platform.as_deref(), &install.args, &install.exclude)
                .await?;
            let count = outcomes.len();
            for outcome in outcomes {
                outcome.require_executable()?;
            }
            info!(configs = count, "Packages installed");
        }
        NugetSubcommand::Get(get) => {
            fetch_if_requested(&nuget, get.fetch).await?;
            nuget
                .get(&get.package, get.version.as_deref())
                .await?
                .require_executable()?;
        }
        NugetSubcommand::Clean => nuget.clean()?,
        NugetSubcommand::Run(run) => {
            nuget.run(&run.command, &run.args).await?.require_executable()?;
        }
    }
    Ok(())
}
