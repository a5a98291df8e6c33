// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Protobuild command implementation for cstools.

use tracing::info;

use crate::cli::protobuild::{ProtobuildArgs, ProtobuildSubcommand};
use crate::config::Config;
use crate::error::Result;
use crate::tools::client::ClientSettings;
use crate::tools::protobuild::Protobuild;

/// Main handler for protobuild command.
///
/// `generate` and `run` need Protobuild.exe; `clean` carries on without it.
///
/// # Errors
///
/// Returns an error if Protobuild.exe is required but missing, a download
/// fails, Protobuild fails or a removal fails.
pub async fn run_protobuild_command(
    args: &ProtobuildArgs,
    config: &Config,
    dry_run: bool,
) -> Result<()> {
    let settings = ClientSettings::from_config(config, &config.urls.protobuild, dry_run);
    let protobuild = Protobuild::new(&args.workspace, settings);

    match &args.subcommand {
        ProtobuildSubcommand::Fetch => protobuild.fetch().await?,
        ProtobuildSubcommand::Generate(generate) => {
            if generate.fetch && !protobuild.exists() {
                protobuild.fetch().await?;
            }
            protobuild
                .generate(generate.platform.as_deref())
                .await?
                .require_executable()?;
        }
        ProtobuildSubcommand::Clean(clean) => {
            let removed = protobuild
                .clean(clean.platform.as_deref(), &clean.exclude)
                .await?;
            info!(directories = removed.len(), "Workspace cleaned");
        }
        ProtobuildSubcommand::Run(run) => {
            protobuild.run(&run.args).await?.require_executable()?;
        }
    }
    Ok(())
}
