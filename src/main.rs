// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch --> ExitCode
//!   failing tool exit code | 1 other errors | 2 usage (clap)
//! ```

use std::process::ExitCode;

use cstools::cli::global::GlobalOptions;
use cstools::cli::{self, Command};
use cstools::cmd::build::{run_build_command, run_configure_command};
use cstools::cmd::config::{run_inis_command, run_options_command, run_platform_command};
use cstools::cmd::fetch::{
    run_clone_command, run_delete_command, run_fetch_command, run_tar_command, run_zip_command,
};
use cstools::cmd::nuget::run_nuget_command;
use cstools::cmd::protobuild::run_protobuild_command;
use cstools::config::loader::ConfigLoader;
use cstools::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use cstools::error::{Result, bail_out, exit_code_for};
use cstools::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_status_byte(exit_code_for(&e)))
        }
    }
}

/// Maps an exit code onto the byte the OS reports; out of range becomes 1.
fn exit_status_byte(code: i32) -> u8 {
    u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> Result<()> {
    let dry = config.global.dry;
    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Platform) => {
            run_platform_command();
            Ok(())
        }
        Some(Command::Configure(args)) => run_configure_command(args, config, dry).await,
        Some(Command::Build(args)) => run_build_command(args, config, dry).await,
        Some(Command::Clone(args)) => run_clone_command(args, config, dry).await,
        Some(Command::Fetch(args)) => run_fetch_command(args, config, dry).await,
        Some(Command::Tar(args)) => run_tar_command(args, config, dry).await,
        Some(Command::Zip(args)) => run_zip_command(args, config, dry).await,
        Some(Command::Delete(args)) => run_delete_command(args, dry),
        Some(Command::Nuget(args)) => run_nuget_command(args, config, dry).await,
        Some(Command::Protobuild(args)) => run_protobuild_command(args, config, dry).await,
        None => Err(bail_out("no command specified, use --help for usage information").into()),
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(LOCAL_CONFIG_FILE);
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    let mut loader = build_config_loader(global);
    for assignment in global.to_config_overrides() {
        loader = loader.set_str(&assignment)?;
    }
    loader.build()
}
