// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests driving the workspace clients and git against fake
//! executables that record their command lines.

#![cfg(unix)]

use cstools::config::Config;
use cstools::core::platform::Platform;
use cstools::error::exit_code_for;
use cstools::tools::client::{ClientSettings, RunOutcome};
use cstools::tools::git::GitTool;
use cstools::tools::nuget::NuGet;
use cstools::tools::protobuild::Protobuild;
use cstools::tools::{Tool, ToolContext};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A shell script that appends its arguments to `calls.log`, then runs `tail`.
struct FakeTool {
    _dir: TempDir,
    script: PathBuf,
    log: PathBuf,
}

impl FakeTool {
    fn new(tail: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = dir.path().join("fake-tool");
        let log = dir.path().join("calls.log");
        let body = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\n{tail}\n",
            log.display()
        );
        fs::write(&script, body).expect("write script");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod");
        Self {
            _dir: dir,
            script,
            log,
        }
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|s| s.lines().map(String::from).collect())
            .unwrap_or_default()
    }
}

fn settings(runtime: &Path) -> ClientSettings {
    ClientSettings::builder()
        .url("http://127.0.0.1:9/unused.exe")
        .runtime(runtime)
        .platform(Platform::Linux)
        .build()
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(path, "").expect("touch");
}

// =============================================================================
// NuGet
// =============================================================================

#[tokio::test]
async fn nuget_run_without_executable_spawns_nothing() {
    let mono = FakeTool::new("exit 0");
    let workspace = tempfile::tempdir().expect("tempdir");
    let nuget = NuGet::new(workspace.path(), settings(&mono.script));

    let outcome = nuget.run("install", &["-NoCache"]).await.expect("run");

    assert!(outcome.is_missing());
    assert!(mono.calls().is_empty());
}

#[tokio::test]
async fn nuget_run_spawns_one_process_through_the_runtime() {
    let mono = FakeTool::new("exit 0");
    let workspace = tempfile::tempdir().expect("tempdir");
    let ws = workspace.path();
    touch(&ws.join("nuget.exe"));
    let nuget = NuGet::new(ws, settings(&mono.script));

    let outcome = nuget.run("install", &["-NoCache"]).await.expect("run");

    assert!(matches!(outcome, RunOutcome::Completed(_)));
    assert_eq!(
        mono.calls(),
        vec![format!(
            "{}/nuget.exe install -OutputDirectory {}/packages -NoCache",
            ws.display(),
            ws.display()
        )]
    );
}

#[tokio::test]
async fn nuget_install_runs_once_per_config_skipping_excluded() {
    let mono = FakeTool::new("exit 0");
    let workspace = tempfile::tempdir().expect("tempdir");
    let ws = workspace.path();
    touch(&ws.join("nuget.exe"));
    touch(&ws.join("packages.config"));
    touch(&ws.join("Game/packages.Linux.config"));
    touch(&ws.join("Game/packages.Windows.config"));
    touch(&ws.join("ThirdParty/Lib/packages.config"));
    let nuget = NuGet::new(ws, settings(&mono.script));

    let args = vec!["-NoCache".to_string()];
    let outcomes = nuget
        .install(None, &args, &[ws.join("ThirdParty")])
        .await
        .expect("install");

    assert_eq!(outcomes.len(), 2);
    assert_eq!(args, vec!["-NoCache".to_string()]);
    let calls = mono.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|c| c.contains(" install -OutputDirectory ")));
    assert!(
        calls
            .iter()
            .any(|c| c.ends_with(&format!("-NoCache {}", ws.join("packages.config").display())))
    );
    assert!(calls.iter().any(|c| {
        c.ends_with(&format!(
            "-NoCache {}",
            ws.join("Game/packages.Linux.config").display()
        ))
    }));
    assert!(calls.iter().all(|c| !c.contains("ThirdParty") && !c.contains("Windows")));
}

#[tokio::test]
async fn nuget_failure_propagates_exit_code() {
    let mono = FakeTool::new("exit 3");
    let workspace = tempfile::tempdir().expect("tempdir");
    touch(&workspace.path().join("nuget.exe"));
    let nuget = NuGet::new(workspace.path(), settings(&mono.script));

    let err = nuget
        .get("NUnit", Some("2.6.4"))
        .await
        .expect_err("nuget failed");

    assert_eq!(exit_code_for(&anyhow::Error::new(err)), 3);
    assert!(mono.calls()[0].ends_with("NUnit -version 2.6.4"));
}

// =============================================================================
// Protobuild
// =============================================================================

#[tokio::test]
async fn protobuild_generate_and_clean_invocations() {
    let mono = FakeTool::new("exit 0");
    let workspace = tempfile::tempdir().expect("tempdir");
    let ws = workspace.path();
    touch(&ws.join("Protobuild.exe"));
    touch(&ws.join("Game/bin/Debug/Game.exe"));
    let protobuild = Protobuild::new(ws, settings(&mono.script));

    protobuild.generate(None).await.expect("generate");
    let removed = protobuild
        .clean(Some("Android"), &[])
        .await
        .expect("clean");

    let exe = ws.join("Protobuild.exe").display().to_string();
    assert_eq!(
        mono.calls(),
        vec![
            format!("{exe} -generate Linux"),
            format!("{exe} -clean Android"),
        ]
    );
    assert_eq!(removed, vec![ws.join("Game/bin")]);
}

// =============================================================================
// Git
// =============================================================================

#[tokio::test]
async fn clone_is_skipped_once_the_destination_exists() {
    let git = FakeTool::new("for last; do :; done\nmkdir -p \"$last\"");
    let mut config = Config::default();
    config.tools.git = git.script.clone();
    let ctx = ToolContext::new(Arc::new(config), false);

    let target = tempfile::tempdir().expect("tempdir");
    let dest = target.path().join("ThirdParty/repo");
    let tool = GitTool::new()
        .url("https://example.com/repo.git")
        .path(&dest)
        .branch("stable");

    tool.run(&ctx).await.expect("first clone");
    tool.run(&ctx).await.expect("second clone");

    assert_eq!(
        git.calls(),
        vec![format!(
            "clone -b stable https://example.com/repo.git {}",
            dest.display()
        )]
    );
}
