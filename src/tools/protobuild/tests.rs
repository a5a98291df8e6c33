// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Protobuild;
use crate::core::platform::Platform;
use crate::test_utils::run_with_logs;
use crate::tools::client::{ClientSettings, RunOutcome};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn settings(platform: Platform, dry_run: bool) -> ClientSettings {
    ClientSettings::builder()
        .url("https://example.com/Protobuild.exe?raw=true")
        .platform(platform)
        .dry_run(dry_run)
        .build()
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    std::fs::write(path, "").expect("write");
}

fn workspace() -> TempDir {
    let temp = tempfile::tempdir().expect("tempdir");
    touch(temp.path(), "Linux.speccache");
    touch(temp.path(), "Game/bin/Debug/Game.exe");
    touch(temp.path(), "Game/obj/Debug/Game.pdb");
    touch(temp.path(), "Game/Program.cs");
    touch(temp.path(), ".git/objects/bin/pack");
    touch(temp.path(), "ThirdParty/Lib/bin/Lib.dll");
    temp
}

fn relative(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.strip_prefix(root).expect("under root").to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_executable_path() {
    let protobuild = Protobuild::new("ws", settings(Platform::Linux, false));
    assert_eq!(protobuild.executable(), Path::new("ws").join("Protobuild.exe"));
}

#[tokio::test]
async fn test_clean_without_executable_still_cleans() {
    let temp = workspace();
    let protobuild = Protobuild::new(temp.path(), settings(Platform::Linux, false));

    let logs = run_with_logs(|| async {
        let removed = protobuild.clean(None, &["ThirdParty".to_string()]).await?;
        assert_eq!(
            relative(temp.path(), &removed),
            vec!["Game/bin", "Game/obj"]
        );
        Ok(())
    })
    .await
    .expect("clean");

    assert!(logs.contains("Missing "), "logs: {logs}");
    assert!(logs.contains("Removing: "), "logs: {logs}");
    assert!(!temp.path().join("Linux.speccache").exists());
    assert!(!temp.path().join("Game/bin").exists());
    assert!(!temp.path().join("Game/obj").exists());
    assert!(temp.path().join("Game/Program.cs").exists());
    assert!(temp.path().join(".git/objects/bin/pack").exists());
    assert!(temp.path().join("ThirdParty/Lib/bin/Lib.dll").exists());
}

#[tokio::test]
async fn test_clean_dry_run_removes_nothing() {
    let temp = workspace();
    let protobuild = Protobuild::new(temp.path(), settings(Platform::Linux, true));

    let logs = run_with_logs(|| async {
        let removed = protobuild.clean(Some("Windows"), &[]).await?;
        assert_eq!(removed.len(), 3);
        Ok(())
    })
    .await
    .expect("dry clean");

    assert!(logs.contains("-clean Windows"), "logs: {logs}");
    assert_eq!(logs.matches("[dry-run] Would remove").count(), 4, "logs: {logs}");
    assert!(temp.path().join("Linux.speccache").exists());
    assert!(temp.path().join("Game/bin/Debug/Game.exe").exists());
}

#[tokio::test]
async fn test_generate_defaults_to_host_label() {
    let temp = tempfile::tempdir().expect("tempdir");
    let protobuild = Protobuild::new(temp.path(), settings(Platform::MacOS, true));

    let logs = run_with_logs(|| async {
        let outcome = protobuild.generate(None).await?;
        assert!(matches!(outcome, RunOutcome::DryRun));
        protobuild.generate(Some("Android")).await?;
        Ok(())
    })
    .await
    .expect("dry run");

    assert!(logs.contains("-generate MacOS"), "logs: {logs}");
    assert!(logs.contains("-generate Android"), "logs: {logs}");
}

#[tokio::test]
async fn test_clean_missing_workspace_is_noop() {
    let temp = tempfile::tempdir().expect("tempdir");
    let protobuild = Protobuild::new(
        temp.path().join("absent"),
        settings(Platform::Linux, false),
    );

    let removed = protobuild
        .clean(Some("Linux"), &[])
        .await
        .expect("missing workspace is empty");
    assert!(removed.is_empty());
}
