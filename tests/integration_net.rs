// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for downloads using wiremock.
//!
//! Covers:
//! - File downloads and parent directory creation
//! - HTTP errors
//! - Client executable fetches
//! - Download-then-extract for tar and zip

use cstools::config::Config;
use cstools::core::platform::Platform;
use cstools::error::{ArchiveError, CsError, NetworkError};
use cstools::net::Downloader;
use cstools::tools::client::ClientSettings;
use cstools::tools::fetch::FetchTool;
use cstools::tools::nuget::NuGet;
use cstools::tools::protobuild::Protobuild;
use cstools::tools::{Tool, ToolContext};
use std::io::Write;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

async fn serve(server: &MockServer, route: &str, status: u16, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body))
        .mount(server)
        .await;
}

fn ctx() -> ToolContext {
    ToolContext::new(Arc::new(Config::default()), false)
}

/// Tar member with a raw name, bypassing the builder's own path checks.
fn append_raw<W: Write>(builder: &mut tar::Builder<W>, name: &str, data: &[u8]) {
    let mut header = tar::Header::new_old();
    header.as_old_mut().name[..name.len()].copy_from_slice(name.as_bytes());
    header.set_size(data.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder.append(&header, data).expect("append member");
}

fn tar_gz(members: &[(&str, &[u8])]) -> Vec<u8> {
    let encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, data) in members {
        append_raw(&mut builder, name, data);
    }
    builder
        .into_inner()
        .expect("finish tar")
        .finish()
        .expect("finish gzip")
}

fn zip_bytes(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in members {
        writer
            .start_file(*name, zip::write::SimpleFileOptions::default())
            .expect("start member");
        writer.write_all(data).expect("write member");
    }
    writer.finish().expect("finish zip").into_inner()
}

// =============================================================================
// Downloader
// =============================================================================

#[tokio::test]
async fn download_creates_parent_directories() {
    let server = MockServer::start().await;
    serve(&server, "/nuget.exe", 200, b"MZ binary".to_vec()).await;

    let temp = temp_dir();
    let output = temp.path().join("a/b/c/nuget.exe");

    Downloader::new()
        .url(format!("{}/nuget.exe", server.uri()))
        .file(&output)
        .silent()
        .download()
        .await
        .expect("download");

    assert_eq!(std::fs::read(&output).expect("read"), b"MZ binary");
}

#[tokio::test]
async fn download_http_errors_leave_no_file() {
    for status in [404_u16, 500] {
        let server = MockServer::start().await;
        serve(&server, "/missing.exe", status, Vec::new()).await;

        let temp = temp_dir();
        let output = temp.path().join("missing.exe");

        let err = Downloader::new()
            .url(format!("{}/missing.exe", server.uri()))
            .file(&output)
            .silent()
            .download()
            .await
            .expect_err("http error");

        match err {
            CsError::Network(inner) => {
                assert!(
                    matches!(*inner, NetworkError::HttpError { status: s, .. } if s == status),
                    "unexpected: {inner}"
                );
            }
            other => panic!("expected network error, got {other}"),
        }
        assert!(!output.exists());
    }
}

#[tokio::test]
async fn download_requires_url() {
    let temp = temp_dir();
    let err = Downloader::new()
        .file(temp.path().join("x"))
        .download()
        .await
        .expect_err("no url");
    assert!(err.to_string().contains("no URL provided"));
}

// =============================================================================
// Client fetches
// =============================================================================

#[tokio::test]
async fn nuget_and_protobuild_fetch_into_workspace() {
    let server = MockServer::start().await;
    serve(&server, "/nuget.exe", 200, b"nuget".to_vec()).await;
    serve(&server, "/Protobuild.exe", 200, b"protobuild".to_vec()).await;

    let workspace = temp_dir();
    let settings = |url: String| {
        ClientSettings::builder()
            .url(url)
            .platform(Platform::Linux)
            .build()
    };

    let nuget = NuGet::new(
        workspace.path(),
        settings(format!("{}/nuget.exe", server.uri())),
    );
    let protobuild = Protobuild::new(
        workspace.path(),
        settings(format!("{}/Protobuild.exe?raw=true", server.uri())),
    );
    assert!(!nuget.exists());
    assert!(!protobuild.exists());

    nuget.fetch().await.expect("nuget fetch");
    protobuild.fetch().await.expect("protobuild fetch");

    assert!(nuget.exists());
    assert!(protobuild.exists());
    assert_eq!(
        std::fs::read_to_string(workspace.path().join("Protobuild.exe")).expect("read"),
        "protobuild"
    );
}

#[tokio::test]
async fn dry_run_fetch_does_not_touch_the_network() {
    let workspace = temp_dir();
    let settings = ClientSettings::builder()
        .url("http://127.0.0.1:9/nuget.exe")
        .dry_run(true)
        .build();
    let nuget = NuGet::new(workspace.path(), settings);

    nuget.fetch().await.expect("dry run");
    assert!(!nuget.exists());
}

// =============================================================================
// Fetch and extract
// =============================================================================

#[tokio::test]
async fn tar_fetch_extracts_gzip_tarball() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/mono-addins.tar.gz",
        200,
        tar_gz(&[("lib/Mono.Addins.dll", b"dll"), ("README", b"readme")]),
    )
    .await;

    let temp = temp_dir();
    let dest = temp.path().join("ThirdParty");

    FetchTool::new()
        .url(format!("{}/mono-addins.tar.gz", server.uri()))
        .tar_op(&dest)
        .silent(true)
        .run(&ctx())
        .await
        .expect("tar fetch");

    assert_eq!(
        std::fs::read_to_string(dest.join("lib/Mono.Addins.dll")).expect("read"),
        "dll"
    );
    assert!(dest.join("README").exists());
}

#[tokio::test]
async fn tar_fetch_rejects_traversal_and_writes_nothing() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/evil.tar.gz",
        200,
        tar_gz(&[("good.txt", b"ok"), ("../../evil", b"bad")]),
    )
    .await;

    let temp = temp_dir();
    let dest = temp.path().join("a/b");

    let err = FetchTool::new()
        .url(format!("{}/evil.tar.gz", server.uri()))
        .tar_op(&dest)
        .silent(true)
        .run(&ctx())
        .await
        .expect_err("traversal");

    let archive_error = err
        .chain()
        .find_map(|cause| match cause.downcast_ref::<CsError>() {
            Some(CsError::Archive(inner)) => Some(inner.as_ref()),
            _ => None,
        })
        .expect("archive error in chain");
    assert!(matches!(archive_error, ArchiveError::PathTraversal { .. }));
    assert!(!dest.join("good.txt").exists());
    assert!(!temp.path().join("evil").exists());
}

#[tokio::test]
async fn zip_fetch_accepts_traversal_member_unless_checked() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/loose.zip",
        200,
        zip_bytes(&[("inner/ok.txt", b"ok"), ("../escaped.txt", b"escaped")]),
    )
    .await;

    let temp = temp_dir();
    let dest = temp.path().join("out");
    let url = format!("{}/loose.zip", server.uri());

    FetchTool::new()
        .url(&url)
        .zip_op(&dest)
        .check_paths(true)
        .silent(true)
        .run(&ctx())
        .await
        .expect_err("checked zip rejects traversal");
    assert!(!temp.path().join("escaped.txt").exists());

    FetchTool::new()
        .url(&url)
        .zip_op(&dest)
        .silent(true)
        .run(&ctx())
        .await
        .expect("unchecked zip extracts");
    assert!(dest.join("inner/ok.txt").exists());
    assert!(temp.path().join("escaped.txt").exists());
}
