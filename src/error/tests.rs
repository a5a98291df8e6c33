// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use anyhow::Context;

use super::{ArchiveError, CsError, CsResult, ProcessError, exit_code_for};

#[test]
fn test_archive_error_display() {
    let err = ArchiveError::PathTraversal {
        member: "../../evil".to_string(),
        destination: PathBuf::from("/tmp/dest"),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"attempted path traversal in archive: '../../evil' escapes /tmp/dest"
    );
}

#[test]
fn test_cs_error_size() {
    // Box<str> (Bailed) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<CsError>();
    assert!(size <= 24, "CsError is {size} bytes, expected <= 24");
}

#[test]
fn test_cs_result_size() {
    let size = std::mem::size_of::<CsResult<()>>();
    assert!(size <= 24, "CsResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_exit_code_from_process_error() {
    let err: CsError = ProcessError::NonZeroExit {
        command: "xbuild".to_string(),
        code: 7,
    }
    .into();
    let err = anyhow::Error::from(err);
    assert_eq!(exit_code_for(&err), 7);
}

#[test]
fn test_exit_code_survives_context() {
    let result: CsResult<()> = Err(ProcessError::NonZeroExit {
        command: "git".to_string(),
        code: 128,
    }
    .into());
    let err = result.context("failed to clone").unwrap_err();
    assert_eq!(exit_code_for(&err), 128);
}

#[test]
fn test_exit_code_defaults_to_one() {
    let signaled: CsError = ProcessError::Signaled {
        command: "mono".to_string(),
        signal: 9,
    }
    .into();
    assert_eq!(exit_code_for(&anyhow::Error::from(signaled)), 1);
    assert_eq!(exit_code_for(&anyhow::anyhow!("plain failure")), 1);
}

#[test]
fn test_bail_out_is_not_a_process_failure() {
    let err = anyhow::Error::from(super::bail_out("no command specified"));
    assert_eq!(err.to_string(), "fatal error: no command specified");
    assert_eq!(exit_code_for(&err), 1);
}
