// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!               CsError (~24 bytes)
//!                     |
//!   +------+------+---+---+------+------+------+
//!   |      |      |       |      |      |      |
//!   v      v      v       v      v      v      v
//! Bail   Net    Cfg    Proc  Archive   Fs   Client   Io
//! Box<str> Box  Box    Box     Box     Box   Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Network HttpError, DownloadFailed, Reqwest, InvalidUrl
//!   Config  InvalidValue
//!   Process SpawnFailed, NonZeroExit, Signaled, WaitFailed
//!   Archive PathTraversal, Read, Zip
//!   Fs      InvalidPattern, IoError
//!   Client  MissingExecutable
//! ```
//!
//! The binary exits with the code returned by [`exit_code_for`]: the exact
//! exit code of the first external tool that failed, or 1.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`CsError`].
pub type CsResult<T> = std::result::Result<T, CsError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum CsError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Archive extraction error.
    #[error("archive error: {0}")]
    Archive(#[from] Box<ArchiveError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Workspace client error.
    #[error("client error: {0}")]
    Client(#[from] Box<ClientError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`CsError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> CsError {
    CsError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for CsError {
                fn from(err: $error) -> Self {
                    CsError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ConfigError => Config,
    ProcessError => Process,
    ArchiveError => Archive,
    FsError => Fs,
    ClientError => Client,
    std::io::Error => Io,
}

impl CsError {
    /// Returns the exit code of the failed external process, if this error
    /// came from one.
    #[must_use]
    pub fn process_exit_code(&self) -> Option<i32> {
        match self {
            Self::Process(err) => err.exit_code(),
            _ => None,
        }
    }
}

/// Maps an error to the exit code the binary should terminate with.
///
/// An external tool that exited with a non-zero status propagates its exact
/// code. Everything else exits with 1.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(cs) = cause.downcast_ref::<CsError>()
            && let Some(code) = cs.process_exit_code()
        {
            return code;
        }
        if let Some(code) = cause
            .downcast_ref::<ProcessError>()
            .and_then(ProcessError::exit_code)
        {
            return code;
        }
        if let Some(code) = cause
            .downcast_ref::<Box<ProcessError>>()
            .and_then(|err| err.exit_code())
        {
            return code;
        }
    }
    1
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Download failed.
    #[error("download failed: {url} - {message}")]
    DownloadFailed { url: String, message: String },

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process was terminated by a signal.
    #[error("process '{command}' was terminated by signal {signal}")]
    Signaled { command: String, signal: i32 },

    /// Waiting on the process failed.
    #[error("failed to wait for process '{command}': {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Exit code of the process, for [`ProcessError::NonZeroExit`] only.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::NonZeroExit { code, .. } => Some(*code),
            _ => None,
        }
    }
}

// --- Archive Errors ---

/// Archive extraction errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// A member would be written outside the destination directory.
    #[error("attempted path traversal in archive: '{member}' escapes {}", .destination.display())]
    PathTraversal {
        member: String,
        destination: PathBuf,
    },

    /// Reading or unpacking the archive failed.
    #[error("failed to read archive {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the zip library.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Invalid glob pattern.
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Client Errors ---

/// Workspace client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client executable has not been fetched into the workspace.
    #[error("missing {}; fetch it first", .path.display())]
    MissingExecutable { path: PathBuf },
}

#[cfg(test)]
mod tests;
