// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for cstools.
//!
//! ```text
//! Config: GlobalConfig, ToolsConfig, UrlsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::platform::Platform;
use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log what would happen without spawning, downloading or deleting.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// External tool paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub git: PathBuf,
    /// Build driver on Windows.
    pub msbuild: PathBuf,
    /// Build driver everywhere else.
    pub xbuild: PathBuf,
    /// Runtime shim used to launch `.exe` clients off Windows.
    pub mono: PathBuf,
    /// Interpreter for `bootstrap.py`. See [`ToolsConfig::python_for`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<PathBuf>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git: PathBuf::from("git"),
            msbuild: PathBuf::from("msbuild"),
            xbuild: PathBuf::from("xbuild"),
            mono: PathBuf::from("/usr/bin/mono"),
            python: None,
        }
    }
}

impl ToolsConfig {
    /// Returns the build driver for `platform`: msbuild on Windows, xbuild
    /// on everything else (including unknown hosts).
    #[must_use]
    pub fn build_tool_for(&self, platform: Platform) -> &PathBuf {
        if platform.is_windows() {
            &self.msbuild
        } else {
            &self.xbuild
        }
    }

    /// Returns the interpreter for `platform`, falling back to `py.exe` on
    /// Windows and `python` elsewhere.
    #[must_use]
    pub fn python_for(&self, platform: Platform) -> PathBuf {
        self.python.clone().unwrap_or_else(|| {
            if platform.is_windows() {
                PathBuf::from("py.exe")
            } else {
                PathBuf::from("python")
            }
        })
    }
}

/// Download locations for the workspace clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UrlsConfig {
    pub nuget: String,
    pub protobuild: String,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            nuget: "http://nuget.org/nuget.exe".to_string(),
            protobuild: "https://github.com/SjB/Protobuild/blob/master/Protobuild.exe?raw=true"
                .to_string(),
        }
    }
}

impl UrlsConfig {
    /// Checks that every URL is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (key, value) in [("nuget", &self.nuget), ("protobuild", &self.protobuild)] {
            let parsed = reqwest::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                section: "urls".to_string(),
                key: key.to_string(),
                message: e.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidValue {
                    section: "urls".to_string(),
                    key: key.to_string(),
                    message: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
        }
        Ok(())
    }
}
