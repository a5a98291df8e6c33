// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for cstools.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. cstools.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. CSTOOLS_* env vars
//! 5. --set overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CSTOOLS_GLOBAL_DRY=true          → global.dry = true
//! CSTOOLS_TOOLS_XBUILD=/opt/xbuild → tools.xbuild = "/opt/xbuild"
//! CSTOOLS_URLS_NUGET=https://...   → urls.nuget = "https://..."
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GlobalConfig, ToolsConfig, UrlsConfig};

/// Name of the optional configuration file picked up from the current directory.
pub const LOCAL_CONFIG_FILE: &str = "cstools.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "CSTOOLS";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
    /// Client download URLs.
    pub urls: UrlsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cstools::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("cstools.toml")
    ///     .with_env_prefix("CSTOOLS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if a download URL is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        self.urls.validate()?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered and aligned on `=`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_urls_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("tools.git".into(), self.tools.git.display().to_string());
        options.insert(
            "tools.msbuild".into(),
            self.tools.msbuild.display().to_string(),
        );
        options.insert(
            "tools.xbuild".into(),
            self.tools.xbuild.display().to_string(),
        );
        options.insert("tools.mono".into(), self.tools.mono.display().to_string());
        if let Some(python) = &self.tools.python {
            options.insert("tools.python".into(), python.display().to_string());
        }
    }

    fn format_urls_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("urls.nuget".into(), self.urls.nuget.clone());
        options.insert("urls.protobuild".into(), self.urls.protobuild.clone());
    }
}
