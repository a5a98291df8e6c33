// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host platform detection.
//!
//! ```text
//! linux*           --> Linux
//! darwin | macos   --> MacOS
//! win32  | windows --> Windows
//! anything else    --> Unknown ("" label, warning logged)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Platform label used for tool selection, `packages.<platform>.config`
/// lookups and Protobuild generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
    /// Unrecognized host; its label is the empty string.
    Unknown,
}

impl Platform {
    /// Maps a host identifier to a platform.
    ///
    /// Accepts both the classic `sys.platform`-style names (`linux2`,
    /// `darwin`, `win32`) and Rust's `std::env::consts::OS` names.
    /// Unrecognized identifiers log a warning and yield [`Platform::Unknown`].
    #[must_use]
    pub fn from_identifier(id: &str) -> Self {
        if id.starts_with("linux") {
            Self::Linux
        } else if id == "darwin" || id == "macos" {
            Self::MacOS
        } else if id == "win32" || id == "windows" {
            Self::Windows
        } else {
            warn!(platform = id, "Unsupported platform");
            Self::Unknown
        }
    }

    /// Detects the platform of the running host.
    #[must_use]
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Returns the platform label (`""` for [`Platform::Unknown`]).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::MacOS => "MacOS",
            Self::Windows => "Windows",
            Self::Unknown => "",
        }
    }

    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
