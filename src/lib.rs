// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |      build / fetch / nuget / protobuild
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, env, --set        |
//!              '-------------+-------------'
//!                            v
//!                          tools
//!        git, fetch, build, configure, nuget, protobuild
//!                 |                    |
//!                 v                    v
//!               net             utility (fs, archive)
//!             HTTP/DL           walk, delete, tar, zip
//!
//!   +-----------------------------------------+
//!   |  core   process, platform               |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod net;
pub mod tools;
pub mod utility;

#[cfg(test)]
mod test_utils;
