// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   build, config, fetch, nuget, protobuild
//! ```

pub mod build;
pub mod config;
pub mod fetch;
pub mod nuget;
pub mod protobuild;
