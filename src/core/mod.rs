// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for platform detection and process management.
//!
//! ```text
//!            core
//!             |
//!       +-----+-----+
//!       |           |
//!       v           v
//!   platform     process
//!       |           |
//!   Platform     Builder
//!   label()      Output
//! ```

pub mod platform;
pub mod process;
