// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! archive
//!   ArchiveExtractor   tar(.gz) with traversal check, zip
//! fs
//!   walk:   walk(), WalkOptions
//!   delete: find_matching(), delete_matching()
//! ```

pub mod archive;
pub mod fs;
