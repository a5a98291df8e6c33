// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:    walk()             sorted ignore::Walk, filter_entry pruning
//!          WalkOptions        max_depth, skip_dirs/paths, no_descend
//! delete:  find_matching()    shell glob -> wax, over a bounded walk
//!          delete_matching()  remove matches (dirs recursively)
//! ```

pub mod delete;
pub mod walk;

#[cfg(test)]
mod tests;
