// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sorted directory traversal with pruning.
//!
//! Exclusions are applied by `filter_entry`, i.e. before the walker descends,
//! so a skipped directory's subtree is never read.

use bon::Builder;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Options for directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Skip directories matching these names (exact match)
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
    /// Skip directories at exactly these paths
    #[builder(setters(name = with_skip_paths), default)]
    skip_paths: Vec<PathBuf>,
    /// Yield directories with these names but never descend into them
    #[builder(setters(name = with_no_descend), default)]
    no_descend: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    #[must_use]
    pub fn skip_paths(&self) -> &[PathBuf] {
        &self.skip_paths
    }

    #[must_use]
    pub fn no_descend(&self) -> &[String] {
        &self.no_descend
    }
}

/// Result of a walk: files and directories in traversal order.
#[derive(Debug)]
pub struct WalkResult {
    files: Vec<PathBuf>,
    directories: Vec<PathBuf>,
    error_count: usize,
}

impl WalkResult {
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns the directories found during traversal, excluding the root.
    #[must_use]
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }
}

struct Pruning {
    skip_dirs: Vec<String>,
    skip_paths: Vec<PathBuf>,
    no_descend: Vec<String>,
}

impl Pruning {
    fn keeps(&self, entry: &DirEntry) -> bool {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if is_dir && entry.depth() > 0 {
            if let Some(name) = entry.file_name().to_str()
                && self.skip_dirs.iter().any(|skip| skip == name)
            {
                return false;
            }
            if !self.skip_paths.is_empty()
                && let Ok(abs) = std::path::absolute(entry.path())
                && self.skip_paths.contains(&abs)
            {
                return false;
            }
        }
        // Children of a no-descend directory. The root itself is never one.
        if entry.depth() >= 2
            && let Some(parent) = entry.path().parent().and_then(Path::file_name)
            && let Some(parent) = parent.to_str()
            && self.no_descend.iter().any(|name| name == parent)
        {
            return false;
        }
        true
    }
}

/// Builds a sorted `WalkBuilder` with the given options, using `filter_entry`
/// for pruning.
///
/// Every entry is visited: hidden files included, ignore files disabled,
/// symlinks not followed.
pub(crate) fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder.max_depth(options.max_depth());
    builder.follow_links(false);
    builder.standard_filters(false);

    builder.sort_by_file_name(|a, b| a.cmp(b));

    if !options.skip_dirs().is_empty()
        || !options.skip_paths().is_empty()
        || !options.no_descend().is_empty()
    {
        let pruning = Arc::new(Pruning {
            skip_dirs: options.skip_dirs().to_vec(),
            skip_paths: options
                .skip_paths()
                .iter()
                .map(|p| std::path::absolute(p).unwrap_or_else(|_| p.clone()))
                .collect(),
            no_descend: options.no_descend().to_vec(),
        });
        builder.filter_entry(move |entry| pruning.keeps(entry));
    }

    builder
}

/// Walks `root` depth-first, siblings sorted by file name.
///
/// Unreadable entries are logged and counted rather than aborting the walk.
/// A missing root yields an empty result.
///
/// # Example
/// ```no_run
/// use cstools::utility::fs::walk::{walk, WalkOptions};
///
/// let options = WalkOptions::builder()
///     .with_skip_dirs(vec![".git".to_string()])
///     .build();
/// let result = walk("workspace", &options);
/// println!("Found {} files", result.files().len());
/// ```
pub fn walk<P: AsRef<Path>>(root: P, options: &WalkOptions) -> WalkResult {
    let root = root.as_ref();

    let mut files = Vec::new();
    let mut directories = Vec::new();
    let mut error_count = 0;

    if !root.exists() {
        debug!(root = %root.display(), "nothing to walk");
        return WalkResult {
            files,
            directories,
            error_count,
        };
    }

    for entry in build_walker(root, options).build() {
        match entry {
            Ok(entry) if entry.depth() == 0 => {}
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    directories.push(entry.into_path());
                } else if entry.file_type().is_some_and(|ft| ft.is_file()) {
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!(error = %e, "walk error");
                error_count += 1;
            }
        }
    }

    WalkResult {
        files,
        directories,
        error_count,
    }
}
