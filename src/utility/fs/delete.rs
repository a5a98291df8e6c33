// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Delete-by-pattern.
//!
//! ```text
//! delete_matching(root, "bin/**/*.pdb")
//!   no wildcard at all      root/<pattern> exists? --> [it]
//!   split literal prefix    root/bin  +  **/*.pdb
//!   shell syntax -> wax     * ? [..] **, everything else literal
//!   walk (hidden included, ignore files off, depth bounded unless **)
//!   wax::Glob::is_match(relative path)
//!   remove: dirs recursively, files directly
//! ```

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};
use wax::{Glob, Program as _};

use super::walk::{WalkOptions, build_walker};
use crate::error::{CsResult, FsError};

/// Characters that make a pattern component a wildcard.
const WILDCARDS: [char; 3] = ['*', '?', '['];

fn has_wildcard(component: &str) -> bool {
    component.contains(WILDCARDS)
}

/// Splits `pattern` into its leading literal directories and the remaining
/// glob. A fully literal pattern keeps its final component as the glob.
pub(super) fn split_literal_prefix(pattern: &str) -> (PathBuf, String) {
    let components: Vec<Component<'_>> = Path::new(pattern).components().collect();
    let first_glob = components
        .iter()
        .position(|c| has_wildcard(&c.as_os_str().to_string_lossy()))
        .unwrap_or_else(|| components.len().saturating_sub(1));

    let prefix: PathBuf = components[..first_glob].iter().collect();
    let rest = components[first_glob..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    (prefix, rest)
}

/// Parses a `[...]` class at the start of `chars` into wax syntax, returning
/// it with the number of characters consumed. `None` makes the `[` literal.
fn class(chars: &[char]) -> Option<(String, usize)> {
    let negated = chars.get(1) == Some(&'!');
    let body_start = if negated { 2 } else { 1 };
    let close = chars.get(body_start..)?.iter().position(|&c| c == ']')? + body_start;
    let body = &chars[body_start..close];
    if body.is_empty() || body.iter().any(|&c| c == '[' || c == '\\') {
        return None;
    }

    let mut out = String::from(if negated { "[!" } else { "[" });
    for (i, &c) in body.iter().enumerate() {
        // A leading or trailing `-` is literal.
        if c == '-' && (i == 0 || i == body.len() - 1) {
            out.push_str("\\-");
        } else {
            out.push(c);
        }
    }
    out.push(']');
    Some((out, close + 1))
}

/// Rewrites one shell-style component as a wax expression.
///
/// `*`, `?` and `[...]` keep their meaning, a lone `**` stays recursive,
/// and every other wax meta-character is escaped.
pub(super) fn to_wax_component(component: &str) -> String {
    if component == "**" {
        return component.to_string();
    }

    let chars: Vec<char> = component.chars().collect();
    let mut out = String::with_capacity(component.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            // Runs of `*` inside a component mean the same as one.
            '*' if i > 0 && chars[i - 1] == '*' => {}
            '*' | '?' => out.push(chars[i]),
            '[' => {
                if let Some((expression, len)) = class(&chars[i..]) {
                    out.push_str(&expression);
                    i += len;
                    continue;
                }
                out.push_str("\\[");
            }
            c if wax::is_meta_character(c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
        i += 1;
    }
    out
}

/// Expands `pattern` relative to `root` and returns every matching file or
/// directory, sorted. A match nested inside another match is omitted.
///
/// Absolute patterns ignore `root`. A missing base directory yields no
/// matches. Only `*`, `?` and `[...]` are wildcards, so a pattern without
/// them names exactly one entry.
///
/// # Errors
///
/// Returns `FsError::InvalidPattern` if the glob does not parse.
pub fn find_matching(root: &Path, pattern: &str) -> CsResult<Vec<PathBuf>> {
    if !has_wildcard(pattern) {
        let target = root.join(pattern);
        return Ok(if target.symlink_metadata().is_ok() {
            vec![target]
        } else {
            Vec::new()
        });
    }

    let (prefix, rest) = split_literal_prefix(pattern);
    let expression = rest
        .split('/')
        .map(to_wax_component)
        .collect::<Vec<_>>()
        .join("/");
    let glob = Glob::new(&expression).map_err(|e| FsError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let base = root.join(prefix);
    if !base.is_dir() {
        return Ok(Vec::new());
    }

    let depth = if rest.split('/').any(|c| c == "**") {
        None
    } else {
        Some(rest.split('/').count())
    };
    let options = WalkOptions::builder().maybe_with_max_depth(depth).build();

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in build_walker(&base, &options).build().flatten() {
        if entry.depth() == 0 {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&base) else {
            continue;
        };
        if glob.is_match(relative)
            && !matches.iter().any(|m| entry.path().starts_with(m))
        {
            matches.push(entry.into_path());
        }
    }

    Ok(matches)
}

/// Deletes everything under `root` matching `pattern`: directories
/// recursively, files directly. Zero matches is a no-op.
///
/// Returns the removed paths.
///
/// # Errors
///
/// Returns an error if the pattern is invalid or a removal fails.
pub fn delete_matching(root: &Path, pattern: &str) -> CsResult<Vec<PathBuf>> {
    let matches = find_matching(root, pattern)?;
    if matches.is_empty() {
        debug!(pattern, "nothing to delete");
        return Ok(matches);
    }

    for path in &matches {
        info!("Removing: {}", path.display());
        let removed = if path.is_dir() && !path.is_symlink() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };
        removed.map_err(|source| FsError::IoError {
            path: path.display().to_string(),
            source,
        })?;
    }

    Ok(matches)
}
