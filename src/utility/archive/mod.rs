// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tar and zip extraction.
//!
//! ```text
//! ArchiveExtractor::tar(archive, dest)      traversal check ON
//! ArchiveExtractor::zip(archive, dest)      traversal check OFF
//!   .traversal_check(bool)
//!   .extract()
//!
//! checked:    pass 1  every member resolved against absolute dest
//!                     escape -> ArchiveError::PathTraversal, nothing written
//! tar pass 2:         each member written to its resolved path
//!                     (a/../b.txt -> dest/b.txt)
//! unchecked:  members joined onto dest as stored
//! ```
//!
//! Tarballs may be plain or gzip-compressed; gzip is detected from the
//! magic bytes, not the file name.
//!
//! Zip archives are not checked by default. A member named `../x` is
//! written outside the destination unless `traversal_check(true)` is set.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::{debug, info};

use crate::error::{ArchiveError, CsResult};


const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// Tarball, optionally gzip-compressed.
    Tar,
    Zip,
}

impl ArchiveFormat {
    /// Whether members are checked for path traversal unless overridden.
    #[must_use]
    pub const fn checks_traversal_by_default(self) -> bool {
        matches!(self, Self::Tar)
    }
}

/// Extracts an archive file into a destination directory.
#[derive(Debug, Clone)]
pub struct ArchiveExtractor {
    archive: PathBuf,
    destination: PathBuf,
    format: ArchiveFormat,
    traversal_check: bool,
}

impl ArchiveExtractor {
    /// Creates an extractor with the format's default traversal policy.
    pub fn new(
        archive: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        format: ArchiveFormat,
    ) -> Self {
        Self {
            archive: archive.into(),
            destination: destination.into(),
            format,
            traversal_check: format.checks_traversal_by_default(),
        }
    }

    pub fn tar(archive: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self::new(archive, destination, ArchiveFormat::Tar)
    }

    pub fn zip(archive: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self::new(archive, destination, ArchiveFormat::Zip)
    }

    /// Switches the path-traversal check on or off.
    #[must_use]
    pub const fn traversal_check(mut self, enabled: bool) -> Self {
        self.traversal_check = enabled;
        self
    }

    #[must_use]
    pub const fn format(&self) -> ArchiveFormat {
        self.format
    }

    #[must_use]
    pub const fn checks_traversal(&self) -> bool {
        self.traversal_check
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Extracts every member and returns the number of members processed.
    ///
    /// This is blocking; async callers run it inside `spawn_blocking`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The archive cannot be opened or is corrupt.
    /// - Path checking is enabled and a member escapes the destination
    ///   (`ArchiveError::PathTraversal`). Nothing is written in that case.
    /// - Writing a member fails.
    pub fn extract(&self) -> CsResult<usize> {
        info!(
            "Extracting: {} -> {}",
            self.archive.display(),
            self.destination.display()
        );
        std::fs::create_dir_all(&self.destination).map_err(|source| self.read_error(source))?;

        let count = match self.format {
            ArchiveFormat::Tar => self.extract_tar()?,
            ArchiveFormat::Zip => self.extract_zip()?,
        };

        debug!(members = count, destination = %self.destination.display(), "extracted");
        Ok(count)
    }

    fn read_error(&self, source: std::io::Error) -> ArchiveError {
        ArchiveError::Read {
            path: self.archive.clone(),
            source,
        }
    }

    fn open_tar(&self) -> CsResult<tar::Archive<Box<dyn Read>>> {
        let mut file = File::open(&self.archive).map_err(|source| self.read_error(source))?;

        let mut magic = [0u8; 2];
        let gzipped = match file.read_exact(&mut magic) {
            Ok(()) => magic == GZIP_MAGIC,
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => false,
            Err(source) => return Err(self.read_error(source).into()),
        };
        file.seek(SeekFrom::Start(0))
            .map_err(|source| self.read_error(source))?;

        let reader: Box<dyn Read> = if gzipped {
            Box::new(GzDecoder::new(BufReader::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        Ok(tar::Archive::new(reader))
    }

    fn extract_tar(&self) -> CsResult<usize> {
        let root = absolute_root(&self.destination)?;

        let mut count = 0;
        let mut archive = self.open_tar()?;
        for entry in archive.entries().map_err(|source| self.read_error(source))? {
            let entry = entry.map_err(|source| self.read_error(source))?;
            let member = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            if self.traversal_check {
                ensure_within(&root, &member)?;
                if let Some(link) = hard_link_source(&entry) {
                    ensure_within(&root, &link)?;
                }
            }
            count += 1;
        }

        let mut archive = self.open_tar()?;
        for entry in archive.entries().map_err(|source| self.read_error(source))? {
            let mut entry = entry.map_err(|source| self.read_error(source))?;
            let member = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            let target = normalize(&root.join(&member));
            if target == root {
                continue;
            }
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|source| self.read_error(source))?;
            }
            // Link sources resolve against the destination, not the cwd.
            let written = match hard_link_source(&entry) {
                Some(link) => std::fs::hard_link(normalize(&root.join(link)), &target),
                None => entry.unpack(&target).map(|_| ()),
            };
            written.map_err(|source| self.read_error(source))?;
        }

        Ok(count)
    }

    fn extract_zip(&self) -> CsResult<usize> {
        let file = File::open(&self.archive).map_err(|source| self.read_error(source))?;
        let mut archive = zip::ZipArchive::new(BufReader::new(file)).map_err(ArchiveError::from)?;

        if self.traversal_check {
            let root = absolute_root(&self.destination)?;
            for member in archive.file_names() {
                ensure_within(&root, member)?;
            }
        }

        for i in 0..archive.len() {
            let mut member = archive.by_index(i).map_err(ArchiveError::from)?;
            let target = self.destination.join(member.name());

            if member.is_dir() {
                std::fs::create_dir_all(&target).map_err(|source| self.read_error(source))?;
                continue;
            }

            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|source| self.read_error(source))?;
            }
            let mut out = File::create(&target).map_err(|source| self.read_error(source))?;
            std::io::copy(&mut member, &mut out).map_err(|source| self.read_error(source))?;

            #[cfg(unix)]
            if let Some(mode) = member.unix_mode() {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(&target, std::fs::Permissions::from_mode(mode))
                    .map_err(|source| self.read_error(source))?;
            }
        }

        Ok(archive.len())
    }
}

fn hard_link_source<R: Read>(entry: &tar::Entry<'_, R>) -> Option<String> {
    if !entry.header().entry_type().is_hard_link() {
        return None;
    }
    entry
        .link_name_bytes()
        .map(|name| String::from_utf8_lossy(&name).into_owned())
}

fn absolute_root(destination: &Path) -> CsResult<PathBuf> {
    let absolute = std::path::absolute(destination).map_err(|source| ArchiveError::Read {
        path: destination.to_path_buf(),
        source,
    })?;
    Ok(normalize(&absolute))
}

/// Resolves `..` and `.` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Fails if `member`, joined onto `root`, resolves outside of it.
fn ensure_within(root: &Path, member: &str) -> CsResult<()> {
    let resolved = normalize(&root.join(member));
    if resolved.starts_with(root) {
        Ok(())
    } else {
        Err(ArchiveError::PathTraversal {
            member: member.to_string(),
            destination: root.to_path_buf(),
        }
        .into())
    }
}
