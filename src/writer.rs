//! Atomic replacement of the rendered include files.
//!
//! Each artifact is written to a temporary file next to its destination,
//! flushed to disk, given its final permission bits and renamed over the
//! destination. A reader of the destination sees either the old file or the
//! new one, never a partial write. Temporary files are removed on failure.

use std::ffi::OsStr;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, warn};

use crate::error::{MapError, Result};
use crate::fs_abstraction::FileSystem;

/// Owner read/write, group and others read-only
pub const ARTIFACT_MODE: u32 = 0o644;

/// A finished document and the path it must end up at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Replace `path` with `content` in one rename.
pub fn write_file_atomic(fs: &dyn FileSystem, path: &Path, content: &str) -> Result<()> {
    let persist_err = |what: &str, e: std::io::Error| {
        MapError::Persist(format!("{}: {} ({})", path.display(), what, e))
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| MapError::Persist(format!("{}: path has no file name", path.display())))?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    fs.create_dir_all(parent)
        .map_err(|e| persist_err("failed to create parent directory", e))?;

    // Same directory as the destination so the rename never crosses filesystems.
    // Dropping `temp` on any early return deletes it.
    let mut temp = Builder::new()
        .prefix(file_name)
        .suffix(OsStr::new(".tmp"))
        .tempfile_in(parent)
        .map_err(|e| persist_err("failed to create temporary file", e))?;
    debug!("Writing {} bytes to {}", content.len(), temp.path().display());

    temp.write_all(content.as_bytes())
        .map_err(|e| persist_err("failed to write temporary file", e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| persist_err("failed to flush temporary file", e))?;

    // Mode is applied before the rename so the destination never shows the
    // temporary file's 0600 bits.
    fs.set_permissions_mode(temp.path(), ARTIFACT_MODE)
        .map_err(|e| persist_err("failed to set permissions", e))?;

    temp.persist(path)
        .map_err(|e| persist_err("failed to rename temporary file", e.error))?;

    // Durability of the rename itself; the replacement is already visible.
    if let Err(e) = File::open(parent).and_then(|dir| dir.sync_all()) {
        debug!("Could not sync directory {}: {}", parent.display(), e);
    }

    Ok(())
}

/// Persist every artifact, attempting all of them even after a failure.
///
/// Returns a single [`MapError::Persist`] naming every destination that
/// could not be replaced.
pub fn write_artifacts(fs: &dyn FileSystem, artifacts: &[Artifact]) -> Result<()> {
    let failures: Vec<String> = artifacts
        .iter()
        .filter_map(|artifact| {
            write_file_atomic(fs, &artifact.path, &artifact.content)
                .err()
                .map(|e| {
                    warn!("{}", e);
                    match e {
                        MapError::Persist(msg) => msg,
                        other => other.to_string(),
                    }
                })
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(MapError::Persist(failures.join("; ")))
    }
}
