// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Filesystem Operations Module
//
// Guarded move with backup-on-overwrite, plus the small removal and lookup
// helpers the build pipelines share.

use crate::error::{BuildError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const BACKUP_SUFFIX: &str = ".bak";

/// `<path>.bak`, keeping any existing extension (`app.exe` -> `app.exe.bak`).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Remove a file or a directory tree, whichever `path` currently is.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Recursive removal that ignores every error, including a missing directory.
pub fn remove_dir_best_effort(path: &Path) {
    if path.exists() {
        if let Err(e) = fs::remove_dir_all(path) {
            log::debug!("ignoring failure to remove {}: {}", path.display(), e);
        }
    }
}

/// Rename whatever sits at `path` to its backup name, replacing a stale backup.
///
/// Returns the backup path when something was moved aside.
pub fn backup_existing(path: &Path) -> io::Result<Option<PathBuf>> {
    if fs::symlink_metadata(path).is_err() {
        return Ok(None);
    }

    let backup = backup_path(path);
    if fs::symlink_metadata(&backup).is_ok() {
        log::debug!("removing stale backup {}", backup.display());
        remove_path(&backup)?;
    }

    fs::rename(path, &backup)?;
    println!("🔁 Backup created: {}", backup.display());
    Ok(Some(backup))
}

/// Move `source` to `destination`, backing up anything already there.
pub fn try_move(source: &Path, destination: &Path) -> Result<Option<PathBuf>> {
    if fs::symlink_metadata(source).is_err() {
        return Err(BuildError::MissingSource(source.to_path_buf()));
    }

    let relocation = |e: io::Error| BuildError::Relocation {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: e,
    };

    let backup = backup_existing(destination).map_err(relocation)?;

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(relocation)?;
        }
    }

    move_item(source, destination).map_err(relocation)?;
    Ok(backup)
}

/// Boolean front for [`try_move`]: prints the failure and reports `false`.
pub fn safe_move(source: &Path, destination: &Path) -> bool {
    match try_move(source, destination) {
        Ok(_) => true,
        Err(BuildError::MissingSource(path)) => {
            println!("⚠️ File to move not found: {}", path.display());
            false
        }
        Err(e) => {
            println!("❌ {}", e);
            false
        }
    }
}

// Rename when possible, otherwise copy then delete (e.g. across devices)
fn move_item(source: &Path, destination: &Path) -> io::Result<()> {
    move_item_with(source, destination, |from, to| fs::rename(from, to))
}

fn move_item_with<R>(source: &Path, destination: &Path, rename: R) -> io::Result<()>
where
    R: Fn(&Path, &Path) -> io::Result<()>,
{
    let e = match rename(source, destination) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };
    log::debug!(
        "rename {} -> {} failed ({}), falling back to copy",
        source.display(),
        destination.display(),
        e
    );

    let copied = if source.is_dir() {
        copy_tree(source, destination)
    } else {
        fs::copy(source, destination).map(|_| ())
    };

    // A half-written destination must not shadow the untouched source.
    if let Err(e) = copied {
        if fs::symlink_metadata(destination).is_ok() {
            let _ = remove_path(destination);
        }
        return Err(e);
    }

    if source.is_dir() {
        fs::remove_dir_all(source)
    } else {
        fs::remove_file(source)
    }
}

// Copy a directory tree, preserving its relative structure
fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;

    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let dest_path = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path)?;
        } else {
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest_path)?;
        }
    }

    Ok(())
}

/// Every entry of `required` that does not exist under `root`.
pub fn missing_paths<S: AsRef<str>>(root: &Path, required: &[S]) -> Vec<PathBuf> {
    required
        .iter()
        .map(|r| PathBuf::from(r.as_ref()))
        .filter(|r| !root.join(r).exists())
        .collect()
}

pub fn file_size_mb(path: &Path) -> io::Result<f64> {
    Ok(fs::metadata(path)?.len() as f64 / 1024.0 / 1024.0)
}
