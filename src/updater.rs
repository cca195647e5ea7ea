// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Incremental Executable Updater
//
// Repackages a single script into throwaway directories and swaps only the
// resulting executable into the existing distribution.

use crate::error::{BuildError, Result};
use crate::fsops;
use crate::layout::Layout;
use crate::packager::{exe_name, PackageRequest, Packager};
use std::path::{Path, PathBuf};

/// Module name passed to `--exclude-module` to keep the analysis short.
pub const EXCLUDED_MODULE: &str = "unused";

/// Result of a successful update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReport {
    pub executable: PathBuf,
    pub backup: Option<PathBuf>,
    pub size_mb: f64,
}

// Removes the temporary dist/work pair however the update ends.
struct TempDirs {
    dist: PathBuf,
    work: PathBuf,
}

impl Drop for TempDirs {
    fn drop(&mut self) {
        fsops::remove_dir_best_effort(&self.dist);
        fsops::remove_dir_best_effort(&self.work);
    }
}

/// Application name for a script: its file name without the extension.
pub fn app_name(script: &Path) -> Option<String> {
    script
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
}

/// Rebuild `script` and replace its executable inside `target_dir`.
pub fn fast_update<P: Packager>(
    layout: &Layout,
    packager: &P,
    script: &Path,
    target_dir: &Path,
) -> Result<UpdateReport> {
    println!("⚡ Updating EXE for {}", script.display());

    let app = app_name(script).ok_or_else(|| BuildError::MissingSource(script.to_path_buf()))?;

    let temp = TempDirs {
        dist: layout.temp_dist_dir(),
        work: layout.temp_work_dir(),
    };

    let script_path = layout.path(script);
    if !script_path.exists() {
        return Err(BuildError::MissingSource(script_path));
    }

    let mut request = PackageRequest::new(script, &app);
    request.dist_path = Some(temp.dist.clone());
    request.work_path = Some(temp.work.clone());
    request.exclude_modules.push(EXCLUDED_MODULE.to_string());
    request.disable_windowed_traceback = true;
    packager.package(layout.root(), &request)?;

    let exe = exe_name(&app);
    let new_exe = temp.dist.join(&app).join(&exe);
    if !new_exe.exists() {
        return Err(BuildError::ExecutableNotFound(new_exe));
    }

    let old_exe = target_dir.join(&exe);
    let backup = fsops::try_move(&new_exe, &old_exe)?;

    let size_mb = fsops::file_size_mb(&old_exe)?;
    println!("✅ EXE updated. Size: {:.1} MB", size_mb);

    Ok(UpdateReport {
        executable: old_exe,
        backup,
        size_mb,
    })
}
