// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Project Layout Module
//
// Resolves every directory the pipelines touch against an explicit project root,
// so nothing depends on the process working directory.

use std::path::{Path, PathBuf};

// --- CONSTANTS ---
pub const DIST_DIR: &str = "dist";
pub const BUILD_DIR: &str = "build";
pub const INTERNAL_DIR: &str = "_internal";
pub const TEMP_DIST_DIR: &str = "dist_temp";
pub const TEMP_WORK_DIR: &str = "build_temp";

#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn dist_dir(&self) -> PathBuf {
        self.root.join(DIST_DIR)
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join(BUILD_DIR)
    }

    /// `dist/<name>`, the packager's output folder for one application.
    pub fn app_dir(&self, name: &str) -> PathBuf {
        self.dist_dir().join(name)
    }

    /// Support subfolder the packager fills with bundled data.
    pub fn internal_dir(&self, name: &str) -> PathBuf {
        self.app_dir(name).join(INTERNAL_DIR)
    }

    pub fn temp_dist_dir(&self) -> PathBuf {
        self.root.join(TEMP_DIST_DIR)
    }

    pub fn temp_work_dir(&self) -> PathBuf {
        self.root.join(TEMP_WORK_DIR)
    }
}
