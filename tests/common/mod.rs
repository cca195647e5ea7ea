// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

#![allow(dead_code)]

use distpack::packager::{exe_name, PackageRequest, Packager};
use distpack::{BuildError, Result};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Writes `<dist>/<name>/<name><EXE>` and an `_internal/` with the bundled data.
    Produce,
    /// Exits unsuccessfully without touching the filesystem.
    Fail,
    /// Succeeds but leaves no executable behind.
    NoExecutable,
}

/// Stand-in packager that fabricates the output layout and records requests.
pub struct FakePackager {
    outcome: Outcome,
    pub calls: RefCell<Vec<PackageRequest>>,
}

impl FakePackager {
    pub fn new(outcome: Outcome) -> Self {
        Self { outcome, calls: RefCell::new(Vec::new()) }
    }

    pub fn names(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|r| r.name.clone()).collect()
    }
}

impl Packager for FakePackager {
    fn package(&self, workdir: &Path, request: &PackageRequest) -> Result<()> {
        self.calls.borrow_mut().push(request.clone());

        // Real runs leave these behind whatever happens.
        for scratch in [&request.dist_path, &request.work_path].into_iter().flatten() {
            fs::create_dir_all(workdir.join(scratch))?;
        }

        match self.outcome {
            Outcome::Fail => {
                return Err(BuildError::PackagerFailed { name: request.name.clone(), code: Some(1) })
            }
            Outcome::NoExecutable => {}
            Outcome::Produce => {
                let dist = match &request.dist_path {
                    Some(d) => workdir.join(d),
                    None => workdir.join("dist"),
                };
                let app_dir = dist.join(&request.name);
                let internal = app_dir.join("_internal");
                fs::create_dir_all(&internal)?;
                fs::write(app_dir.join(exe_name(&request.name)), format!("{} binary", request.name))?;

                for spec in request.data.iter().filter(|s| !s.source.contains('*')) {
                    let src = workdir.join(&spec.source);
                    if src.is_dir() {
                        let dst = internal.join(&spec.dest);
                        fs::create_dir_all(&dst)?;
                        fs::write(dst.join("bundled.txt"), &spec.source)?;
                    } else {
                        fs::copy(&src, internal.join(&spec.source))?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Lay down every input the main and secondary builds expect.
pub fn seed_project(root: &Path) {
    for file in ["start_app.py", "test_system.py", ".env"] {
        fs::write(root.join(file), "").unwrap();
    }
    fs::write(root.join("settings.yaml"), "debug: false\n").unwrap();
    for dir in ["static", "assets", "ffmpeg", "templates"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
}

pub fn count_backups(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().ends_with(".bak"))
        .count()
}
