// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

/// Packager Module
///
/// Builds the argument list for one packaging run and hands it to the
/// external packager (PyInstaller by default).

use crate::error::{BuildError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

pub const DEFAULT_COMMAND: &str = "pyinstaller";

/// Executable file name the packager produces for `app_name`.
pub fn exe_name(app_name: &str) -> String {
    format!("{}{}", app_name, std::env::consts::EXE_SUFFIX)
}

/// One "bundle this extra data" declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSpec {
    pub source: String,
    pub dest: String,
}

impl DataSpec {
    pub fn new(source: &str, dest: &str) -> Self {
        Self { source: source.into(), dest: dest.into() }
    }
}

/// Everything the packager needs for one invocation
#[derive(Debug, Clone)]
pub struct PackageRequest {
    pub script: PathBuf,
    pub name: String,
    pub data: Vec<DataSpec>,
    pub clean: bool,
    pub dist_path: Option<PathBuf>,
    pub work_path: Option<PathBuf>,
    pub exclude_modules: Vec<String>,
    pub disable_windowed_traceback: bool,
}

impl PackageRequest {
    /// One-directory build with no confirmation prompt and error-only logging.
    pub fn new(script: impl Into<PathBuf>, name: &str) -> Self {
        Self {
            script: script.into(),
            name: name.to_string(),
            data: Vec::new(),
            clean: false,
            dist_path: None,
            work_path: None,
            exclude_modules: Vec::new(),
            disable_windowed_traceback: false,
        }
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            self.script.to_string_lossy().into_owned(),
            format!("--name={}", self.name),
            "--onedir".to_string(),
        ];

        if let Some(dist) = &self.dist_path {
            args.push(format!("--distpath={}", dist.display()));
        }
        if let Some(work) = &self.work_path {
            args.push(format!("--workpath={}", work.display()));
        }
        for spec in &self.data {
            args.push(format!("--add-data={}:{}", spec.source, spec.dest));
        }
        if self.clean {
            args.push("--clean".to_string());
        }
        args.push("--noconfirm".to_string());
        args.push("--log-level=ERROR".to_string());

        for module in &self.exclude_modules {
            args.push(format!("--exclude-module={}", module));
        }
        if self.disable_windowed_traceback {
            args.push("--disable-windowed-traceback".to_string());
        }

        args
    }
}

pub trait Packager {
    /// Run one packaging job with `workdir` as the current directory.
    fn package(&self, workdir: &Path, request: &PackageRequest) -> Result<()>;
}

/// The real PyInstaller, launched as a child process.
#[derive(Debug, Clone)]
pub struct PyInstaller {
    command: Vec<String>,
}

impl PyInstaller {
    /// `command` may carry its own arguments, e.g. `python -m PyInstaller`.
    pub fn new(command: &str) -> Self {
        let mut parts = split_shell_args(command);
        if parts.is_empty() {
            parts.push(DEFAULT_COMMAND.to_string());
        }
        Self { command: parts }
    }
}

impl Default for PyInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl Packager for PyInstaller {
    fn package(&self, workdir: &Path, request: &PackageRequest) -> Result<()> {
        let args = request.to_args();
        log::debug!("running {} {}", self.command.join(" "), args.join(" "));

        let status = Command::new(&self.command[0])
            .args(&self.command[1..])
            .args(&args)
            .current_dir(workdir)
            .status()
            .map_err(|e| BuildError::PackagerSpawn {
                command: self.command.join(" "),
                source: e,
            })?;

        if !status.success() {
            return Err(BuildError::PackagerFailed {
                name: request.name.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

// Splits a command string on spaces, keeping double-quoted parts together.
fn split_shell_args(cmd: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in cmd.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ' ' && !in_quotes {
            if !current.is_empty() {
                args.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        args.push(current);
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_respects_quotes() {
        assert_eq!(
            split_shell_args(r#"python -m PyInstaller"#),
            vec!["python", "-m", "PyInstaller"]
        );
        assert_eq!(
            split_shell_args(r#""C:\Program Files\py\pyinstaller.exe"  --x"#),
            vec![r"C:\Program Files\py\pyinstaller.exe", "--x"]
        );
        assert!(split_shell_args("   ").is_empty());
    }

    #[test]
    fn blank_command_falls_back_to_default() {
        assert_eq!(PyInstaller::new("").command, vec![DEFAULT_COMMAND]);
    }

    #[test]
    fn minimal_request_args() {
        let req = PackageRequest::new("test_system.py", "test_system");
        assert_eq!(
            req.to_args(),
            vec![
                "test_system.py",
                "--name=test_system",
                "--onedir",
                "--noconfirm",
                "--log-level=ERROR",
            ]
        );
    }

    #[test]
    fn full_request_args_are_ordered() {
        let mut req = PackageRequest::new("start_app.py", "start_app");
        req.clean = true;
        req.data.push(DataSpec::new("settings.yaml", "."));
        req.dist_path = Some("dist_temp".into());
        req.work_path = Some("build_temp".into());
        req.exclude_modules.push("unused".into());
        req.disable_windowed_traceback = true;

        assert_eq!(
            req.to_args(),
            vec![
                "start_app.py",
                "--name=start_app",
                "--onedir",
                "--distpath=dist_temp",
                "--workpath=build_temp",
                "--add-data=settings.yaml:.",
                "--clean",
                "--noconfirm",
                "--log-level=ERROR",
                "--exclude-module=unused",
                "--disable-windowed-traceback",
            ]
        );
    }

    #[test]
    fn missing_packager_binary_is_a_spawn_error() {
        let packager = PyInstaller::new("distpack-no-such-packager-binary");
        let req = PackageRequest::new("x.py", "x");
        let err = packager.package(Path::new("."), &req).unwrap_err();
        assert!(matches!(err, BuildError::PackagerSpawn { .. }));
    }

    #[test]
    fn exe_name_uses_platform_suffix() {
        assert_eq!(exe_name("app"), format!("app{}", std::env::consts::EXE_SUFFIX));
    }
}
