// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

//! Error type shared by every build stage.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("missing required inputs: {}", join_paths(.0))]
    MissingInputs(Vec<PathBuf>),

    #[error("file not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("failed to start packager `{command}`: {source}")]
    PackagerSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("packager failed for `{name}` (exit code {})", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    PackagerFailed { name: String, code: Option<i32> },

    #[error("packager produced no executable at {}", .0.display())]
    ExecutableNotFound(PathBuf),

    #[error("failed to move {} -> {}: {source}", .from.display(), .to.display())]
    Relocation {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, BuildError>;
