// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

//! distpack - PyInstaller build orchestration.
//!
//! The `manager` binary packages the main application and the test system into
//! one distribution folder; `rebuild` swaps a single freshly packaged
//! executable into that folder without a full rebuild.

pub mod config;
pub mod error;
pub mod fsops;
pub mod layout;
pub mod orchestrator;
pub mod packager;
pub mod updater;

pub use error::{BuildError, Result};

/// Console logger shared by both binaries; `RUST_LOG` overrides the level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
