// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Full Build Orchestrator
//
// Packages the main application, lifts its config and assets out of the
// support folder, then packages the test system and drops its executable next
// to the main one.

use crate::config::{BuildConfig, Target};
use crate::error::{BuildError, Result};
use crate::fsops;
use crate::layout::Layout;
use crate::packager::{exe_name, DataSpec, PackageRequest, Packager};
use std::path::PathBuf;

/// Inputs the main build refuses to start without (besides the script).
pub const REQUIRED_INPUTS: [&str; 5] = ["settings.yaml", ".env", "static/", "assets/", "ffmpeg/"];

/// Items moved from `_internal/` to the top of the main output folder.
pub const RELOCATED_ITEMS: [&str; 2] = ["settings.yaml", "assets"];

fn bundled_data() -> Vec<DataSpec> {
    vec![
        DataSpec::new("templates/*", "templates"),
        DataSpec::new("settings.yaml", "."),
        DataSpec::new(".env", "."),
        DataSpec::new("static", "static"),
        DataSpec::new("assets", "assets"),
        DataSpec::new("ffmpeg", "ffmpeg"),
    ]
}

pub struct Orchestrator<'a, P: Packager> {
    layout: Layout,
    config: &'a BuildConfig,
    packager: &'a P,
}

impl<'a, P: Packager> Orchestrator<'a, P> {
    pub fn new(layout: Layout, config: &'a BuildConfig, packager: &'a P) -> Self {
        Self { layout, config, packager }
    }

    /// Output folder of the main application, where everything ends up.
    pub fn output_dir(&self) -> PathBuf {
        self.layout.app_dir(&self.config.main.name)
    }

    /// Remove previous `dist/` and `build/` trees, ignoring failures.
    pub fn clean(&self) {
        fsops::remove_dir_best_effort(&self.layout.dist_dir());
        fsops::remove_dir_best_effort(&self.layout.build_dir());
    }

    /// Build the main application and post-process its output.
    pub fn build_main_app(&self) -> Result<()> {
        println!("🔧 Building main application...");
        let main = &self.config.main;

        let mut required = vec![main.script.clone()];
        required.extend(REQUIRED_INPUTS.iter().map(|s| s.to_string()));

        let missing = fsops::missing_paths(self.layout.root(), &required);
        if !missing.is_empty() {
            println!("❌ Required files are missing:");
            for path in &missing {
                println!("- {}", path.display());
            }
            return Err(BuildError::MissingInputs(missing));
        }

        let mut request = PackageRequest::new(&main.script, &main.name);
        request.data = bundled_data();
        request.clean = true;
        if let Err(e) = self.packager.package(self.layout.root(), &request) {
            println!("❌ Error building main application: {}", e);
            return Err(e);
        }

        self.relocate_bundled_items(main);

        println!("✅ Main application built");
        Ok(())
    }

    // Relocation failures are reported but never fail the main build.
    fn relocate_bundled_items(&self, main: &Target) {
        let dist_dir = self.layout.app_dir(&main.name);
        let internal_dir = self.layout.internal_dir(&main.name);

        for item in RELOCATED_ITEMS {
            if !fsops::safe_move(&internal_dir.join(item), &dist_dir.join(item)) {
                log::warn!("{} stays inside {}", item, internal_dir.display());
            }
        }
    }

    /// Build the test system and move its executable into the main output.
    pub fn build_test_system(&self) -> Result<()> {
        println!("\n🔧 Building test system...");
        let secondary = &self.config.secondary;

        let script = self.layout.path(&secondary.script);
        if !script.exists() {
            println!("❌ {} not found", secondary.script);
            return Err(BuildError::MissingSource(script));
        }

        let mut request = PackageRequest::new(&secondary.script, &secondary.name);
        request.clean = true;
        if let Err(e) = self.packager.package(self.layout.root(), &request) {
            println!("❌ Error building test system: {}", e);
            return Err(e);
        }

        let exe = exe_name(&secondary.name);
        let secondary_dir = self.layout.app_dir(&secondary.name);
        let src_exe = secondary_dir.join(&exe);
        let dst_exe = self.output_dir().join(&exe);

        if let Err(e) = fsops::try_move(&src_exe, &dst_exe) {
            println!("❌ Failed to move {}: {}", exe, e);
            return Err(e);
        }

        fsops::remove_dir_best_effort(&secondary_dir);

        println!("✅ Test system built");
        Ok(())
    }

    /// Clean, build both applications and report the combined outcome.
    pub fn build_all(&self) -> Result<()> {
        self.clean();

        let result = self.build_main_app().and_then(|()| self.build_test_system());

        match &result {
            Ok(()) => {
                let output = self.output_dir();
                let shown = std::fs::canonicalize(&output).unwrap_or(output);
                println!("\n🎉 Both applications built successfully!");
                println!("📁 Output folder: {}", shown.display());
            }
            Err(e) => {
                log::debug!("build failed: {:?}", e);
                println!("\n❌ Build finished with errors");
            }
        }

        result
    }
}
