/// Configuration Management Module
///
/// Reads the optional build.toml at the project root. Every field falls back
/// to the stock start_app / test_system setup.

use crate::error::{BuildError, Result};
use crate::packager::DEFAULT_COMMAND;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "build.toml";

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PackagerConfig {
    pub command: String,
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self { command: DEFAULT_COMMAND.into() }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TargetConfig {
    pub script: Option<String>,
    pub name: Option<String>,
}

/// A resolved script / application-name pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub script: String,
    pub name: String,
}

impl Target {
    fn resolve(cfg: Option<TargetConfig>, script: &str, name: &str) -> Self {
        let cfg = cfg.unwrap_or(TargetConfig { script: None, name: None });
        Self {
            script: cfg.script.unwrap_or_else(|| script.into()),
            name: cfg.name.unwrap_or_else(|| name.into()),
        }
    }
}

#[derive(Deserialize, Default)]
struct BuildToml {
    packager: Option<PackagerConfig>,
    main: Option<TargetConfig>,
    secondary: Option<TargetConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    pub packager: PackagerConfig,
    pub main: Target,
    pub secondary: Target,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::from_toml(BuildToml::default())
    }
}

impl BuildConfig {
    fn from_toml(parsed: BuildToml) -> Self {
        Self {
            packager: parsed.packager.unwrap_or_default(),
            main: Target::resolve(parsed.main, "start_app.py", "start_app"),
            secondary: Target::resolve(parsed.secondary, "test_system.py", "test_system"),
        }
    }
}

/// Load the build configuration; a missing file yields the defaults.
pub fn load_config(config_path: &Path) -> Result<BuildConfig> {
    if !config_path.exists() {
        return Ok(BuildConfig::default());
    }

    let config_error = |reason: String| BuildError::Config {
        path: config_path.to_path_buf(),
        reason,
    };

    let content = fs::read_to_string(config_path).map_err(|e| config_error(e.to_string()))?;
    let parsed = toml::from_str::<BuildToml>(&content).map_err(|e| config_error(e.to_string()))?;

    Ok(BuildConfig::from_toml(parsed))
}
