//! CLI command implementations.

pub mod completions;
pub mod doctor;
pub mod resolve;
pub mod stage;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use capstan::core::platform::Platform;
use capstan::util::config::Config;

/// Resolve the project root and configuration shared by every command.
///
/// An explicit `--config` path must load; the conventional `capstan.toml`
/// at the project root is optional and falls back to defaults.
pub(crate) fn load(
    project_root: &Option<PathBuf>,
    config: &Option<PathBuf>,
) -> Result<(PathBuf, Config)> {
    let root = match project_root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("failed to get current directory")?,
    };

    let config = match config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&root),
    };

    Ok((root, config))
}

/// Parse the platform argument, defaulting to the host.
pub(crate) fn platform_arg(platform: &Option<String>) -> Platform {
    match platform {
        Some(id) => Platform::parse(id),
        None => Platform::host(),
    }
}

/// Shorten a path for display when it sits under the project root.
pub(crate) fn display_path(project_root: &Path, path: &Path) -> String {
    capstan::util::fs::relative_path(project_root, path)
        .display()
        .to_string()
}
