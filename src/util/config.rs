//! Configuration file support for Capstan.
//!
//! An optional `capstan.toml` at the project root adjusts the vendor
//! identity and staging behavior:
//!
//! ```toml
//! sdk_root = "Vendor/Steam"       # optional override of ThirdParty/<name>
//!
//! [vendor]
//! name = "Steamworks"
//! define = "STEAM_SDK_AVAILABLE"
//! windows_library = "steam_api64"
//! posix_library = "steam_api"
//!
//! [staging]
//! out_dir = "Binaries/Win64"      # optional, defaults to Binaries/<Platform>
//! overwrite = true
//! ```
//!
//! A missing file means defaults; a malformed file warns and falls back to
//! defaults unless the path was given explicitly on the command line.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::platform::Platform;
use crate::core::sdk::VendorSpec;
use crate::util::diagnostic::ConfigError;

/// Conventional config filename at the project root.
pub const CONFIG_FILE_NAME: &str = "capstan.toml";

/// Capstan configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vendor identity and artifact naming
    pub vendor: VendorSpec,

    /// Override of the SDK root; absolute, or relative to the project root
    pub sdk_root: Option<PathBuf>,

    /// Runtime staging settings
    pub staging: StagingConfig,
}

/// Staging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingConfig {
    /// Destination directory; absolute, or relative to the project root
    pub out_dir: Option<PathBuf>,

    /// Replace already-staged files
    pub overwrite: bool,
}

impl Default for StagingConfig {
    fn default() -> Self {
        StagingConfig {
            out_dir: None,
            overwrite: true,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `capstan.toml` from the project root, falling back to defaults
    /// if it is missing or malformed.
    pub fn load_or_default(project_root: &Path) -> Self {
        let path = project_root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Config::default();
        }

        Config::load(&path).unwrap_or_else(|e| {
            tracing::warn!("{:#}; using defaults", anyhow::Error::from(e));
            Config::default()
        })
    }

    /// The SDK root to probe: the configured override, or the conventional
    /// `ThirdParty/<Vendor>` location.
    pub fn sdk_root_for(&self, project_root: &Path) -> PathBuf {
        match &self.sdk_root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => project_root.join(root),
            None => self.vendor.conventional_root(project_root),
        }
    }

    /// The staging destination: the configured directory, or the engine
    /// convention `Binaries/<Platform>`.
    pub fn out_dir_for(&self, project_root: &Path, platform: Platform) -> PathBuf {
        match &self.staging.out_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => project_root.join(dir),
            None => project_root.join("Binaries").join(platform.as_str()),
        }
    }
}
