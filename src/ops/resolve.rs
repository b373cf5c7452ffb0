//! The full resolution pass: locate, resolve artifacts, assemble the plan.

use std::path::Path;

use crate::core::profile::ProfileTable;
use crate::core::{platform::Platform, sdk};
use crate::plan::{LinkPlan, StagingPolicy};
use crate::resolver;
use crate::util::config::Config;

/// Run one resolution pass for a platform.
///
/// This is the entry point the build orchestrator calls. It cannot fail:
/// every degenerate state (missing SDK, partial artifacts, unknown
/// platform) resolves to an unavailable plan with the feature define set
/// to 0.
pub fn resolve_link_plan(
    config: &Config,
    project_root: &Path,
    platform: Platform,
    out_dir: Option<&Path>,
) -> LinkPlan {
    let sdk_root = config.sdk_root_for(project_root);
    let descriptor = sdk::locate(&sdk_root);

    let table = ProfileTable::new(&config.vendor);
    let profile = table.profile_for(platform);

    let artifacts = resolver::resolve(&descriptor, profile);

    let staging = StagingPolicy {
        out_dir: out_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.out_dir_for(project_root, platform)),
        overwrite: config.staging.overwrite,
    };

    let plan = LinkPlan::new(&artifacts, profile, &config.vendor, &staging);
    tracing::info!(
        "{} SDK on {}: {}",
        config.vendor.name,
        platform,
        if plan.available {
            "available"
        } else {
            "unavailable"
        }
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_sdk_yields_unavailable_plan() {
        let tmp = TempDir::new().unwrap();
        let config = Config::default();

        let plan = resolve_link_plan(&config, tmp.path(), Platform::Win64, None);
        assert!(!plan.available);
        assert_eq!(plan.define, "STEAM_SDK_AVAILABLE=0");
        assert!(plan.runtime_copies.is_empty());
    }

    #[test]
    fn test_full_pass_on_linux_layout() {
        let tmp = TempDir::new().unwrap();
        let lib_dir = tmp.path().join("ThirdParty/Steamworks/linux64");
        fs::create_dir_all(&lib_dir).unwrap();
        fs::write(lib_dir.join("libsteam_api.so"), b"so").unwrap();

        let config = Config::default();
        let plan = resolve_link_plan(&config, tmp.path(), Platform::Linux64, None);

        assert!(plan.available);
        assert_eq!(plan.define, "STEAM_SDK_AVAILABLE=1");
        assert_eq!(
            plan.runtime_copies[0].destination,
            tmp.path().join("Binaries/Linux64/libsteam_api.so")
        );
    }

    #[test]
    fn test_out_dir_override() {
        let tmp = TempDir::new().unwrap();
        let lib_dir = tmp.path().join("ThirdParty/Steamworks/linux64");
        fs::create_dir_all(&lib_dir).unwrap();
        fs::write(lib_dir.join("libsteam_api.so"), b"so").unwrap();

        let out = tmp.path().join("staging");
        let config = Config::default();
        let plan = resolve_link_plan(&config, tmp.path(), Platform::Linux64, Some(&out));

        assert_eq!(
            plan.runtime_copies[0].destination,
            out.join("libsteam_api.so")
        );
    }

    #[test]
    fn test_unknown_platform_resolves_unavailable() {
        let tmp = TempDir::new().unwrap();
        let config = Config::default();

        let plan = resolve_link_plan(&config, tmp.path(), Platform::Unsupported, None);
        assert!(!plan.available);
    }
}
