//! Artifact resolution against the filesystem.
//!
//! Given a located SDK root and a platform profile, find the concrete
//! include directory and library files. Resolution is a pure function of
//! the root, the profile and the filesystem snapshot: read-only probes,
//! no caching, no global state. Missing pieces are recorded as `None`,
//! never raised as errors.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::profile::PlatformProfile;
use crate::core::sdk::SdkDescriptor;

/// Conventional header directory under the SDK root, probed independently
/// of the library directory selection.
const INCLUDE_DIR: &str = "Include";

/// What was actually found on disk for one resolution attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSet {
    /// Header directory, if the conventional `Include/` exists
    pub include_dir: Option<PathBuf>,

    /// Import/static library, if the profile expects one and it exists
    pub import_lib: Option<PathBuf>,

    /// Shared library, if it exists in the selected directory
    pub shared_lib: Option<PathBuf>,
}

/// Resolve the artifacts for one platform.
///
/// The first candidate directory that exists on disk is selected; later
/// candidates are not consulted even if the selected one turns out to be
/// missing artifacts. Expected filenames are checked only inside the
/// selected directory.
pub fn resolve(descriptor: &SdkDescriptor, profile: &PlatformProfile) -> ArtifactSet {
    if !descriptor.present {
        return ArtifactSet::default();
    }

    let lib_dir = profile
        .lib_dir_candidates
        .iter()
        .map(|candidate| descriptor.root.join(candidate))
        .find(|dir| dir.is_dir());

    let mut artifacts = ArtifactSet::default();

    if let Some(ref dir) = lib_dir {
        tracing::debug!("selected library directory {}", dir.display());
        artifacts.import_lib = probe_file(dir, profile.import_lib.as_deref());
        artifacts.shared_lib = probe_file(dir, profile.shared_lib.as_deref());
    } else if !profile.lib_dir_candidates.is_empty() {
        tracing::debug!(
            "no library directory found under {} (tried {})",
            descriptor.root.display(),
            profile.lib_dir_candidates.join(", ")
        );
    }

    let include = descriptor.root.join(INCLUDE_DIR);
    if include.is_dir() {
        artifacts.include_dir = Some(include);
    }

    artifacts
}

/// Check a single expected filename inside the selected directory.
fn probe_file(dir: &Path, name: Option<&str>) -> Option<PathBuf> {
    let path = dir.join(name?);
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::core::platform::Platform;
    use crate::core::profile::ProfileTable;
    use crate::core::sdk::{locate, VendorSpec};

    fn table() -> ProfileTable {
        ProfileTable::new(&VendorSpec::default())
    }

    /// Lay out an SDK tree: each entry is (relative dir, files in it).
    fn sdk_fixture(tmp: &TempDir, layout: &[(&str, &[&str])]) -> std::path::PathBuf {
        let root = tmp.path().join("ThirdParty/Steamworks");
        fs::create_dir_all(&root).unwrap();
        for (dir, files) in layout {
            let dir = root.join(dir);
            fs::create_dir_all(&dir).unwrap();
            for file in *files {
                fs::write(dir.join(file), b"stub").unwrap();
            }
        }
        root
    }

    #[test]
    fn test_absent_root_resolves_empty_for_all_platforms() {
        let tmp = TempDir::new().unwrap();
        let desc = locate(&tmp.path().join("ThirdParty/Steamworks"));
        let t = table();

        for platform in [
            Platform::Win64,
            Platform::Linux64,
            Platform::MacOs,
            Platform::Unsupported,
        ] {
            let artifacts = resolve(&desc, t.profile_for(platform));
            assert_eq!(artifacts, ArtifactSet::default(), "platform {platform}");
        }
    }

    #[test]
    fn test_win64_full_layout() {
        let tmp = TempDir::new().unwrap();
        let root = sdk_fixture(
            &tmp,
            &[
                ("Win64", &["steam_api64.lib", "steam_api64.dll"]),
                ("Include", &["steam_api.h"]),
            ],
        );

        let artifacts = resolve(&locate(&root), table().profile_for(Platform::Win64));
        assert_eq!(
            artifacts.import_lib,
            Some(root.join("Win64/steam_api64.lib"))
        );
        assert_eq!(
            artifacts.shared_lib,
            Some(root.join("Win64/steam_api64.dll"))
        );
        assert_eq!(artifacts.include_dir, Some(root.join("Include")));
    }

    #[test]
    fn test_first_existing_candidate_wins_no_merging() {
        let tmp = TempDir::new().unwrap();
        // Win64/ exists but only has the .lib; Lib/ has both. The specific
        // directory is selected exclusively, so the .dll is not found.
        let root = sdk_fixture(
            &tmp,
            &[
                ("Win64", &["steam_api64.lib"]),
                ("Lib", &["steam_api64.lib", "steam_api64.dll"]),
            ],
        );

        let artifacts = resolve(&locate(&root), table().profile_for(Platform::Win64));
        assert_eq!(
            artifacts.import_lib,
            Some(root.join("Win64/steam_api64.lib"))
        );
        assert_eq!(artifacts.shared_lib, None);
    }

    #[test]
    fn test_generic_lib_fallback_used_when_specific_missing() {
        let tmp = TempDir::new().unwrap();
        let root = sdk_fixture(&tmp, &[("Lib", &["steam_api64.lib", "steam_api64.dll"])]);

        let artifacts = resolve(&locate(&root), table().profile_for(Platform::Win64));
        assert_eq!(artifacts.import_lib, Some(root.join("Lib/steam_api64.lib")));
        assert_eq!(artifacts.shared_lib, Some(root.join("Lib/steam_api64.dll")));
    }

    #[test]
    fn test_linux_shared_object() {
        let tmp = TempDir::new().unwrap();
        let root = sdk_fixture(&tmp, &[("linux64", &["libsteam_api.so"])]);

        let artifacts = resolve(&locate(&root), table().profile_for(Platform::Linux64));
        assert_eq!(
            artifacts.shared_lib,
            Some(root.join("linux64/libsteam_api.so"))
        );
        assert_eq!(artifacts.import_lib, None);
    }

    #[test]
    fn test_include_probe_is_independent_of_lib_dir() {
        let tmp = TempDir::new().unwrap();
        // Headers present, no library directory at all.
        let root = sdk_fixture(&tmp, &[("Include", &["steam_api.h"])]);

        let artifacts = resolve(&locate(&root), table().profile_for(Platform::Linux64));
        assert_eq!(artifacts.include_dir, Some(root.join("Include")));
        assert_eq!(artifacts.shared_lib, None);
    }

    #[test]
    fn test_artifact_must_be_a_file() {
        let tmp = TempDir::new().unwrap();
        let root = sdk_fixture(&tmp, &[("linux64/libsteam_api.so", &[])]);

        // libsteam_api.so exists but is a directory.
        let artifacts = resolve(&locate(&root), table().profile_for(Platform::Linux64));
        assert_eq!(artifacts.shared_lib, None);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let tmp = TempDir::new().unwrap();
        let root = sdk_fixture(
            &tmp,
            &[
                ("Win64", &["steam_api64.lib", "steam_api64.dll"]),
                ("Include", &[]),
            ],
        );

        let t = table();
        let first = resolve(&locate(&root), t.profile_for(Platform::Win64));
        let second = resolve(&locate(&root), t.profile_for(Platform::Win64));
        assert_eq!(first, second);
    }
}
