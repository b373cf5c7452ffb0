//! Per-platform SDK layout profiles.
//!
//! Each profile encodes where a platform's library artifacts may live
//! (ordered candidates, specific directory before the generic `Lib`
//! fallback), the expected artifact filenames, and the completeness rule
//! that decides availability. The rules live in data rather than in
//! per-platform conditionals, so the resolver and plan builder evaluate
//! every platform the same way.
//!
//! The table is built once at startup from the vendor spec and passed in
//! wherever it is needed; nothing reads it as ambient global state.

use serde::{Deserialize, Serialize};

use crate::core::platform::Platform;
use crate::core::sdk::VendorSpec;
use crate::resolver::ArtifactSet;

/// Which artifacts must simultaneously exist for the SDK to count as
/// available on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkRequirement {
    /// Load-time linking: import library and shared library must both
    /// exist; either one alone is treated as total absence.
    ImportAndShared,
    /// The shared object alone is sufficient.
    SharedOnly,
    /// No layout known; never satisfiable.
    Unsupported,
}

impl LinkRequirement {
    /// Evaluate the completeness rule against what was actually found.
    pub fn satisfied_by(&self, artifacts: &ArtifactSet) -> bool {
        match self {
            LinkRequirement::ImportAndShared => {
                artifacts.import_lib.is_some() && artifacts.shared_lib.is_some()
            }
            LinkRequirement::SharedOnly => artifacts.shared_lib.is_some(),
            LinkRequirement::Unsupported => false,
        }
    }
}

/// Layout expectations for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformProfile {
    /// The platform this profile describes
    pub platform: Platform,

    /// Candidate library directories relative to the SDK root, in
    /// precedence order. The first one that exists wins; candidates are
    /// never merged.
    pub lib_dir_candidates: Vec<String>,

    /// Import/static library filename, on platforms that mandate one
    pub import_lib: Option<String>,

    /// Shared library filename
    pub shared_lib: Option<String>,

    /// Completeness rule for this platform
    pub requirement: LinkRequirement,

    /// Whether the shared library is wired for deferred (delay) loading
    pub delay_load: bool,
}

impl PlatformProfile {
    fn unsupported() -> Self {
        PlatformProfile {
            platform: Platform::Unsupported,
            lib_dir_candidates: Vec::new(),
            import_lib: None,
            shared_lib: None,
            requirement: LinkRequirement::Unsupported,
            delay_load: false,
        }
    }
}

/// The static platform-to-layout table.
///
/// Covers Win64, Linux64 and macOS; every other platform id resolves to a
/// fail-safe profile whose requirement can never be satisfied.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    win64: PlatformProfile,
    linux64: PlatformProfile,
    macos: PlatformProfile,
    fallback: PlatformProfile,
}

impl ProfileTable {
    /// Build the table for a vendor. Artifact filenames derive from the
    /// vendor's library basenames using each platform's naming scheme.
    pub fn new(vendor: &VendorSpec) -> Self {
        let win = &vendor.windows_library;
        let posix = &vendor.posix_library;

        ProfileTable {
            win64: PlatformProfile {
                platform: Platform::Win64,
                lib_dir_candidates: vec!["Win64".to_string(), "Lib".to_string()],
                import_lib: Some(format!("{win}.lib")),
                shared_lib: Some(format!("{win}.dll")),
                requirement: LinkRequirement::ImportAndShared,
                delay_load: true,
            },
            linux64: PlatformProfile {
                platform: Platform::Linux64,
                lib_dir_candidates: vec!["linux64".to_string(), "Lib".to_string()],
                import_lib: None,
                shared_lib: Some(format!("lib{posix}.so")),
                requirement: LinkRequirement::SharedOnly,
                delay_load: false,
            },
            macos: PlatformProfile {
                platform: Platform::MacOs,
                lib_dir_candidates: vec!["osx".to_string(), "Lib".to_string()],
                import_lib: None,
                shared_lib: Some(format!("lib{posix}.dylib")),
                requirement: LinkRequirement::SharedOnly,
                delay_load: false,
            },
            fallback: PlatformProfile::unsupported(),
        }
    }

    /// Look up the profile for a platform. Unknown platforms get the
    /// fail-safe fallback, not an error.
    pub fn profile_for(&self, platform: Platform) -> &PlatformProfile {
        match platform {
            Platform::Win64 => &self.win64,
            Platform::Linux64 => &self.linux64,
            Platform::MacOs => &self.macos,
            Platform::Unsupported => &self.fallback,
        }
    }
}
