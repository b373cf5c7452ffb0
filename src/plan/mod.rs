//! Link plan assembly.
//!
//! A LinkPlan is the sole externally visible artifact of a resolution
//! pass: include paths, libraries for the link step, delay-load names,
//! runtime staging copies, and the availability define. It is assembled
//! purely from the resolved artifacts and the platform profile — building
//! a plan touches neither the filesystem nor any global state, so an
//! unchanged filesystem always yields an identical plan.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::platform::Platform;
use crate::core::profile::{LinkRequirement, PlatformProfile};
use crate::core::sdk::VendorSpec;
use crate::resolver::ArtifactSet;

/// Where runtime artifacts get staged and whether existing files are
/// replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingPolicy {
    /// Directory the produced binary lands in
    pub out_dir: PathBuf,

    /// Replace an already-staged file
    pub overwrite: bool,
}

/// A single staging action. Its execution outcome never feeds back into
/// the availability flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyOperation {
    /// Source artifact inside the SDK tree
    pub source: PathBuf,

    /// Destination next to the produced binary
    pub destination: PathBuf,

    /// Replace the destination if it already exists
    pub overwrite: bool,
}

/// The complete link configuration for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPlan {
    /// Platform the plan was resolved for
    pub platform: Platform,

    /// Whether the completeness rule was satisfied
    pub available: bool,

    /// Compile-time define consumed downstream (`<NAME>=0|1`)
    pub define: String,

    /// Header search paths
    pub include_paths: BTreeSet<PathBuf>,

    /// Libraries handed to the link step: the import library on Windows,
    /// the shared object itself on Linux/macOS
    pub link_libraries: Vec<PathBuf>,

    /// Shared libraries resolved at first use instead of process load
    pub delay_load_names: BTreeSet<String>,

    /// Runtime artifacts to stage next to the produced binary
    pub runtime_copies: Vec<CopyOperation>,
}

impl LinkPlan {
    /// Assemble the plan for one platform.
    ///
    /// If the profile's completeness rule is not satisfied the plan is
    /// unavailable and every collection is empty — there is no partial
    /// plan. When satisfied, the include path is added whenever it was
    /// found; its absence alone does not clear the flag.
    pub fn new(
        artifacts: &ArtifactSet,
        profile: &PlatformProfile,
        vendor: &VendorSpec,
        staging: &StagingPolicy,
    ) -> LinkPlan {
        if !profile.requirement.satisfied_by(artifacts) {
            return LinkPlan::unavailable(profile.platform, vendor);
        }

        let mut include_paths = BTreeSet::new();
        if let Some(ref include) = artifacts.include_dir {
            include_paths.insert(include.clone());
        }

        // The import library carries the link-time symbols on Windows; on
        // Linux/macOS the shared object itself is linked.
        let link_lib = match profile.requirement {
            LinkRequirement::ImportAndShared => artifacts.import_lib.as_ref(),
            LinkRequirement::SharedOnly => artifacts.shared_lib.as_ref(),
            LinkRequirement::Unsupported => None,
        };
        let link_libraries: Vec<PathBuf> = link_lib.cloned().into_iter().collect();

        let mut delay_load_names = BTreeSet::new();
        let mut runtime_copies = Vec::new();
        if let Some(ref shared) = artifacts.shared_lib {
            let name = file_name(shared);
            if profile.delay_load {
                delay_load_names.insert(name.clone());
            }
            runtime_copies.push(CopyOperation {
                source: shared.clone(),
                destination: staging.out_dir.join(&name),
                overwrite: staging.overwrite,
            });
        }

        LinkPlan {
            platform: profile.platform,
            available: true,
            define: vendor.define_for(true),
            include_paths,
            link_libraries,
            delay_load_names,
            runtime_copies,
        }
    }

    /// The empty, feature-off plan.
    pub fn unavailable(platform: Platform, vendor: &VendorSpec) -> LinkPlan {
        LinkPlan {
            platform,
            available: false,
            define: vendor.define_for(false),
            include_paths: BTreeSet::new(),
            link_libraries: Vec::new(),
            delay_load_names: BTreeSet::new(),
            runtime_copies: Vec::new(),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
