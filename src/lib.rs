//! Capstan - vendor SDK link-configuration resolver for game plugin builds
//!
//! This crate decides, per target platform, whether an optional third-party
//! native SDK is installed under a conventional `ThirdParty/<Vendor>/` tree,
//! which artifacts to link, and which compile-time define to expose to the
//! rest of the codebase. Absence of the SDK is a normal outcome, never a
//! build failure.

pub mod core;
pub mod ops;
pub mod plan;
pub mod resolver;
pub mod stager;
pub mod util;

pub use crate::core::{
    platform::Platform,
    profile::{LinkRequirement, PlatformProfile, ProfileTable},
    sdk::{SdkDescriptor, VendorSpec},
};

pub use plan::{CopyOperation, LinkPlan};
pub use resolver::ArtifactSet;
pub use stager::{StageOutcome, StageStatus};
pub use util::config::Config;
