//! Core data structures for Capstan.
//!
//! This module contains the foundational types used throughout Capstan:
//! - Target platform identifiers
//! - Per-platform layout profiles and the completeness predicate
//! - The vendor SDK descriptor and locator

pub mod platform;
pub mod profile;
pub mod sdk;

pub use platform::Platform;
pub use profile::{LinkRequirement, PlatformProfile, ProfileTable};
pub use sdk::{SdkDescriptor, VendorSpec};
