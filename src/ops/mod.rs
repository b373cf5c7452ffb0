//! High-level operations over the core resolution pipeline.

pub mod doctor;
pub mod resolve;

pub use doctor::{doctor, format_report, CheckResult, SdkReport};
pub use resolve::resolve_link_plan;
