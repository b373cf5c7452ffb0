//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod fs;

pub use config::Config;
pub use diagnostic::{Diagnostic, DiagnosticSink};
