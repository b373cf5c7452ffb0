//! Target platform identifiers.
//!
//! The build orchestrator hands Capstan a platform id string. Identifiers
//! it does not recognize map to [`Platform::Unsupported`] rather than an
//! error, so the resolution pass can still run and produce the fail-safe
//! "unavailable" plan.

use serde::{Deserialize, Serialize};

/// A target platform for SDK resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// 64-bit Windows (MSVC toolchain, import library + DLL pairing)
    Win64,
    /// 64-bit Linux
    Linux64,
    /// macOS
    MacOs,
    /// Any platform the profile table has no layout for
    Unsupported,
}

impl Platform {
    /// Parse a platform identifier.
    ///
    /// Accepts the engine-style names (`Win64`, `Linux`, `Mac`) as well as
    /// common OS spellings, case-insensitively. Anything else is
    /// `Unsupported` — by contract an unknown platform resolves to an
    /// unavailable plan instead of failing.
    pub fn parse(id: &str) -> Platform {
        match id.to_ascii_lowercase().as_str() {
            "win64" | "windows" | "win" => Platform::Win64,
            "linux" | "linux64" => Platform::Linux64,
            "mac" | "macos" | "osx" | "darwin" => Platform::MacOs,
            _ => Platform::Unsupported,
        }
    }

    /// Detect the platform Capstan itself is running on.
    pub fn host() -> Platform {
        match std::env::consts::OS {
            "windows" => Platform::Win64,
            "linux" => Platform::Linux64,
            "macos" => Platform::MacOs,
            _ => Platform::Unsupported,
        }
    }

    /// Engine-style display name, also used for the default staging
    /// directory (`Binaries/<Platform>`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Win64 => "Win64",
            Platform::Linux64 => "Linux64",
            Platform::MacOs => "Mac",
            Platform::Unsupported => "Unsupported",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_platforms() {
        assert_eq!(Platform::parse("Win64"), Platform::Win64);
        assert_eq!(Platform::parse("windows"), Platform::Win64);
        assert_eq!(Platform::parse("linux"), Platform::Linux64);
        assert_eq!(Platform::parse("Linux64"), Platform::Linux64);
        assert_eq!(Platform::parse("Mac"), Platform::MacOs);
        assert_eq!(Platform::parse("osx"), Platform::MacOs);
    }

    #[test]
    fn test_parse_unknown_is_unsupported_not_error() {
        assert_eq!(Platform::parse("Android"), Platform::Unsupported);
        assert_eq!(Platform::parse("Switch"), Platform::Unsupported);
        assert_eq!(Platform::parse(""), Platform::Unsupported);
    }

    #[test]
    fn test_host_is_known_on_dev_machines() {
        // CI and dev machines are one of the three supported platforms.
        assert_ne!(Platform::host(), Platform::Unsupported);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Platform::Win64.to_string(), "Win64");
        assert_eq!(Platform::Linux64.to_string(), "Linux64");
        assert_eq!(Platform::MacOs.to_string(), "Mac");
    }
}
