//! Vendor SDK location and identity.
//!
//! The SDK lives (or doesn't) under a conventional `ThirdParty/<Vendor>/`
//! tree relative to the project root. Locating it is a single existence
//! check; a missing tree is an expected outcome carried in the descriptor,
//! not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Identity of the vendor SDK: tree name, emitted define, and the library
/// basenames artifacts are derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorSpec {
    /// Directory name under `ThirdParty/`
    pub name: String,

    /// Compile-time define consumed downstream, emitted as `<define>=0|1`
    pub define: String,

    /// Library basename on Windows (expands to `<base>.lib` / `<base>.dll`)
    pub windows_library: String,

    /// Library basename on Linux/macOS (expands to `lib<base>.so` /
    /// `lib<base>.dylib`)
    pub posix_library: String,
}

impl Default for VendorSpec {
    fn default() -> Self {
        VendorSpec {
            name: "Steamworks".to_string(),
            define: "STEAM_SDK_AVAILABLE".to_string(),
            windows_library: "steam_api64".to_string(),
            posix_library: "steam_api".to_string(),
        }
    }
}

impl VendorSpec {
    /// The conventional SDK root for this vendor under a project root.
    pub fn conventional_root(&self, project_root: &Path) -> PathBuf {
        project_root.join("ThirdParty").join(&self.name)
    }

    /// Format the availability define for downstream compiled code.
    pub fn define_for(&self, available: bool) -> String {
        format!("{}={}", self.define, if available { 1 } else { 0 })
    }
}

/// Result of probing for the SDK tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkDescriptor {
    /// The probed root, kept even when absent so diagnostics can name it
    pub root: PathBuf,

    /// Whether a directory exists at `root`
    pub present: bool,
}

/// Probe a fixed root directory for the vendor SDK tree.
///
/// Non-existence is a valid, expected outcome; there is no error path.
pub fn locate(root: &Path) -> SdkDescriptor {
    let present = root.is_dir();
    tracing::debug!(
        "SDK root {}: {}",
        root.display(),
        if present { "present" } else { "absent" }
    );
    SdkDescriptor {
        root: root.to_path_buf(),
        present,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_locate_missing_root() {
        let tmp = TempDir::new().unwrap();
        let desc = locate(&tmp.path().join("ThirdParty/Steamworks"));
        assert!(!desc.present);
        assert!(desc.root.ends_with("ThirdParty/Steamworks"));
    }

    #[test]
    fn test_locate_present_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("ThirdParty/Steamworks");
        std::fs::create_dir_all(&root).unwrap();

        let desc = locate(&root);
        assert!(desc.present);
    }

    #[test]
    fn test_locate_file_is_not_a_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Steamworks");
        std::fs::write(&root, "not a directory").unwrap();

        assert!(!locate(&root).present);
    }

    #[test]
    fn test_conventional_root() {
        let spec = VendorSpec::default();
        let root = spec.conventional_root(Path::new("/proj"));
        assert_eq!(root, PathBuf::from("/proj/ThirdParty/Steamworks"));
    }

    #[test]
    fn test_define_formatting() {
        let spec = VendorSpec::default();
        assert_eq!(spec.define_for(true), "STEAM_SDK_AVAILABLE=1");
        assert_eq!(spec.define_for(false), "STEAM_SDK_AVAILABLE=0");
    }
}
