//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Copy a file, with nice error messages.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).with_context(|| {
        format!("failed to copy {} to {}", src.display(), dst.display())
    })?;
    Ok(())
}

/// Get the relative path from `base` to `path`, for display.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a/b/c");

        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Idempotent on an existing directory.
        ensure_dir(&dir).unwrap();
    }

    #[test]
    fn test_copy_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.dll");
        let dst = tmp.path().join("dst.dll");
        fs::write(&src, b"payload").unwrap();

        copy_file(&src, &dst).unwrap();
        assert_eq!(fs::read(&dst).unwrap(), b"payload");
    }

    #[test]
    fn test_copy_missing_source_errors() {
        let tmp = TempDir::new().unwrap();
        let err = copy_file(&tmp.path().join("absent"), &tmp.path().join("dst"));
        assert!(err.is_err());
    }

    #[test]
    fn test_relative_path() {
        let rel = relative_path(Path::new("/proj"), Path::new("/proj/ThirdParty/Steamworks"));
        assert_eq!(rel, PathBuf::from("ThirdParty/Steamworks"));
    }
}
