//! Pre-flight checks performed before any manifest is read or written.
//!
//! Unlike `rules`, these functions may perform I/O.

use crate::error::{MoveDepError, Result};
use std::path::{Path, PathBuf};

/// Checks that the scan root exists and is a directory.
///
/// Returns the canonical root so that displayed paths are stable.
///
/// # Errors
///
/// - `RootNotFound` if nothing exists at `root`
/// - `NotADirectory` if `root` is a file
pub fn preflight_checks(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        return Err(MoveDepError::RootNotFound(root.to_path_buf()));
    }

    if !root.is_dir() {
        return Err(MoveDepError::NotADirectory(root.to_path_buf()));
    }

    let canonical = root.canonicalize()?;
    log::debug!("Scan root: {}", canonical.display());

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_existing_directory_passes() {
        let temp = TempDir::new().unwrap();
        let root = preflight_checks(temp.path()).unwrap();
        assert!(root.is_absolute());
    }

    #[test]
    fn test_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let err = preflight_checks(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, MoveDepError::RootNotFound(_)));
    }

    #[test]
    fn test_file_root_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Cargo.toml");
        fs::write(&file, "").unwrap();
        let err = preflight_checks(&file).unwrap_err();
        assert!(matches!(err, MoveDepError::NotADirectory(_)));
    }
}
