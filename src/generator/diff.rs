//! Output change detection
//!
//! Rendering always happens; these checks only decide whether the result
//! needs to be written to disk again.

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Check whether `path` already holds exactly `candidate`. A missing or
/// unreadable file counts as changed.
pub fn unchanged(candidate: &str, path: &Path) -> bool {
    match fs::read(path) {
        Ok(existing) => existing == candidate.as_bytes(),
        Err(_) => false,
    }
}

/// Byte-for-byte comparison of two files. `false` when `dest` is missing.
pub fn files_identical(src: &Path, dest: &Path) -> Result<bool> {
    if !dest.exists() {
        return Ok(false);
    }
    Ok(fs::read(src)? == fs::read(dest)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_when_content_matches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "hello world!").unwrap();

        assert!(unchanged("hello world!", &path));
    }

    #[test]
    fn test_changed_when_content_differs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "hello world!").unwrap();

        assert!(!unchanged("goodbye world!", &path));
    }

    #[test]
    fn test_changed_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!unchanged("anything", &dir.path().join("nope.html")));
    }

    #[test]
    fn test_files_identical() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        let c = dir.path().join("c.png");
        fs::write(&a, b"\x89PNG\r\n").unwrap();
        fs::write(&b, b"\x89PNG\r\n").unwrap();
        fs::write(&c, b"\x89PNG--").unwrap();

        assert!(files_identical(&a, &b).unwrap());
        assert!(!files_identical(&a, &c).unwrap());
        assert!(!files_identical(&a, &dir.path().join("missing.png")).unwrap());
    }
}
