//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use lg_core::{application::ports::Filesystem, error::LgResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> LgResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> LgResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(to, e, "back up file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> LgResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> lg_core::error::LgError {
    use lg_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lg_core::{application::ApplicationError, error::LgError};

    #[test]
    fn copy_preserves_bytes_and_replaces_old_backup() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("app.component.ts");
        let backup = dir.path().join("app.component.ts.backup");
        std::fs::write(&original, "original").unwrap();
        std::fs::write(&backup, "stale backup").unwrap();

        let fs = LocalFilesystem::new();
        fs.copy_file(&original, &backup).unwrap();

        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "original");
        assert_eq!(std::fs::read_to_string(&original).unwrap(), "original");
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src/app/services/foo");

        let fs = LocalFilesystem::new();
        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();

        assert!(fs.exists(&nested));
    }

    #[test]
    fn write_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");

        let fs = LocalFilesystem::new();
        fs.write_file(&file, "a much longer first version").unwrap();
        fs.write_file(&file, "short").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "short");
    }

    #[test]
    fn write_into_missing_directory_maps_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing/a.txt");

        let err = LocalFilesystem::new().write_file(&file, "x").unwrap_err();

        match err {
            LgError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn copy_of_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert!(
            fs.copy_file(&dir.path().join("nope"), &dir.path().join("nope.backup"))
                .is_err()
        );
    }
}
