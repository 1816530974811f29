// ABOUTME: Path validation - proves a path exists before an adapter touches it.
// ABOUTME: ValidPath is constructible only through a successful probe.

use std::path::Path;

use crate::error::ToolError;

/// A path that existed at validation time.
///
/// Only [`ValidPath::validate`] constructs one, so an adapter holding a
/// `ValidPath` is guaranteed the existence probe ran. Validity is not cached:
/// the file can still disappear before the adapter uses it, and that later
/// failure is an `Unexpected` error, not a contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPath(String);

impl ValidPath {
    /// Probe the filesystem for `path`.
    ///
    /// A definitive "does not exist" yields `FileNotFound`. A probe that
    /// itself fails (permissions, I/O fault) yields `Unexpected` with the
    /// path in context. Idempotent for an unchanged filesystem.
    pub fn validate(path: &str) -> Result<Self, ToolError> {
        match Path::new(path).try_exists() {
            Ok(true) => Ok(Self(path.to_string())),
            Ok(false) => {
                tracing::warn!(path, "path does not exist");
                Err(ToolError::FileNotFound {
                    invalid_path: path.to_string(),
                })
            }
            Err(e) => {
                tracing::error!(path, error = %e, "existence probe failed");
                Err(
                    ToolError::unexpected("failed to check whether path exists", e)
                        .with_context("path", path),
                )
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl std::fmt::Display for ValidPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let valid = ValidPath::validate(path).unwrap();
        assert_eq!(valid.as_str(), path);
    }

    #[test]
    fn test_validate_existing_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap();

        assert!(ValidPath::validate(path).is_ok());
    }

    #[test]
    fn test_validate_missing_path() {
        let err = ValidPath::validate("/nonexistent/file.txt").unwrap_err();
        match err {
            ToolError::FileNotFound { invalid_path } => {
                assert_eq!(invalid_path, "/nonexistent/file.txt");
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_is_idempotent() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let first = ValidPath::validate(path).unwrap();
        let second = ValidPath::validate(path).unwrap();
        assert_eq!(first, second);
    }
}
