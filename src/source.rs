//! Contract source loading.
//!
//! Reading the contract is the only fallible step before analysis; the
//! errors here abort the run before any report is produced.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while acquiring the contract text.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("File is not valid UTF-8: {}", .0.display())]
    InvalidEncoding(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A loaded contract, ready for analysis.
#[derive(Debug, Clone)]
pub struct ContractSource {
    /// Path as given by the user, used as the report label.
    pub path: PathBuf,
    /// Full file content.
    pub text: String,
}

impl ContractSource {
    /// Label used in report metadata.
    pub fn label(&self) -> String {
        self.path.display().to_string()
    }

    /// Number of lines in the contract.
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Read a contract file as UTF-8 text.
pub fn load(path: &Path) -> Result<ContractSource, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(SourceError::NotAFile(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => SourceError::InvalidEncoding(path.to_path_buf()),
        io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    debug!("Loaded {} ({} bytes)", path.display(), text.len());

    Ok(ContractSource {
        path: path.to_path_buf(),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_contract() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Token.sol");
        std::fs::write(&path, "contract Token {\n    uint256 supply;\n}\n").unwrap();

        let source = load(&path).unwrap();
        assert_eq!(source.line_count(), 3);
        assert!(source.label().ends_with("Token.sol"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("Missing.sol")).unwrap_err();

        assert!(matches!(err, SourceError::NotFound(_)));
        assert!(err.to_string().starts_with("File not found:"));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, SourceError::NotAFile(_)));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Binary.sol");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SourceError::InvalidEncoding(_)));
    }
}
