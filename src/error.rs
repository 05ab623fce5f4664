//! Error types for the sitetidy library
//!
//! Parse failures are scoped to a single file and are meant to be skipped by
//! batch loops, while missing directories and I/O failures abort the run.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum TidyError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The text does not start with a front matter delimiter line
    #[error("Missing YAML front matter")]
    MissingFrontMatter,

    /// The front matter block could not be loaded as a mapping
    #[error("Malformed front matter: {reason}")]
    MalformedHeader { reason: String },

    /// Structured content failed validation before a write
    #[error("Invalid payload for {path}: {reason}")]
    InvalidPayload { path: PathBuf, reason: String },

    /// A required input directory does not exist
    #[error("Missing directory: {path}")]
    MissingDirectory { path: PathBuf },

    /// A rename target is already taken by another file
    #[error("Cannot rename {from} to {to}: target already exists")]
    FilenameConflict { from: PathBuf, to: PathBuf },

    /// Configuration file errors
    #[error("Invalid configuration in {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TidyError>;

impl TidyError {
    /// Create a new malformed header error
    pub fn malformed_header(reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            reason: reason.into(),
        }
    }

    /// Create a new invalid payload error
    pub fn invalid_payload(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new missing directory error
    pub fn missing_directory(path: impl Into<PathBuf>) -> Self {
        Self::MissingDirectory { path: path.into() }
    }

    /// Create a new filename conflict error
    pub fn filename_conflict(from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        Self::FilenameConflict {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether a batch loop may skip the offending file and carry on
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::MissingFrontMatter
            | Self::MalformedHeader { .. }
            | Self::FilenameConflict { .. } => true,
            Self::Io(io_err) => io_err.kind() == std::io::ErrorKind::InvalidData,
            Self::Yaml(_)
            | Self::InvalidPayload { .. }
            | Self::MissingDirectory { .. }
            | Self::Config { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_are_recoverable() {
        assert!(TidyError::MissingFrontMatter.is_recoverable());
        assert!(TidyError::malformed_header("bad indent").is_recoverable());
        assert!(TidyError::filename_conflict("a.md", "b.md").is_recoverable());
    }

    #[test]
    fn test_run_level_errors_are_fatal() {
        assert!(!TidyError::missing_directory("_posts").is_recoverable());
        assert!(!TidyError::invalid_payload("x.json", "eof").is_recoverable());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!TidyError::from(io).is_recoverable());
    }

    #[test]
    fn test_non_utf8_reads_are_recoverable() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        assert!(TidyError::Io(io).is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = TidyError::invalid_payload("data/site.json", "EOF while parsing");
        assert_eq!(
            err.to_string(),
            "Invalid payload for data/site.json: EOF while parsing"
        );
        assert_eq!(
            TidyError::MissingFrontMatter.to_string(),
            "Missing YAML front matter"
        );
    }
}
