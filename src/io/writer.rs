//! Change-detecting file writes
//!
//! A write happens only when the trimmed new content differs from the trimmed
//! content already on disk. Structured payloads are validated first, so an
//! invalid file is never compared against, let alone written.

use crate::error::{Result, TidyError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Options for a single [`write_if_changed`] call
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Report what would be written without touching the filesystem
    pub dry_run: bool,
    /// Never print the outcome message
    pub quiet: bool,
    /// The caller prints (or drops) the message itself
    pub caller_handles_message: bool,
}

impl WriteOptions {
    pub fn dry_run(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    fn prints(&self) -> bool {
        !self.quiet && !self.caller_handles_message
    }
}

/// Outcome of a [`write_if_changed`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Content differed from what was on disk
    pub changed: bool,
    /// `[write] <path>`, `[dry-run] would write: <path>`, or empty when unchanged
    pub message: String,
}

/// Formats that must parse before they are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Json,
    Yaml,
}

impl PayloadFormat {
    /// Format implied by the file extension, if it is a validated one
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn validate(&self, path: &Path, content: &str) -> Result<()> {
        let outcome = match self {
            Self::Json => serde_json::from_str::<serde_json::Value>(content)
                .map(drop)
                .map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str::<serde_yaml::Value>(content)
                .map(drop)
                .map_err(|e| e.to_string()),
        };
        outcome.map_err(|reason| TidyError::invalid_payload(path, reason))
    }
}

/// Write `content` to `path` unless it matches what is already there.
///
/// A missing file counts as empty. The content is written verbatim, through a
/// temporary file in the same directory so readers never see a partial file.
pub fn write_if_changed<P: AsRef<Path>>(
    path: P,
    content: &str,
    options: &WriteOptions,
) -> Result<WriteResult> {
    let path = path.as_ref();

    if let Some(format) = PayloadFormat::from_path(path) {
        format.validate(path, content)?;
    }

    let existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let changed = content.trim() != existing.trim();
    let message = if !changed {
        String::new()
    } else if options.dry_run {
        format!("[dry-run] would write: {}", path.display())
    } else {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        write_atomic(path, content)?;
        format!("[write] {}", path.display())
    };

    if changed {
        log::debug!("{}", message);
        if options.prints() {
            println!("{}", message);
        }
    }

    Ok(WriteResult { changed, message })
}

/// Write file atomically using temporary file
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;

    temp_file.persist(path).map_err(|e| TidyError::Io(e.error))?;
    Ok(())
}
