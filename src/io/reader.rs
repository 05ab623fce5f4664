//! Reading documents, one file or a whole directory at a time

use crate::core::Document;
use crate::error::Result;
use crate::io::fs::{list_markdown_files, read_to_string};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Read and parse a single markdown file
pub fn read_document(path: &Path) -> Result<Document> {
    let raw = read_to_string(path)?;
    Document::parse(&raw)
}

/// Documents loaded from a directory, plus the files that had to be skipped
#[derive(Debug, Default)]
pub struct DocumentBatch {
    pub documents: Vec<(PathBuf, Document)>,
    pub skipped: Vec<PathBuf>,
}

/// Load every markdown file in `dir`.
///
/// Files whose front matter is missing or malformed are logged and skipped;
/// any other error aborts the batch.
pub fn load_documents(dir: &Path) -> Result<DocumentBatch> {
    let mut batch = DocumentBatch::default();

    for path in list_markdown_files(dir)? {
        match read_document(&path) {
            Ok(document) => {
                debug!("Loaded {}", path.display());
                batch.documents.push((path, document));
            }
            Err(e) if e.is_recoverable() => {
                warn!("Skipping {}: {}", display_name(&path), e);
                batch.skipped.push(path);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(batch)
}

/// File name of `path` for messages, falling back to the full path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TidyError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_document() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("2025-01-01-sample.md");
        fs::write(
            &file_path,
            "---\ntitle: Test Post\ncategories: [\"Security\"]\ntags: [\"AWS\"]\n---\nPost content.\n",
        )
        .unwrap();

        let doc = read_document(&file_path).unwrap();
        assert_eq!(doc.body(), "Post content.");
        assert_eq!(doc.post_header().categories, vec!["security"]);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_document(&temp_dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, TidyError::Io(_)));
    }

    #[test]
    fn test_bad_files_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a-good.md"), "---\ntitle: ok\n---\nbody").unwrap();
        fs::write(root.join("b-plain.md"), "no front matter").unwrap();
        fs::write(root.join("c-broken.md"), "---\ntitle: [oops\n---\nbody").unwrap();

        let batch = load_documents(root).unwrap();
        assert_eq!(batch.documents.len(), 1);
        assert_eq!(batch.documents[0].0, root.join("a-good.md"));
        assert_eq!(batch.skipped, vec![root.join("b-plain.md"), root.join("c-broken.md")]);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("_posts/a.md")), "a.md");
    }
}
