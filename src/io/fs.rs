use crate::error::{Result, TidyError};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

pub fn is_markdown(path: &Path) -> bool {
    path.extension().map(|s| s == "md").unwrap_or(false)
}

/// Fail with [`TidyError::MissingDirectory`] unless `dir` is a directory
pub fn require_directory(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(TidyError::missing_directory(dir))
    }
}

/// Markdown files directly inside `dir`, sorted by name
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| match e.into_io_error() {
            Some(io) => TidyError::Io(io),
            None => TidyError::missing_directory(dir),
        })?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

pub fn read_to_string(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn ensure_directory(path: &Path) -> Result<()> {
    Ok(fs::create_dir_all(path)?)
}

/// Last modification time of `path`
pub fn modified_time(path: &Path) -> Result<SystemTime> {
    Ok(fs::metadata(path)?.modified()?)
}

/// Copy `path` into `backup_dir` under the same file name, if it exists.
///
/// Returns the backup path when a copy was made.
pub fn backup_file(path: &Path, backup_dir: &Path) -> Result<Option<PathBuf>> {
    if !path.is_file() {
        return Ok(None);
    }
    let filename = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("no file name in {}", path.display()),
        )
    })?;
    ensure_directory(backup_dir)?;
    let target = backup_dir.join(filename);
    fs::copy(path, &target)?;
    Ok(Some(target))
}

/// Copy every markdown file of `src_dir` into `backup_dir`
pub fn backup_markdown_files(src_dir: &Path, backup_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_directory(backup_dir)?;
    let mut copied = Vec::new();
    for file in list_markdown_files(src_dir)? {
        if let Some(target) = backup_file(&file, backup_dir)? {
            info!(
                "Backed up {} to {}",
                file.file_name().unwrap_or_default().to_string_lossy(),
                backup_dir.display()
            );
            copied.push(target);
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("_posts/2024-01-01-a.md")));
        assert!(!is_markdown(Path::new("notes.txt")));
        assert!(!is_markdown(Path::new("README")));
    }

    #[test]
    fn test_list_is_flat_and_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("b.md"), "").unwrap();
        fs::write(root.join("a.md"), "").unwrap();
        fs::write(root.join("c.txt"), "").unwrap();
        fs::create_dir(root.join("drafts")).unwrap();
        fs::write(root.join("drafts/d.md"), "").unwrap();

        let files = list_markdown_files(root).unwrap();
        assert_eq!(files, vec![root.join("a.md"), root.join("b.md")]);
    }

    #[test]
    fn test_require_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(require_directory(temp_dir.path()).is_ok());

        let missing = temp_dir.path().join("_posts");
        let err = require_directory(&missing).unwrap_err();
        assert!(matches!(err, TidyError::MissingDirectory { .. }));
    }

    #[test]
    fn test_backup_markdown_files() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("_posts");
        let dst = temp_dir.path().join("_tmpbkup/_posts");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.md"), "alpha").unwrap();
        fs::write(src.join("skip.txt"), "nope").unwrap();

        let copied = backup_markdown_files(&src, &dst).unwrap();
        assert_eq!(copied, vec![dst.join("a.md")]);
        assert_eq!(fs::read_to_string(dst.join("a.md")).unwrap(), "alpha");
        assert!(!dst.join("skip.txt").exists());
    }

    #[test]
    fn test_backup_missing_file_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let backup_dir = temp_dir.path().join("bkup");

        let result = backup_file(&temp_dir.path().join("gone.md"), &backup_dir).unwrap();
        assert!(result.is_none());
        assert!(!backup_dir.exists());
    }
}
