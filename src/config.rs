//! Site layout configuration
//!
//! Defaults follow the Jekyll layout: `_posts/`, `_category_pages/`, and
//! backups under `_tmpbkup/`. A YAML file may override any of them.

use crate::error::{Result, TidyError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the content lives, relative to `root`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub root: PathBuf,
    pub posts_dir: PathBuf,
    pub category_dir: PathBuf,
    pub backup_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            posts_dir: PathBuf::from("_posts"),
            category_dir: PathBuf::from("_category_pages"),
            backup_dir: PathBuf::from("_tmpbkup"),
        }
    }
}

impl SiteConfig {
    /// Default layout rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Load a YAML config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&raw).map_err(|e| TidyError::config(path, e.to_string()))
    }

    pub fn posts_path(&self) -> PathBuf {
        self.root.join(&self.posts_dir)
    }

    pub fn category_path(&self) -> PathBuf {
        self.root.join(&self.category_dir)
    }

    /// Backups of posts, mirroring the posts directory name
    pub fn posts_backup_path(&self) -> PathBuf {
        self.root.join(&self.backup_dir).join(&self.posts_dir)
    }

    /// Backups of archive pages, mirroring the category directory name
    pub fn category_backup_path(&self) -> PathBuf {
        self.root.join(&self.backup_dir).join(&self.category_dir)
    }
}
