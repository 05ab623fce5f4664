//! sitetidy: front matter maintenance for static-site content trees
//!
//! This library validates and normalizes the YAML front matter of posts and
//! keeps category archive pages in sync with the categories those posts use.
//! It is the foundation of the `sitetidy` command-line tool.
//!
//! # Features
//!
//! - **Front matter codec** that parses a document into header and body and
//!   writes posts back with a fixed key order
//! - **Header normalization** that never fails on odd input
//! - **Category slugs** that are safe as file names and URLs
//! - **Change-detecting writes** with dry-run support and payload validation
//! - **Batch tasks** that back files up before touching them
//!
//! # Quick Start
//!
//! ## Normalizing a post
//!
//! ```rust
//! use sitetidy::{format_post, Document, Result};
//!
//! fn main() -> Result<()> {
//!     let raw = "---\ntitle: Hello\ncategories: DevOps\n---\nBody";
//!     let document = Document::parse(raw)?;
//!     let header = document.post_header();
//!     assert_eq!(header.categories, vec!["devops"]);
//!
//!     let text = format_post(&header, document.body());
//!     assert!(text.contains("title: \"Hello\""));
//!     Ok(())
//! }
//! ```
//!
//! ## Writing only when something changed
//!
//! ```rust,no_run
//! use sitetidy::{write_if_changed, Result, WriteOptions};
//!
//! fn main() -> Result<()> {
//!     let options = WriteOptions { dry_run: true, ..Default::default() };
//!     let result = write_if_changed("_category_pages/rust-archive.md", "---\n---\n", &options)?;
//!     println!("changed: {}", result.changed);
//!     Ok(())
//! }
//! ```
//!
//! ## Running a task
//!
//! ```rust,no_run
//! use sitetidy::{sync_archives, ArchiveOptions, Result, SiteConfig};
//!
//! fn main() -> Result<()> {
//!     let config = SiteConfig::with_root(".");
//!     let report = sync_archives(&config, &ArchiveOptions { fix: true, ..Default::default() })?;
//!     println!("{} pages written", report.written);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: documents, headers, slugs, dates, and archive pages; no I/O
//! - [`io`]: reading, backups, and change-detecting writes
//! - [`tasks`]: the batch jobs built from the two layers above
//! - [`config`]: where the content lives
//! - [`error`]: the error type shared by all of the above

// Public API exports
pub use config::SiteConfig;
pub use error::{Result, TidyError};

// Core types
pub use crate::core::{
    archive_filename, category_permalink, derive_date, derive_filename, format_post,
    normalize_category, sanitize_filename, ArchivePage, Document, Header, PostDate, PostHeader,
    REQUIRED_KEYS,
};

// IO types
pub use io::{load_documents, read_document, write_if_changed, WriteOptions, WriteResult};

// Tasks
pub use tasks::{fix_posts, sync_archives, ArchiveOptions, ArchiveReport, PostsOptions, PostsReport};

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod tasks;

// CLI components are available only in the binary, not as part of the library API
