//! Core types for post and archive front matter
//!
//! - Document: a markdown file split into header and body, plus the text codec
//! - Header / PostHeader: loaded front matter and its normalized post form
//! - category: label to slug normalization
//! - dates: post date derivation and date-prefixed filenames
//! - ArchivePage: generated category archive front matter

pub mod archive;
pub mod category;
pub mod dates;
pub mod document;
pub mod header;

pub use archive::ArchivePage;
pub use category::{archive_filename, category_permalink, normalize_category, sanitize_filename};
pub use dates::{derive_date, derive_filename, strip_date_prefix, PostDate};
pub use document::{format_post, Document};
pub use header::{double_quoted, Header, PostHeader, REQUIRED_KEYS};
