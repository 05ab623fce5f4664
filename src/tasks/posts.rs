//! Post front matter validation and normalization
//!
//! Every post is backed up, normalized to the canonical header, given a
//! well-formed date, renamed to `YYYY-MM-DD-<name>.md`, and rewritten only if
//! its text actually changes.

use crate::config::SiteConfig;
use crate::core::{derive_date, derive_filename, format_post, Document};
use crate::error::{Result, TidyError};
use crate::io::{
    backup_markdown_files, display_name, load_documents, modified_time, require_directory,
    write_if_changed, WriteOptions,
};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Options for [`fix_posts`]
#[derive(Debug, Clone, Default)]
pub struct PostsOptions {
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
    /// Only touch posts whose title or body mentions this keyword
    pub search: Option<String>,
}

/// Counts gathered by a [`fix_posts`] run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsReport {
    /// Markdown files found in the posts directory
    pub scanned: usize,
    /// Files skipped for unreadable, missing, or empty front matter
    pub skipped: usize,
    /// Posts left alone because they did not match the search keyword
    pub filtered: usize,
    pub renamed: usize,
    pub rewritten: usize,
}

#[derive(Debug, Default)]
struct PostOutcome {
    renamed: bool,
    rewritten: bool,
}

/// Validate and normalize every post under the configured posts directory
pub fn fix_posts(config: &SiteConfig, options: &PostsOptions) -> Result<PostsReport> {
    let posts_dir = config.posts_path();
    require_directory(&posts_dir)?;

    if !options.dry_run {
        let copied = backup_markdown_files(&posts_dir, &config.posts_backup_path())?;
        debug!("Backed up {} posts", copied.len());
    }

    let batch = load_documents(&posts_dir)?;
    let mut report = PostsReport {
        scanned: batch.documents.len() + batch.skipped.len(),
        skipped: batch.skipped.len(),
        ..Default::default()
    };

    for (path, document) in &batch.documents {
        if document.header().is_empty() {
            debug!("Skipping {}: empty front matter", display_name(path));
            report.skipped += 1;
            continue;
        }
        if let Some(keyword) = &options.search {
            if !document.mentions(keyword) {
                report.filtered += 1;
                continue;
            }
        }

        match fix_post(path, document, options) {
            Ok(outcome) => {
                report.renamed += usize::from(outcome.renamed);
                report.rewritten += usize::from(outcome.rewritten);
            }
            Err(e) if e.is_recoverable() => {
                warn!("Skipping {}: {}", display_name(path), e);
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Scanned {} posts: {} renamed, {} rewritten, {} skipped",
        report.scanned, report.renamed, report.rewritten, report.skipped
    );
    Ok(report)
}

fn fix_post(path: &Path, document: &Document, options: &PostsOptions) -> Result<PostOutcome> {
    let mut header = document.post_header();
    let date = derive_date(&header, modified_time(path)?);
    if date.is_fallback() {
        info!(
            "{} has no usable date, using its modification time ({})",
            display_name(path),
            date
        );
        header.date = date.to_string();
    }

    let original_name = display_name(path);
    let new_name = derive_filename(&date, &original_name);
    let mut outcome = PostOutcome::default();
    let mut target = path.to_path_buf();

    if new_name != original_name {
        let new_path = path.with_file_name(&new_name);
        if options.dry_run {
            if !options.quiet {
                println!("[dry-run] would rename: {} -> {}", original_name, new_name);
            }
        } else {
            if new_path.exists() {
                return Err(TidyError::filename_conflict(path, new_path));
            }
            fs::rename(path, &new_path)?;
            target = new_path;
            if !options.quiet {
                println!("[rename] {} -> {}", original_name, new_name);
            }
        }
        outcome.renamed = true;
    }

    let content = format_post(&header, document.body());
    let write_options = WriteOptions {
        dry_run: options.dry_run,
        quiet: options.quiet,
        caller_handles_message: true,
    };
    let result = write_if_changed(&target, &content, &write_options)?;
    outcome.rewritten = result.changed;

    if result.changed {
        if options.dry_run {
            if !options.quiet {
                println!("[✓] Would fix: {}", new_name);
            }
        } else if options.verbose {
            println!("[✓] Fixed: {}", new_name);
        }
    }

    Ok(outcome)
}
