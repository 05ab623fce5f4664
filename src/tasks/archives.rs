//! Category archive page regeneration
//!
//! One `<slug>-archive.md` page per category used in posts. Pages no post
//! refers to anymore can be removed with `fix`.

use crate::config::SiteConfig;
use crate::core::ArchivePage;
use crate::error::Result;
use crate::io::{
    backup_file, display_name, ensure_directory, list_markdown_files, load_documents,
    require_directory, write_if_changed, WriteOptions,
};
use log::{debug, info, warn};
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

/// Options for [`sync_archives`]
#[derive(Debug, Clone, Default)]
pub struct ArchiveOptions {
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
    /// Delete archive pages that no current category maps to
    pub fix: bool,
    /// Only report pages that would be created
    pub list_new: bool,
}

/// Outcome of a [`sync_archives`] run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Distinct categories that got (or would get) a page
    pub categories: usize,
    pub written: usize,
    pub deleted: usize,
    /// File names of pages that do not exist yet, filled by `list_new`
    pub new_pages: Vec<String>,
}

/// Distinct category labels used by posts in `posts_dir`, sorted
pub fn collect_categories(posts_dir: &Path) -> Result<Vec<String>> {
    let batch = load_documents(posts_dir)?;
    let labels: BTreeSet<String> = batch
        .documents
        .iter()
        .flat_map(|(_, document)| document.header().categories())
        .collect();
    Ok(labels.into_iter().collect())
}

/// One page per distinct slug. The first label in sorted order names the page;
/// labels that reduce to an empty slug get no page.
pub fn plan_pages(labels: &[String]) -> Vec<ArchivePage> {
    let mut seen = HashSet::new();
    let mut pages = Vec::new();
    for label in labels {
        let page = ArchivePage::for_category(label);
        if page.category.is_empty() {
            warn!("Category {:?} has no usable characters, no archive page", label);
            continue;
        }
        if seen.insert(page.category.clone()) {
            pages.push(page);
        } else {
            debug!("Category {:?} shares the {} page", label, page.filename());
        }
    }
    pages
}

/// Regenerate archive pages from the categories found in posts
pub fn sync_archives(config: &SiteConfig, options: &ArchiveOptions) -> Result<ArchiveReport> {
    let posts_dir = config.posts_path();
    let category_dir = config.category_path();
    let backup_dir = config.category_backup_path();
    require_directory(&posts_dir)?;

    let pages = plan_pages(&collect_categories(&posts_dir)?);
    if options.verbose {
        println!("[info] Found {} unique categories.", pages.len());
    }

    let mut report = ArchiveReport {
        categories: pages.len(),
        ..Default::default()
    };

    if options.list_new {
        for page in &pages {
            let filename = page.filename();
            if !category_dir.join(&filename).exists() {
                println!("[new] {}", filename);
                report.new_pages.push(filename);
            }
        }
        return Ok(report);
    }

    if !options.dry_run {
        ensure_directory(&category_dir)?;
    }

    let write_options = WriteOptions {
        dry_run: options.dry_run,
        quiet: options.quiet,
        caller_handles_message: false,
    };
    let mut generated = HashSet::new();
    for page in &pages {
        let filename = page.filename();
        let path = category_dir.join(&filename);
        let content = page.render();

        if !options.dry_run {
            backup_file(&path, &backup_dir)?;
        }
        let result = write_if_changed(&path, &content, &write_options)?;
        report.written += usize::from(result.changed);
        generated.insert(filename);
    }

    if options.dry_run && !options.quiet {
        println!("[dry-run] archive pages updated");
    } else if !options.dry_run && options.verbose {
        println!("[info] archive pages updated");
    }

    if options.fix && category_dir.is_dir() {
        report.deleted = remove_stale_pages(&category_dir, &backup_dir, &generated, options)?;
    }

    info!(
        "{} categories: {} pages written, {} deleted",
        report.categories, report.written, report.deleted
    );
    Ok(report)
}

fn remove_stale_pages(
    category_dir: &Path,
    backup_dir: &Path,
    generated: &HashSet<String>,
    options: &ArchiveOptions,
) -> Result<usize> {
    let mut deleted = 0;
    for path in list_markdown_files(category_dir)? {
        if generated.contains(&display_name(&path)) {
            continue;
        }
        if options.dry_run {
            if !options.quiet {
                println!("[dry-run] would delete {}", path.display());
            }
        } else {
            backup_file(&path, backup_dir)?;
            fs::remove_file(&path)?;
            if !options.quiet {
                println!("[delete] {}", path.display());
            }
        }
        deleted += 1;
    }
    Ok(deleted)
}
