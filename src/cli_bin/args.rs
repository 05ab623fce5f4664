//! Command-line argument definitions and parsing
//!
//! Every subcommand shares the dry-run/quiet/verbose switches; the remaining
//! flags belong to the task that uses them.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "sitetidy",
    version,
    about = "Validate post front matter and maintain category archive pages",
    long_about = "sitetidy keeps a static-site content tree consistent: it normalizes \
                  the front matter of _posts/*.md, renames posts to YYYY-MM-DD-<name>.md, \
                  and regenerates _category_pages/*.md from the categories posts use. \
                  Files are backed up to _tmpbkup/ before they are modified."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site root containing _posts/ and _category_pages/
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// YAML file overriding the directory layout
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and normalize front matter in _posts/*.md
    FixPosts(FixPostsArgs),
    /// Regenerate _category_pages/*.md from categories in _posts
    Archives(ArchivesArgs),
}

/// Switches shared by every command
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct CommonOpts {
    /// Run without writing changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print detailed output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the fix-posts command
#[derive(Args, Debug)]
pub struct FixPostsArgs {
    #[command(flatten)]
    pub common: CommonOpts,

    /// Keyword to search for in post content; other posts are left alone
    #[arg(short, long, value_name = "KEYWORD")]
    pub search: Option<String>,
}

/// Arguments for the archives command
#[derive(Args, Debug)]
pub struct ArchivesArgs {
    #[command(flatten)]
    pub common: CommonOpts,

    /// Remove archive pages no post category refers to
    #[arg(short, long)]
    pub fix: bool,

    /// List new categories that will be created, without writing
    #[arg(short, long)]
    pub list_new: bool,
}
