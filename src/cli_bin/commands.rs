//! CLI command handlers that bridge CLI arguments to library tasks

use crate::cli_bin::args::*;
use log::debug;
use sitetidy::error::Result;
use sitetidy::tasks::{fix_posts, sync_archives, ArchiveOptions, PostsOptions};
use sitetidy::SiteConfig;

/// Build the site layout from `--config` and `--root`; `--root` wins
pub fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let mut config = match &cli.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::default(),
    };
    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    debug!("Using site layout {:?}", config);
    Ok(config)
}

/// Execute the fix-posts command
pub fn fix_posts_command(args: FixPostsArgs, config: &SiteConfig) -> Result<()> {
    let options = PostsOptions {
        dry_run: args.common.dry_run,
        quiet: args.common.quiet,
        verbose: args.common.verbose,
        search: args.search,
    };

    let report = fix_posts(config, &options)?;
    if options.verbose {
        println!(
            "[info] {} posts scanned, {} renamed, {} rewritten, {} skipped",
            report.scanned, report.renamed, report.rewritten, report.skipped
        );
    }
    Ok(())
}

/// Execute the archives command
pub fn archives_command(args: ArchivesArgs, config: &SiteConfig) -> Result<()> {
    let options = ArchiveOptions {
        dry_run: args.common.dry_run,
        quiet: args.common.quiet,
        verbose: args.common.verbose,
        fix: args.fix,
        list_new: args.list_new,
    };

    sync_archives(config, &options)?;
    Ok(())
}

/// Default log filter for the shared switches; `RUST_LOG` still overrides it
pub fn log_level(common: &CommonOpts) -> &'static str {
    if common.quiet {
        "error"
    } else if common.verbose {
        "debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_root_overrides_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sitetidy.yml");
        fs::write(&config_path, "root: from-file\nposts_dir: posts\n").unwrap();

        let cli = Cli::try_parse_from([
            "sitetidy",
            "--config",
            config_path.to_str().unwrap(),
            "--root",
            "from-flag",
            "fix-posts",
        ])
        .unwrap();

        let config = load_config(&cli).unwrap();
        assert_eq!(config.root, PathBuf::from("from-flag"));
        assert_eq!(config.posts_dir, PathBuf::from("posts"));
    }

    #[test]
    fn test_log_level() {
        let mut common = CommonOpts::default();
        assert_eq!(log_level(&common), "warn");
        common.verbose = true;
        assert_eq!(log_level(&common), "debug");
        common.verbose = false;
        common.quiet = true;
        assert_eq!(log_level(&common), "error");
    }

    #[test]
    fn test_missing_posts_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = SiteConfig::with_root(temp_dir.path());
        let cli = Cli::try_parse_from(["sitetidy", "fix-posts", "-q"]).unwrap();
        let Commands::FixPosts(args) = cli.command else {
            panic!("expected fix-posts");
        };
        assert!(fix_posts_command(args, &config).is_err());
    }
}
