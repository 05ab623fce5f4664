use anyhow::{Context, Result};
use clap::Parser;

mod cli_bin;

use cli_bin::args::{Cli, Commands};
use cli_bin::commands::{archives_command, fix_posts_command, load_config, log_level};

fn main() {
    let cli = Cli::parse();

    let common = match &cli.command {
        Commands::FixPosts(args) => args.common,
        Commands::Archives(args) => args.common,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(&common)))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("[error] {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli).context("failed to load site configuration")?;

    match cli.command {
        Commands::FixPosts(args) => {
            fix_posts_command(args, &config).context("fix-posts failed")?
        }
        Commands::Archives(args) => {
            archives_command(args, &config).context("archives failed")?
        }
    }
    Ok(())
}
