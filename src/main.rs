//! Blogmeta - validate and export blog metadata for the site generator.

mod cli;

use anyhow::{Context, Result, bail};
use blogmeta::config::{BlogConfig, init_config, util::find_config_file};
use blogmeta::{debug, logger};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dir, dry } => {
            let cwd = std::env::current_dir().context("Failed to get current working directory")?;
            let root = dir.as_ref().map_or_else(|| cwd.clone(), |dir| cwd.join(dir));
            cli::init::new_config(&root, &cli.config, *dry)
        }
        Commands::Check => cli::check::report(&*load_config(&cli)?),
        Commands::Export { pretty, output } => {
            cli::export::write_export(&*load_config(&cli)?, *pretty, output.as_deref())
        }
    }
}

/// Find, load and validate the config, then freeze it for the process.
fn load_config(cli: &Cli) -> Result<Arc<BlogConfig>> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let Some(path) = find_config_file(&cli.config, &cwd) else {
        bail!(
            "Config file '{}' not found. Run 'blogmeta init' to create one.",
            cli.config.display()
        );
    };
    debug!("config"; "using {}", path.display());

    let config = BlogConfig::load(&path)?;
    Ok(init_config(config)?)
}
