//! siteparts - sitemap and favicon toolkit.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use siteparts::cli::{self, Cli, Commands};
use siteparts::config::SiteConfig;

fn main() -> Result<()> {
    cli::serve::setup_shutdown_handler()?;

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        // Route classification needs no config
        Commands::Route { args } => {
            cli::route::run_route(args);
            Ok(())
        }
        Commands::Build { .. } => {
            let config = SiteConfig::load(&cli)?;
            cli::build::build_site(&config).map(|_| ())
        }
        Commands::Serve { .. } => {
            let config = SiteConfig::load(&cli)?;
            cli::serve::serve_site(&config)
        }
        Commands::Links => {
            let config = SiteConfig::load(&cli)?;
            cli::links::print_links(&config);
            Ok(())
        }
    }
}
