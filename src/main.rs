//! bibliokit-seo - resolve, render and check page metadata.

use anyhow::Result;
use bibliokit_seo::cli::{self, Cli, Commands};
use bibliokit_seo::config::{SeoConfig, init_config};
use bibliokit_seo::logger;
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // `init` writes the config, so it must not require one
    if let Commands::Init { force } = cli.command {
        return cli::init::write_config(&cli.config, force);
    }

    let config = init_config(SeoConfig::load(&cli.config)?);

    match &cli.command {
        Commands::Render { args } => cli::render::render_route(args, &config),
        Commands::Check { args } => cli::check::check_routes(args, &config),
        Commands::Init { .. } => Ok(()),
    }
}
