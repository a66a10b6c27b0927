//! atelier CLI application
//!
//! Command-line front end for the milestone progress resolver.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use atelier_core::ResolverBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        command,
    } = Args::parse();

    if let Commands::Schema = command {
        return cli::show_schema();
    }

    let mut builder = ResolverBuilder::new().with_config_path(config);
    if let Commands::Resolve(args) = &command {
        if let Some(threshold) = args.collapse_threshold {
            builder = builder.with_collapse_threshold(threshold);
        }
    }
    let resolver = builder.build().context("Failed to initialize resolver")?;

    let cli = Cli::new(resolver, TerminalRenderer::new(!no_color));

    info!("atelier started");

    match command {
        Commands::Resolve(args) => cli.resolve(&args),
        Commands::Config => cli.show_config(),
        Commands::Schema => cli::show_schema(),
    }
}
