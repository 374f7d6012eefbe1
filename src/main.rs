//! Masthead CLI entry point.

use anyhow::Result;
use clap::{ColorChoice, Parser};

use masthead::cli::{self, Cli, Commands};
use masthead::logger;

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
        Commands::Init { name, dry } => cli::init::run(name.as_deref(), *dry),
        Commands::Render {
            page,
            fragment,
            format,
            output,
        } => cli::render::run(
            &cli.config,
            &cli::render::RenderArgs {
                page: page.as_deref(),
                fragment: *fragment,
                format: *format,
                output: output.as_deref(),
            },
        ),
        Commands::Serve { interface, port } => cli::serve::run(&cli.config, *interface, *port),
        Commands::Validate => cli::validate::run(&cli.config),
    }
}
