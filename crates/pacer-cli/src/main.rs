//! Pacer command line application.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use pacer_core::Settings;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        settings,
        no_color,
        concurrent,
        command,
    } = Args::parse();

    let loaded = Settings::load(settings.as_deref()).context("Failed to load settings")?;
    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(loaded, settings, renderer).concurrent(concurrent);

    info!("Pacer started");

    match command {
        Commands::Generate(args) => cli.generate(args).await,
        Commands::Show(args) => cli.show(args),
        Commands::Progress(args) => cli.progress(args),
        Commands::Settings { command } => cli.handle_settings_command(command),
    }
}
