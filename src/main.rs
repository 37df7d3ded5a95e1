use anyhow::Result;
use clap::Parser;
use log::{debug, info};

mod cli;

use cli::commands::tui::TuiCommands;
use cli::commands::{settings_command, tui_command};
use cli::{Cli, Commands};
use tabnav::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&cli.log_file)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Starting tabnav");

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::get_config_path()?,
    };
    let config = Config::load_from(&config_path)?;
    debug!("Using config at {:?}", config_path);

    match cli.command.unwrap_or(Commands::Tui(TuiCommands { areas: None })) {
        Commands::Tui(args) => tui_command(args, &config)?,
        Commands::Settings(args) => settings_command(args, &config, &config_path)?,
    }

    Ok(())
}
