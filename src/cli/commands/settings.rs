use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use log::info;
use std::path::Path;

use tabnav::config::Config;

#[derive(Args)]
pub struct SettingsCommands {
    #[command(subcommand)]
    pub command: SettingsSubcommands,
}

#[derive(Subcommand)]
pub enum SettingsSubcommands {
    /// Show the effective settings as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write the default settings to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn settings_command(args: SettingsCommands, config: &Config, config_path: &Path) -> Result<()> {
    match args.command {
        SettingsSubcommands::Show => {
            print!("{}", config.to_toml()?);
        }
        SettingsSubcommands::Path => {
            println!("{}", config_path.display());
        }
        SettingsSubcommands::Init { force } => {
            if config_path.exists() && !force {
                bail!(
                    "Config file already exists at {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::default().save_to(config_path)?;
            info!("Wrote default config to {:?}", config_path);
            println!("Wrote default config to {}", config_path.display());
        }
    }
    Ok(())
}
