use super::commands::settings::SettingsCommands;
use super::commands::tui::TuiCommands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tabnav")]
#[command(about = "Two-level tab navigation shared between several display areas")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file, truncated on every run
    #[arg(long, global = true, default_value = "tabnav.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive navigation screen (default)
    Tui(TuiCommands),
    /// Application settings management
    Settings(SettingsCommands),
}
