pub mod settings;
pub mod tui;

pub use settings::{SettingsCommands, settings_command};
pub use tui::{TuiCommands, tui_command};
