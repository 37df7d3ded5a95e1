pub mod catalog;
pub mod config;
pub mod nav;
pub mod tui;
