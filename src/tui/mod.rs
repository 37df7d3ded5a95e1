pub mod app;
pub mod prompt;
pub mod render;
pub mod theme;

pub use app::NavApp;
pub use prompt::{RenamePrompt, RenameTarget, TextInputState};
pub use render::{ScreenLayout, draw, screen_layout};
pub use theme::{Theme, ThemeVariant};
