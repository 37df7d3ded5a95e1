use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};
use uuid::Uuid;

use crate::tui::Theme;

/// Text shown by placeholder content manufactured for tabs added without content
pub const PLACEHOLDER_TEXT: &str = "Fake Content - Not Initialized";

/// Identifies a DisplaySurface when a visual is reparented onto it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub Uuid);

impl SurfaceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

/// The toolkit-side capability behind every piece of displayable content.
///
/// The navigation core never draws anything itself. It only toggles
/// visibility, assigns geometry and moves visuals between surfaces; the
/// implementation decides what that means on screen.
pub trait Visual {
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;

    fn set_geometry(&mut self, rect: Rect);
    fn geometry(&self) -> Rect;

    /// Move the visual under a new surface (`None` = no parent)
    fn reparent(&mut self, parent: Option<SurfaceId>);
    fn parent(&self) -> Option<SurfaceId>;

    /// Draw the visual into `area`
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);
}

/// What a factory is asked to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualKind {
    /// Filler for a tab that was added without content
    Placeholder,
    /// Stand-in for a nested registry shown as content of its parent tab
    Frame,
    /// Plain text content
    Text(String),
}

/// Creates visuals on behalf of registries
pub trait VisualFactory {
    fn create_visual(&self, kind: VisualKind) -> Box<dyn Visual>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTone {
    Normal,
    Dimmed,
}

/// Terminal visual rendering a centred block of text
#[derive(Debug, Clone)]
pub struct TextVisual {
    text: String,
    tone: TextTone,
    visible: bool,
    geometry: Rect,
    parent: Option<SurfaceId>,
}

impl TextVisual {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: TextTone::Normal,
            visible: true,
            geometry: Rect::default(),
            parent: None,
        }
    }

    /// Dimmed italic text, used for placeholders
    pub fn dimmed(text: impl Into<String>) -> Self {
        Self {
            tone: TextTone::Dimmed,
            ..Self::new(text)
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Visual for TextVisual {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
    }

    fn geometry(&self) -> Rect {
        self.geometry
    }

    fn reparent(&mut self, parent: Option<SurfaceId>) {
        self.parent = parent;
    }

    fn parent(&self) -> Option<SurfaceId> {
        self.parent
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible || self.text.is_empty() {
            return;
        }

        let style = match self.tone {
            TextTone::Normal => Style::default().fg(theme.text),
            TextTone::Dimmed => Style::default()
                .fg(theme.overlay1)
                .add_modifier(Modifier::ITALIC),
        };

        let paragraph = Paragraph::new(self.text.as_str())
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

/// Default factory producing [`TextVisual`]s
#[derive(Debug, Clone)]
pub struct TextVisualFactory {
    placeholder_text: String,
}

impl TextVisualFactory {
    pub fn new(placeholder_text: impl Into<String>) -> Self {
        Self {
            placeholder_text: placeholder_text.into(),
        }
    }
}

impl Default for TextVisualFactory {
    fn default() -> Self {
        Self::new(PLACEHOLDER_TEXT)
    }
}

impl VisualFactory for TextVisualFactory {
    fn create_visual(&self, kind: VisualKind) -> Box<dyn Visual> {
        match kind {
            VisualKind::Placeholder => Box::new(TextVisual::dimmed(self.placeholder_text.clone())),
            VisualKind::Frame => Box::new(TextVisual::new(String::new())),
            VisualKind::Text(text) => Box::new(TextVisual::new(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_placeholder_uses_configured_text() {
        let factory = TextVisualFactory::new("Nothing here yet");
        let visual = factory.create_visual(VisualKind::Placeholder);
        assert!(visual.is_visible());
        assert_eq!(visual.parent(), None);
    }

    #[test]
    fn test_text_visual_tracks_state() {
        let mut visual = TextVisual::new("Phones");
        let surface = SurfaceId::new();

        visual.set_visible(false);
        visual.reparent(Some(surface));
        visual.set_geometry(Rect::new(1, 2, 30, 10));

        assert!(!visual.is_visible());
        assert_eq!(visual.parent(), Some(surface));
        assert_eq!(visual.geometry(), Rect::new(1, 2, 30, 10));
        assert_eq!(visual.text(), "Phones");
    }
}
