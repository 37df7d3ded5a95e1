use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use ratatui::Frame;
use ratatui::layout::Rect;
use uuid::Uuid;

use super::visual::{SurfaceId, TextVisual, Visual};
use crate::tui::Theme;

/// Stable identity of a content unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(pub Uuid);

impl ContentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

struct ContentInner {
    id: ContentId,
    placeholder: bool,
    visual: RefCell<Box<dyn Visual>>,
}

/// Shared handle to one displayable unit.
///
/// Cloning the handle never duplicates the visual: every clone refers to
/// the same content, and equality is identity. Visibility and parent
/// changes go through surfaces, which is why the mutators are crate-private.
#[derive(Clone)]
pub struct ContentRef(Rc<ContentInner>);

impl ContentRef {
    pub fn new(visual: impl Visual + 'static) -> Self {
        Self::from_boxed(Box::new(visual))
    }

    pub fn from_boxed(visual: Box<dyn Visual>) -> Self {
        Self(Rc::new(ContentInner {
            id: ContentId::new(),
            placeholder: false,
            visual: RefCell::new(visual),
        }))
    }

    /// Shorthand for text content
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(TextVisual::new(text))
    }

    pub(crate) fn placeholder(visual: Box<dyn Visual>) -> Self {
        Self(Rc::new(ContentInner {
            id: ContentId::new(),
            placeholder: true,
            visual: RefCell::new(visual),
        }))
    }

    pub fn id(&self) -> ContentId {
        self.0.id
    }

    /// True for filler content manufactured by a registry
    pub fn is_placeholder(&self) -> bool {
        self.0.placeholder
    }

    pub fn is_visible(&self) -> bool {
        self.0.visual.borrow().is_visible()
    }

    pub fn parent(&self) -> Option<SurfaceId> {
        self.0.visual.borrow().parent()
    }

    pub fn geometry(&self) -> Rect {
        self.0.visual.borrow().geometry()
    }

    /// Borrow the underlying visual
    pub fn visual(&self) -> Ref<'_, Box<dyn Visual>> {
        self.0.visual.borrow()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.0.visual.borrow().render(frame, area, theme);
    }

    pub fn downgrade(&self) -> WeakContentRef {
        WeakContentRef(Rc::downgrade(&self.0))
    }

    pub(crate) fn set_visible(&self, visible: bool) {
        self.0.visual.borrow_mut().set_visible(visible);
    }

    pub(crate) fn reparent(&self, parent: Option<SurfaceId>) {
        self.0.visual.borrow_mut().reparent(parent);
    }

    pub(crate) fn set_geometry(&self, rect: Rect) {
        self.0.visual.borrow_mut().set_geometry(rect);
    }
}

impl PartialEq for ContentRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ContentRef {}

impl fmt::Debug for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentRef")
            .field("id", &self.0.id)
            .field("placeholder", &self.0.placeholder)
            .field("visible", &self.is_visible())
            .finish()
    }
}

/// Non-owning handle, mostly useful to observe when content is released
#[derive(Clone)]
pub struct WeakContentRef(Weak<ContentInner>);

impl WeakContentRef {
    pub fn upgrade(&self) -> Option<ContentRef> {
        self.0.upgrade().map(ContentRef)
    }

    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl fmt::Debug for WeakContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakContentRef")
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_identity() {
        let a = ContentRef::text("Laptops");
        let b = a.clone();
        let c = ContentRef::text("Laptops");

        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
        assert_ne!(a, c);
        assert_ne!(a.id(), c.id());
    }

    #[test]
    fn test_visibility_goes_through_shared_visual() {
        let a = ContentRef::text("Phones");
        let b = a.clone();

        a.set_visible(false);
        assert!(!b.is_visible());
        assert!(!a.is_placeholder());
    }

    #[test]
    fn test_weak_handle_observes_release() {
        let content = ContentRef::text("Cameras");
        let weak = content.downgrade();
        assert!(weak.is_alive());

        drop(content);
        assert!(!weak.is_alive());
        assert!(weak.upgrade().is_none());
    }
}
