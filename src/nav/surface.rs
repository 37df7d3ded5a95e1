use log::trace;
use ratatui::Frame;
use ratatui::layout::Rect;

use super::content::ContentRef;
use super::visual::SurfaceId;
use crate::tui::Theme;

/// Holds a set of items and shows at most one of them at a time.
///
/// Invalid requests (showing or detaching an item that is not attached,
/// attaching twice) are silently ignored.
#[derive(Debug)]
pub struct DisplaySurface {
    id: SurfaceId,
    items: Vec<ContentRef>,
    geometry: Rect,
}

impl Default for DisplaySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self {
            id: SurfaceId::new(),
            items: Vec::new(),
            geometry: Rect::default(),
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Register an item for display. New items start hidden.
    pub fn attach(&mut self, item: &ContentRef) {
        if self.contains(item) {
            trace!("DisplaySurface::attach - {:?} already attached", item.id());
            return;
        }

        item.reparent(Some(self.id));
        item.set_geometry(self.geometry);
        item.set_visible(false);
        self.items.push(item.clone());
    }

    /// Unregister an item and clear its parent. The item itself lives on.
    pub fn detach(&mut self, item: &ContentRef) {
        let Some(pos) = self.items.iter().position(|i| i == item) else {
            trace!("DisplaySurface::detach - {:?} not attached", item.id());
            return;
        };

        self.items.remove(pos);
        // An unparented visual is never on screen
        item.set_visible(false);
        item.reparent(None);
    }

    /// Hide everything else, then show `item`
    pub fn show(&mut self, item: &ContentRef) {
        if !self.contains(item) {
            trace!("DisplaySurface::show - {:?} not attached", item.id());
            return;
        }

        self.hide_all();
        item.set_visible(true);
    }

    pub fn hide_all(&mut self) {
        for item in &self.items {
            item.set_visible(false);
        }
    }

    /// Attached items in insertion order
    pub fn attached_items(&self) -> &[ContentRef] {
        &self.items
    }

    pub fn contains(&self, item: &ContentRef) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Attached and currently visible
    pub fn is_showing(&self, item: &ContentRef) -> bool {
        self.contains(item) && item.is_visible()
    }

    pub fn visible_item(&self) -> Option<&ContentRef> {
        self.items.iter().find(|i| i.is_visible())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Stacked layout: every item gets the whole rect
    pub fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
        for item in &self.items {
            item.set_geometry(rect);
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if let Some(item) = self.visible_item() {
            item.render(frame, area, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_hides_and_reparents() {
        let mut surface = DisplaySurface::new();
        let item = ContentRef::text("Phones");

        surface.attach(&item);
        surface.attach(&item);

        assert_eq!(surface.len(), 1);
        assert!(!item.is_visible());
        assert_eq!(item.parent(), Some(surface.id()));
    }

    #[test]
    fn test_show_is_exclusive() {
        let mut surface = DisplaySurface::new();
        let a = ContentRef::text("a");
        let b = ContentRef::text("b");
        surface.attach(&a);
        surface.attach(&b);

        surface.show(&a);
        assert!(surface.is_showing(&a));

        surface.show(&b);
        assert!(!surface.is_showing(&a));
        assert!(surface.is_showing(&b));
        assert_eq!(surface.visible_item(), Some(&b));
    }

    #[test]
    fn test_show_unattached_is_ignored() {
        let mut surface = DisplaySurface::new();
        let a = ContentRef::text("a");
        let stranger = ContentRef::text("stranger");
        surface.attach(&a);
        surface.show(&a);

        surface.show(&stranger);

        assert!(surface.is_showing(&a));
        assert!(!surface.contains(&stranger));
    }

    #[test]
    fn test_detach_keeps_item_alive() {
        let mut surface = DisplaySurface::new();
        let a = ContentRef::text("a");
        surface.attach(&a);
        surface.show(&a);

        surface.detach(&a);
        surface.detach(&a);

        assert!(surface.is_empty());
        assert_eq!(a.parent(), None);
        assert!(!a.is_visible());
    }

    #[test]
    fn test_hide_all_and_order() {
        let mut surface = DisplaySurface::new();
        let items: Vec<_> = ["x", "y", "z"].iter().map(|t| ContentRef::text(*t)).collect();
        for item in &items {
            surface.attach(item);
        }
        surface.show(&items[1]);
        surface.hide_all();

        assert!(surface.visible_item().is_none());
        assert_eq!(surface.attached_items(), items.as_slice());
    }

    #[test]
    fn test_geometry_propagates() {
        let mut surface = DisplaySurface::new();
        let a = ContentRef::text("a");
        surface.attach(&a);

        surface.set_geometry(Rect::new(0, 0, 40, 12));
        assert_eq!(a.geometry(), Rect::new(0, 0, 40, 12));

        let b = ContentRef::text("b");
        surface.attach(&b);
        assert_eq!(b.geometry(), Rect::new(0, 0, 40, 12));
    }
}
