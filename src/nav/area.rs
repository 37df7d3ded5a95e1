//! Display areas sharing one navigation tree.
//!
//! Every area remembers its own `(category, item)` selection. Only the
//! active area follows live selection changes. Since content instances are
//! shared, an area only takes content that no other area is currently
//! showing; otherwise it backs off and shows nothing.

use anyhow::{Result, bail};
use log::{debug, info, trace};
use ratatui::layout::Rect;

use super::content::ContentRef;
use super::registry::TabKey;
use super::surface::DisplaySurface;
use super::tree::{NavEvent, NavigationTree};

pub type AreaId = usize;

/// Remembered `(category, item)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub category: usize,
    pub item: usize,
}

impl Selection {
    pub fn new(category: usize, item: usize) -> Self {
        Self { category, item }
    }
}

#[derive(Debug)]
pub struct DisplayArea {
    name: String,
    surface: DisplaySurface,
    selection: Selection,
}

impl DisplayArea {
    pub fn new(name: impl Into<String>, selection: Selection) -> Self {
        Self {
            name: name.into(),
            surface: DisplaySurface::new(),
            selection,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surface(&self) -> &DisplaySurface {
        &self.surface
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_showing(&self, content: &ContentRef) -> bool {
        self.surface.is_showing(content)
    }

    /// Content currently on screen in this area
    pub fn visible_content(&self) -> Option<&ContentRef> {
        self.surface.visible_item()
    }
}

pub struct AreaController {
    tree: NavigationTree,
    areas: Vec<DisplayArea>,
    active: AreaId,
}

impl AreaController {
    /// Area 0 starts active. At least one area is required.
    pub fn new(tree: NavigationTree, areas: Vec<DisplayArea>) -> Result<Self> {
        if areas.is_empty() {
            bail!("AreaController needs at least one display area");
        }

        Ok(Self {
            tree,
            areas,
            active: 0,
        })
    }

    /// Mirror the active area's selection into the tree and render every area
    pub fn initialize(&mut self) {
        let selection = self.areas[self.active].selection;
        self.tree.set_current(selection.category, selection.item);
        self.refresh(self.active);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn tree(&self) -> &NavigationTree {
        &self.tree
    }

    pub fn active(&self) -> AreaId {
        self.active
    }

    pub fn area(&self, id: AreaId) -> Option<&DisplayArea> {
        self.areas.get(id)
    }

    pub fn areas(&self) -> &[DisplayArea] {
        &self.areas
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    pub fn set_geometry(&mut self, id: AreaId, rect: Rect) {
        if let Some(area) = self.areas.get_mut(id) {
            area.surface.set_geometry(rect);
        }
    }

    // ------------------------------------------------------------------
    // Area switching
    // ------------------------------------------------------------------

    /// Make `id` the active area. Returns false for unknown or already
    /// active areas, which are left untouched.
    pub fn activate(&mut self, id: AreaId) -> bool {
        if id >= self.areas.len() {
            debug!("AreaController::activate - no area {}", id);
            return false;
        }
        if id == self.active {
            trace!("AreaController::activate - area {} already active", id);
            return false;
        }

        self.active = id;
        info!("Activated area {} ({})", id, self.areas[id].name);

        let selection = self.areas[id].selection;
        self.tree.set_current(selection.category, selection.item);
        self.refresh(id);
        true
    }

    /// Store the new selection for the active area and re-render
    pub fn on_selection_changed(&mut self, category: usize, item: usize) {
        let active = self.active;
        self.areas[active].selection = Selection::new(category, item);
        self.refresh(active);
    }

    /// Deliver pending tree events
    pub fn pump(&mut self) {
        for event in self.tree.take_events() {
            match event {
                NavEvent::SelectionChanged { category, item, .. } => {
                    self.on_selection_changed(category, item)
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // User-driven navigation
    // ------------------------------------------------------------------

    pub fn select_category(&mut self, category: impl TabKey) -> bool {
        let selected = self.tree.select_category(category);
        self.pump();
        selected
    }

    pub fn select_item(&mut self, item: impl TabKey) -> bool {
        let selected = self.tree.select_item(item);
        self.pump();
        selected
    }

    pub fn next_category(&mut self) -> bool {
        let moved = self.tree.next_category();
        self.pump();
        moved
    }

    pub fn prev_category(&mut self) -> bool {
        let moved = self.tree.prev_category();
        self.pump();
        moved
    }

    pub fn next_item(&mut self) -> bool {
        let moved = self.tree.next_item();
        self.pump();
        moved
    }

    pub fn prev_item(&mut self) -> bool {
        let moved = self.tree.prev_item();
        self.pump();
        moved
    }

    // ------------------------------------------------------------------
    // Renaming
    // ------------------------------------------------------------------

    pub fn rename_category(&mut self, category: usize, text: impl Into<String>) -> bool {
        let text = text.into();
        let renamed = self.tree.rename_category(category, text.as_str());
        if renamed {
            info!("Category {} renamed to '{}'", category, text);
        }
        renamed
    }

    pub fn rename_item(&mut self, category: usize, item: usize, text: impl Into<String>) -> bool {
        let text = text.into();
        let renamed = self.tree.rename_item(category, item, text.as_str());
        if renamed {
            info!("Item ({}, {}) renamed to '{}'", category, item, text);
        }
        renamed
    }

    // ------------------------------------------------------------------
    // Arbitration
    // ------------------------------------------------------------------

    /// Render `id`, then every other area so that content released by
    /// `id` can be picked up by an area that backed off earlier.
    fn refresh(&mut self, id: AreaId) {
        self.render(id);
        for other in 0..self.areas.len() {
            if other != id {
                self.render(other);
            }
        }
    }

    /// Show the content for the area's remembered selection, unless
    /// another area is already showing it.
    pub fn render(&mut self, id: AreaId) {
        let Some(area) = self.areas.get(id) else {
            return;
        };
        let selection = area.selection;

        let Some(content) = self.tree.get_content(selection.category, selection.item).cloned() else {
            self.areas[id].surface.hide_all();
            return;
        };

        let busy = self
            .areas
            .iter()
            .enumerate()
            .any(|(other, area)| other != id && area.surface.is_showing(&content));
        if busy {
            debug!(
                "Area {} backs off: ({}, {}) is shown elsewhere",
                id, selection.category, selection.item
            );
            self.areas[id].surface.hide_all();
            return;
        }

        // Detach from idle holders before attaching here
        for (other, area) in self.areas.iter_mut().enumerate() {
            if other != id {
                area.surface.detach(&content);
            }
        }

        let surface = &mut self.areas[id].surface;
        surface.attach(&content);
        surface.show(&content);
    }
}
