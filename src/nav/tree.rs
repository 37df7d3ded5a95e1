//! Two-level navigation: a category registry whose tabs each own an item
//! registry.
//!
//! Only the item registry behind the current category is live. Its
//! selection changes are forwarded as combined `(category, item)` events;
//! anything emitted by the other item registries is dropped.

use std::rc::Rc;

use log::{debug, trace, warn};

use super::content::ContentRef;
use super::registry::{TabEvent, TabKey, TabRegistry};
use super::surface::DisplaySurface;
use super::visual::{TextVisualFactory, VisualFactory};

/// Events emitted by the navigation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    SelectionChanged {
        category: usize,
        item: usize,
        category_label: String,
        item_label: String,
    },
}

pub struct NavigationTree {
    categories: TabRegistry,
    /// Holds every item registry's frame; shows the active one
    item_bars: DisplaySurface,
    factory: Rc<dyn VisualFactory>,
    tab_width: Option<u16>,
    events: Vec<NavEvent>,
}

impl Default for NavigationTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationTree {
    pub fn new() -> Self {
        Self::with_factory(Rc::new(TextVisualFactory::default()))
    }

    pub fn with_factory(factory: Rc<dyn VisualFactory>) -> Self {
        Self {
            categories: TabRegistry::with_factory(factory.clone()),
            item_bars: DisplaySurface::new(),
            factory,
            tab_width: None,
            events: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Building
    // ------------------------------------------------------------------

    /// Add a category together with its (empty) item registry
    pub fn add_category(&mut self, label: impl Into<String>) -> Option<usize> {
        let mut items = TabRegistry::with_factory(self.factory.clone());
        items.set_tab_width(self.tab_width);

        let index = self
            .categories
            .add_sub_registry_on(label, items, &mut self.item_bars)?;

        if self.categories.current_index() == Some(index) {
            self.sync_item_bar();
        }
        Some(index)
    }

    /// Add an item under a category given by index or label
    pub fn add_item(
        &mut self,
        category: impl TabKey,
        label: impl Into<String>,
        content: Option<ContentRef>,
    ) -> Option<usize> {
        let Some(category) = category.resolve(&self.categories) else {
            warn!("NavigationTree::add_item - unknown category");
            return None;
        };
        self.items_mut(category).add_tab(label, content)
    }

    /// Apply a fixed tab width to the category bar and every item bar
    pub fn set_tab_width(&mut self, width: Option<u16>) {
        self.tab_width = width;
        self.categories.set_tab_width(width);
        for (_, items) in self.categories.children_mut() {
            items.set_tab_width(width);
        }
    }

    pub fn tab_width(&self) -> Option<u16> {
        self.tab_width
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn category_count(&self) -> usize {
        self.categories.count()
    }

    pub fn item_count(&self, category: impl TabKey) -> Option<usize> {
        let category = category.resolve(&self.categories)?;
        Some(self.items(category).count())
    }

    pub fn category_label(&self, index: usize) -> Option<&str> {
        self.categories.get_label(index)
    }

    pub fn category_index(&self, label: &str) -> Option<usize> {
        self.categories.get_index(label)
    }

    pub fn item_label(&self, category: impl TabKey, item: usize) -> Option<&str> {
        let category = category.resolve(&self.categories)?;
        self.items(category).get_label(item)
    }

    pub fn item_index(&self, category: impl TabKey, label: &str) -> Option<usize> {
        let category = category.resolve(&self.categories)?;
        self.items(category).get_index(label)
    }

    pub fn category_labels(&self) -> Vec<&str> {
        self.categories.labels().collect()
    }

    pub fn item_labels(&self, category: impl TabKey) -> Vec<&str> {
        match category.resolve(&self.categories) {
            Some(category) => self.items(category).labels().collect(),
            None => Vec::new(),
        }
    }

    /// Content for a `(category, item)` pair, addressed by index or label
    pub fn get_content(&self, category: impl TabKey, item: impl TabKey) -> Option<&ContentRef> {
        let category = category.resolve(&self.categories)?;
        self.items(category).get_content(item)
    }

    pub fn current_category(&self) -> Option<usize> {
        self.categories.current_index()
    }

    pub fn current_item(&self) -> Option<usize> {
        let category = self.current_category()?;
        self.items(category).current_index()
    }

    pub fn current(&self) -> Option<(usize, usize)> {
        Some((self.current_category()?, self.current_item()?))
    }

    /// Surface holding the item bars; the current category's is visible
    pub fn item_bars(&self) -> &DisplaySurface {
        &self.item_bars
    }

    // ------------------------------------------------------------------
    // Programmatic selection
    // ------------------------------------------------------------------

    /// Move to `(category, item)` without emitting anything.
    ///
    /// Unknown categories are ignored; an unknown item leaves the
    /// category's item selection untouched.
    pub fn set_current(&mut self, category: impl TabKey, item: impl TabKey) {
        let Some(category) = category.resolve(&self.categories) else {
            debug!("NavigationTree::set_current - unknown category");
            return;
        };

        self.categories.set_current_silent(category);
        self.sync_item_bar();
        self.items_mut(category).set_current_silent(item);
    }

    // ------------------------------------------------------------------
    // User-driven selection (emits)
    // ------------------------------------------------------------------

    pub fn select_category(&mut self, category: impl TabKey) -> bool {
        let selected = self.categories.set_current(category);
        self.route_events();
        selected
    }

    /// Select an item in the current category
    pub fn select_item(&mut self, item: impl TabKey) -> bool {
        let Some(category) = self.current_category() else {
            return false;
        };
        let selected = self.items_mut(category).set_current(item);
        self.route_events();
        selected
    }

    pub fn next_category(&mut self) -> bool {
        match step(self.current_category(), self.category_count(), true) {
            Some(index) => self.select_category(index),
            None => false,
        }
    }

    pub fn prev_category(&mut self) -> bool {
        match step(self.current_category(), self.category_count(), false) {
            Some(index) => self.select_category(index),
            None => false,
        }
    }

    pub fn next_item(&mut self) -> bool {
        let Some(category) = self.current_category() else {
            return false;
        };
        match step(self.current_item(), self.items(category).count(), true) {
            Some(index) => self.select_item(index),
            None => false,
        }
    }

    pub fn prev_item(&mut self) -> bool {
        let Some(category) = self.current_category() else {
            return false;
        };
        match step(self.current_item(), self.items(category).count(), false) {
            Some(index) => self.select_item(index),
            None => false,
        }
    }

    /// Drain pending selection events
    pub fn take_events(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Renaming
    // ------------------------------------------------------------------

    pub fn rename_category(&mut self, category: impl TabKey, text: impl Into<String>) -> bool {
        self.categories.rename(category, text)
    }

    pub fn rename_item(&mut self, category: impl TabKey, item: impl TabKey, text: impl Into<String>) -> bool {
        let Some(category) = category.resolve(&self.categories) else {
            debug!("NavigationTree::rename_item - unknown category");
            return false;
        };
        self.items_mut(category).rename(item, text)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    pub(crate) fn items(&self, category: usize) -> &TabRegistry {
        self.categories
            .child(category)
            .expect("every category must own an item registry")
    }

    pub(crate) fn items_mut(&mut self, category: usize) -> &mut TabRegistry {
        self.categories
            .child_mut(category)
            .expect("every category must own an item registry")
    }

    pub(crate) fn categories(&self) -> &TabRegistry {
        &self.categories
    }

    fn sync_item_bar(&mut self) {
        if let Some(category) = self.categories.current_index() {
            let frame = self.items(category).frame().clone();
            self.item_bars.show(&frame);
        }
    }

    fn route_events(&mut self) {
        for event in self.categories.take_events() {
            match event {
                TabEvent::CurrentChanged { index, .. } => self.on_category_changed(index),
            }
        }

        let active = self.categories.current_index();
        let mut live = Vec::new();
        for (category, items) in self.categories.children_mut() {
            let events = items.take_events();
            if Some(category) != active {
                if !events.is_empty() {
                    trace!(
                        "Dropping {} event(s) from inactive item registry {}",
                        events.len(),
                        category
                    );
                }
                continue;
            }
            live.extend(events.into_iter().map(|event| (category, event)));
        }

        for (category, event) in live {
            match event {
                TabEvent::CurrentChanged { index, .. } => self.emit_selection(category, index),
            }
        }
    }

    fn on_category_changed(&mut self, category: usize) {
        self.sync_item_bar();
        match self.items(category).current_index() {
            Some(item) => self.emit_selection(category, item),
            None => debug!("Category {} has no items, selection not propagated", category),
        }
    }

    fn emit_selection(&mut self, category: usize, item: usize) {
        let category_label = self.categories.get_label(category).unwrap_or_default().to_string();
        let item_label = self.items(category).get_label(item).unwrap_or_default().to_string();
        trace!("Selection changed: ({}, {}) {} / {}", category, item, category_label, item_label);
        self.events.push(NavEvent::SelectionChanged {
            category,
            item,
            category_label,
            item_label,
        });
    }
}

/// Wrap-around neighbour of `current` in `0..count`
fn step(current: Option<usize>, count: usize, forward: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match current {
        None => 0,
        Some(index) if forward => (index + 1) % count,
        Some(0) => count - 1,
        Some(index) => index - 1,
    })
}
