//! Single-level tab registry with index and label addressing.
//!
//! Tabs are stored densely by their stable index; a single secondary map
//! resolves labels to indices. Renaming therefore touches exactly two
//! places (the record and the label map) and nothing keyed by label can
//! go stale.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::{debug, trace, warn};

use super::content::ContentRef;
use super::surface::DisplaySurface;
use super::visual::{SurfaceId, TextVisualFactory, VisualFactory, VisualKind};

/// Anything that can address a tab: its index or its label
pub trait TabKey {
    fn resolve(&self, registry: &TabRegistry) -> Option<usize>;
}

impl TabKey for usize {
    fn resolve(&self, registry: &TabRegistry) -> Option<usize> {
        (*self < registry.count()).then_some(*self)
    }
}

impl TabKey for &str {
    fn resolve(&self, registry: &TabRegistry) -> Option<usize> {
        registry.get_index(self)
    }
}

impl TabKey for String {
    fn resolve(&self, registry: &TabRegistry) -> Option<usize> {
        registry.get_index(self)
    }
}

impl TabKey for &String {
    fn resolve(&self, registry: &TabRegistry) -> Option<usize> {
        registry.get_index(self)
    }
}

/// Events emitted by a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// The current tab changed (carries both index and label)
    CurrentChanged { index: usize, label: String },
}

struct TabRecord {
    label: String,
    content: ContentRef,
    surface: Option<SurfaceId>,
    child: Option<TabRegistry>,
}

pub struct TabRegistry {
    tabs: Vec<TabRecord>,
    index_by_label: HashMap<String, usize>,
    current: Option<usize>,

    /// Visual standing in for this registry when it is nested in another one
    frame: ContentRef,

    /// Present in manual-layout mode: current tab content is shown here
    surface: Option<DisplaySurface>,

    /// Filler content this registry manufactured and owns
    placeholders: Vec<ContentRef>,

    factory: Rc<dyn VisualFactory>,
    tab_width: Option<u16>,

    /// Depth of nested `without_events` scopes
    suppressed: usize,
    events: Vec<TabEvent>,
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::with_factory(Rc::new(TextVisualFactory::default()))
    }

    pub fn with_factory(factory: Rc<dyn VisualFactory>) -> Self {
        let frame = ContentRef::from_boxed(factory.create_visual(VisualKind::Frame));
        Self {
            tabs: Vec::new(),
            index_by_label: HashMap::new(),
            current: None,
            frame,
            surface: None,
            placeholders: Vec::new(),
            factory,
            tab_width: None,
            suppressed: 0,
            events: Vec::new(),
        }
    }

    /// Switch to manual-layout mode: the registry owns a surface holding
    /// every tab's content and keeps the current tab's content visible.
    pub fn with_surface(mut self) -> Self {
        let mut surface = DisplaySurface::new();
        for tab in &self.tabs {
            surface.attach(&tab.content);
        }
        self.surface = Some(surface);
        self.show_current();
        self
    }

    // ------------------------------------------------------------------
    // Adding tabs
    // ------------------------------------------------------------------

    /// Append a tab. Without content a placeholder is manufactured.
    ///
    /// Returns the new index, or `None` (nothing mutated) if the label is
    /// already taken.
    pub fn add_tab(&mut self, label: impl Into<String>, content: Option<ContentRef>) -> Option<usize> {
        self.insert(label.into(), content, None, None)
    }

    /// Like [`add_tab`](Self::add_tab), additionally attaching the content
    /// to an external surface and remembering which surface it went to.
    pub fn add_tab_on(
        &mut self,
        label: impl Into<String>,
        content: Option<ContentRef>,
        surface: &mut DisplaySurface,
    ) -> Option<usize> {
        self.insert(label.into(), content, Some(surface), None)
    }

    /// Append a tab whose content is a nested registry. The child is
    /// dropped if the label is rejected.
    pub fn add_sub_registry(&mut self, label: impl Into<String>, child: TabRegistry) -> Option<usize> {
        let frame = child.frame.clone();
        self.insert(label.into(), Some(frame), None, Some(child))
    }

    /// Nested registry whose frame is attached to an external surface
    pub fn add_sub_registry_on(
        &mut self,
        label: impl Into<String>,
        child: TabRegistry,
        surface: &mut DisplaySurface,
    ) -> Option<usize> {
        let frame = child.frame.clone();
        self.insert(label.into(), Some(frame), Some(surface), Some(child))
    }

    fn insert(
        &mut self,
        label: String,
        content: Option<ContentRef>,
        surface: Option<&mut DisplaySurface>,
        child: Option<TabRegistry>,
    ) -> Option<usize> {
        if self.index_by_label.contains_key(&label) {
            warn!("TabRegistry::add_tab - Duplicate label: {}", label);
            return None;
        }

        let content = match content {
            Some(content) => content,
            None => self.create_placeholder(),
        };

        let surface_id = surface.map(|surface| {
            surface.attach(&content);
            surface.id()
        });

        if let Some(own) = &mut self.surface {
            own.attach(&content);
        }

        let index = self.tabs.len();
        self.index_by_label.insert(label.clone(), index);
        self.tabs.push(TabRecord {
            label,
            content,
            surface: surface_id,
            child,
        });

        // First tab becomes current without notifying anyone
        if self.current.is_none() {
            self.current = Some(index);
            self.show_current();
        }

        Some(index)
    }

    fn create_placeholder(&mut self) -> ContentRef {
        let placeholder = ContentRef::placeholder(self.factory.create_visual(VisualKind::Placeholder));
        self.placeholders.push(placeholder.clone());
        placeholder
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get_index(&self, label: &str) -> Option<usize> {
        self.index_by_label.get(label).copied()
    }

    pub fn get_label(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(|tab| tab.label.as_str())
    }

    pub fn get_content(&self, key: impl TabKey) -> Option<&ContentRef> {
        let index = key.resolve(self)?;
        Some(&self.tabs[index].content)
    }

    /// Surface the tab's content was attached to when it was added
    pub fn get_surface(&self, key: impl TabKey) -> Option<SurfaceId> {
        let index = key.resolve(self)?;
        self.tabs[index].surface
    }

    pub fn child(&self, key: impl TabKey) -> Option<&TabRegistry> {
        let index = key.resolve(self)?;
        self.tabs[index].child.as_ref()
    }

    pub fn child_mut(&mut self, key: impl TabKey) -> Option<&mut TabRegistry> {
        let index = key.resolve(self)?;
        self.tabs[index].child.as_mut()
    }

    /// Nested registries with the index of the tab that owns them
    pub fn children_mut(&mut self) -> impl Iterator<Item = (usize, &mut TabRegistry)> {
        self.tabs
            .iter_mut()
            .enumerate()
            .filter_map(|(index, tab)| tab.child.as_mut().map(|child| (index, child)))
    }

    /// Labels in index order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|tab| tab.label.as_str())
    }

    pub fn frame(&self) -> &ContentRef {
        &self.frame
    }

    pub fn surface(&self) -> Option<&DisplaySurface> {
        self.surface.as_ref()
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    pub fn tab_width(&self) -> Option<u16> {
        self.tab_width
    }

    /// Fixed width hint for every tab title (`None` = natural width)
    pub fn set_tab_width(&mut self, width: Option<u16>) {
        self.tab_width = width;
    }

    // ------------------------------------------------------------------
    // Current tab
    // ------------------------------------------------------------------

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_label(&self) -> Option<&str> {
        self.current.and_then(|index| self.get_label(index))
    }

    pub fn current_content(&self) -> Option<&ContentRef> {
        self.current.map(|index| &self.tabs[index].content)
    }

    /// Make `key` the current tab. Emits [`TabEvent::CurrentChanged`] once
    /// if the current tab actually changed and emission is not suppressed.
    ///
    /// Returns false if the key does not resolve.
    pub fn set_current(&mut self, key: impl TabKey) -> bool {
        let Some(index) = key.resolve(self) else {
            debug!("TabRegistry::set_current - unknown tab");
            return false;
        };

        if self.current == Some(index) {
            return true;
        }

        self.current = Some(index);
        self.show_current();

        if self.suppressed > 0 {
            trace!("TabRegistry::set_current - emission suppressed for tab {}", index);
            return true;
        }

        let label = self.tabs[index].label.clone();
        self.events.push(TabEvent::CurrentChanged { index, label });
        true
    }

    /// Programmatic selection: never emits
    pub fn set_current_silent(&mut self, key: impl TabKey) -> bool {
        self.without_events(|registry| registry.set_current(key))
    }

    /// Run `f` with event emission suppressed. Scopes nest.
    pub fn without_events<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.suppressed += 1;
        let result = f(self);
        self.suppressed -= 1;
        result
    }

    /// Drain pending events
    pub fn take_events(&mut self) -> Vec<TabEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn show_current(&mut self) {
        if let (Some(surface), Some(index)) = (&mut self.surface, self.current) {
            surface.show(&self.tabs[index].content);
        }
    }

    // ------------------------------------------------------------------
    // Renaming
    // ------------------------------------------------------------------

    /// Change a tab's label.
    ///
    /// Unknown keys and labels held by a different tab are rejected.
    /// Renaming a tab to its own label succeeds without changes.
    pub fn rename(&mut self, key: impl TabKey, new_label: impl Into<String>) -> bool {
        let Some(index) = key.resolve(self) else {
            debug!("TabRegistry::rename - unknown tab");
            return false;
        };

        let new_label = new_label.into();
        match self.index_by_label.get(&new_label) {
            Some(&existing) if existing == index => return true,
            Some(_) => {
                warn!(
                    "TabRegistry::rename - New text conflicts with existing tab: {}",
                    new_label
                );
                return false;
            }
            None => {}
        }

        let old_label = std::mem::replace(&mut self.tabs[index].label, new_label.clone());
        self.index_by_label.remove(&old_label);
        self.index_by_label.insert(new_label, index);

        debug!("Renamed tab {}: '{}' -> '{}'", index, old_label, self.tabs[index].label);
        true
    }
}

impl Drop for TabRegistry {
    fn drop(&mut self) {
        for placeholder in self.placeholders.drain(..) {
            placeholder.set_visible(false);
            placeholder.reparent(None);
        }
    }
}

impl fmt::Debug for TabRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabRegistry")
            .field("labels", &self.labels().collect::<Vec<_>>())
            .field("current", &self.current)
            .field("placeholders", &self.placeholders.len())
            .field("manual_layout", &self.surface.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(labels: &[&str]) -> TabRegistry {
        let mut registry = TabRegistry::new();
        for label in labels {
            registry.add_tab(*label, Some(ContentRef::text(*label)));
        }
        registry
    }

    fn assert_bijection(registry: &TabRegistry) {
        for index in 0..registry.count() {
            let label = registry.get_label(index).unwrap();
            assert_eq!(registry.get_index(label), Some(index));
        }
        assert_eq!(registry.index_by_label.len(), registry.count());
    }

    #[test]
    fn test_add_tab_assigns_dense_indices() {
        let mut registry = TabRegistry::new();
        assert_eq!(registry.add_tab("Phones", None), Some(0));
        assert_eq!(registry.add_tab("Laptops", None), Some(1));
        assert_eq!(registry.add_tab("Cameras", None), Some(2));
        assert_eq!(registry.count(), 3);
        assert_bijection(&registry);
    }

    #[test]
    fn test_duplicate_label_rejected_without_mutation() {
        let mut registry = registry_with(&["dup", "other"]);
        let before: Vec<String> = registry.labels().map(String::from).collect();

        assert_eq!(registry.add_tab("dup", None), None);

        assert_eq!(registry.count(), 2);
        assert_eq!(registry.placeholder_count(), 0);
        assert_eq!(registry.labels().map(String::from).collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_first_tab_becomes_current_silently() {
        let mut registry = registry_with(&["a", "b"]);
        assert_eq!(registry.current_index(), Some(0));
        assert_eq!(registry.current_label(), Some("a"));
        assert!(registry.take_events().is_empty());
    }

    #[test]
    fn test_lookups_on_missing_keys() {
        let registry = registry_with(&["a"]);
        assert_eq!(registry.get_index("zzz"), None);
        assert_eq!(registry.get_label(5), None);
        assert!(registry.get_content("zzz").is_none());
        assert!(registry.get_content(9usize).is_none());
    }

    #[test]
    fn test_placeholder_manufactured_and_owned() {
        let mut registry = TabRegistry::new();
        registry.add_tab("empty", None);

        let content = registry.get_content("empty").unwrap();
        assert!(content.is_placeholder());
        assert_eq!(registry.placeholder_count(), 1);

        let weak = content.downgrade();
        drop(registry);
        assert!(!weak.is_alive());
    }

    #[test]
    fn test_caller_content_survives_registry() {
        let content = ContentRef::text("mine");
        {
            let mut registry = TabRegistry::new();
            registry.add_tab("mine", Some(content.clone()));
            assert!(!registry.get_content("mine").unwrap().is_placeholder());
        }
        assert!(content.is_visible());
    }

    #[test]
    fn test_set_current_emits_once() {
        let mut registry = registry_with(&["a", "b", "c"]);

        assert!(registry.set_current("c"));
        assert!(registry.set_current("c"));

        assert_eq!(
            registry.take_events(),
            vec![TabEvent::CurrentChanged {
                index: 2,
                label: "c".to_string()
            }]
        );
        assert!(!registry.has_pending_events());
    }

    #[test]
    fn test_set_current_unknown_is_noop() {
        let mut registry = registry_with(&["a", "b"]);
        assert!(!registry.set_current("nope"));
        assert!(!registry.set_current(7usize));
        assert_eq!(registry.current_index(), Some(0));
        assert!(registry.take_events().is_empty());
    }

    #[test]
    fn test_suppression_scopes_nest() {
        let mut registry = registry_with(&["a", "b", "c"]);

        registry.without_events(|r| {
            r.set_current(1usize);
            r.without_events(|r| r.set_current(2usize));
            r.set_current(0usize);
        });
        assert!(registry.take_events().is_empty());

        registry.set_current_silent(2usize);
        assert!(registry.take_events().is_empty());

        registry.set_current(1usize);
        assert_eq!(registry.take_events().len(), 1);
    }

    #[test]
    fn test_rename_repoints_both_views() {
        let mut registry = registry_with(&["Electronics", "Clothing"]);
        let content = registry.get_content("Electronics").cloned().unwrap();

        assert!(registry.rename(0usize, "Tech"));

        assert_eq!(registry.get_label(0), Some("Tech"));
        assert_eq!(registry.get_index("Tech"), Some(0));
        assert_eq!(registry.get_index("Electronics"), None);
        assert_eq!(registry.get_content("Tech"), Some(&content));
        assert!(registry.get_content("Electronics").is_none());
        assert_bijection(&registry);
    }

    #[test]
    fn test_rename_by_label() {
        let mut registry = registry_with(&["a", "b"]);
        assert!(registry.rename("b", "bee"));
        assert!(!registry.rename("missing", "x"));
        assert_eq!(registry.get_label(1), Some("bee"));
    }

    #[test]
    fn test_rename_collision_rejected() {
        let mut registry = registry_with(&["a", "b"]);
        assert!(!registry.rename(0usize, "b"));
        assert_eq!(registry.get_label(0), Some("a"));
        assert_eq!(registry.get_index("b"), Some(1));
        assert_bijection(&registry);
    }

    #[test]
    fn test_rename_to_same_label_succeeds() {
        let mut registry = registry_with(&["a"]);
        assert!(registry.rename(0usize, "a"));
        assert_eq!(registry.get_index("a"), Some(0));
    }

    #[test]
    fn test_rename_out_of_range_is_noop() {
        let mut registry = registry_with(&["a", "b"]);
        assert!(!registry.rename(2usize, "x"));
        assert!(!registry.rename(usize::MAX, "x"));
        assert_eq!(registry.labels().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_renamed_label_frees_old_for_reuse() {
        let mut registry = registry_with(&["a"]);
        registry.rename(0usize, "z");
        assert_eq!(registry.add_tab("a", None), Some(1));
        assert_bijection(&registry);
    }

    #[test]
    fn test_manual_layout_shows_current_content() {
        let mut registry = TabRegistry::new().with_surface();
        let a = ContentRef::text("a");
        let b = ContentRef::text("b");
        registry.add_tab("a", Some(a.clone()));
        registry.add_tab("b", Some(b.clone()));

        let surface = registry.surface().unwrap();
        assert!(surface.is_showing(&a));
        assert!(!surface.is_showing(&b));

        registry.set_current("b");
        let surface = registry.surface().unwrap();
        assert!(surface.is_showing(&b));
        assert!(!a.is_visible());
    }

    #[test]
    fn test_add_tab_on_records_surface() {
        let mut registry = TabRegistry::new();
        let mut surface = DisplaySurface::new();
        let content = ContentRef::text("x");

        registry.add_tab_on("x", Some(content.clone()), &mut surface);
        registry.add_tab("y", None);

        assert!(surface.contains(&content));
        assert_eq!(registry.get_surface("x"), Some(surface.id()));
        assert_eq!(registry.get_surface("y"), None);

        registry.rename("x", "ex");
        assert_eq!(registry.get_surface("ex"), Some(surface.id()));
    }

    #[test]
    fn test_nested_registry_follows_rename() {
        let mut parent = TabRegistry::new();
        let mut child = TabRegistry::new();
        child.add_tab("inner", None);
        let frame = child.frame().clone();

        assert_eq!(parent.add_sub_registry("outer", child), Some(0));
        assert_eq!(parent.get_content("outer"), Some(&frame));

        parent.rename("outer", "renamed");
        let child = parent.child("renamed").unwrap();
        assert_eq!(child.get_label(0), Some("inner"));
        assert!(parent.child("outer").is_none());
    }

    #[test]
    fn test_tab_width_hint() {
        let mut registry = TabRegistry::new();
        assert_eq!(registry.tab_width(), None);
        registry.set_tab_width(Some(12));
        assert_eq!(registry.tab_width(), Some(12));
    }
}
