//! Navigation core: tab registries, the two-level navigation tree and the
//! display areas that share its content.

pub mod area;
pub mod content;
pub mod registry;
pub mod surface;
pub mod tree;
pub mod visual;

pub use area::{AreaController, AreaId, DisplayArea, Selection};
pub use content::{ContentId, ContentRef, WeakContentRef};
pub use registry::{TabEvent, TabKey, TabRegistry};
pub use surface::DisplaySurface;
pub use tree::{NavEvent, NavigationTree};
pub use visual::{PLACEHOLDER_TEXT, SurfaceId, TextVisual, TextVisualFactory, Visual, VisualFactory, VisualKind};
