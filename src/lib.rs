//! # card-overlays
//!
//! A declarative overlay engine for card UIs: badges, controls, and
//! markers described as data, resolved per card, and flattened into a
//! click dispatch table.
//!
//! ## Design Principles
//!
//! 1. **Descriptors Are Data**: Affordances are plain records. A field
//!    is either literal or a pure function of the subject; `Attr<T>`
//!    makes that explicit.
//!
//! 2. **Shape Once, Resolve Per Card**: Which descriptors exist is
//!    decided once per render (defaults + hook mutations). Resolution
//!    against each card subject happens afterwards and is pure.
//!
//! 3. **Composition Over Inheritance**: The host adapter wraps this
//!    core, it doesn't inherit from anything. The crate knows nothing
//!    about the host's application lifecycle or templating.
//!
//! ## Modules
//!
//! - `subject`: Card subjects and the open-ended attribute bag
//! - `descriptors`: Badge/control/marker/app-control model, `Attr<T>`
//! - `catalog`: Built-in descriptor library and per-surface defaults
//! - `render`: Appliers, the dispatch-table flattener, assembly
//! - `hooks`: Typed extension-point registry
//! - `surface`: Surface kinds and per-surface configuration

pub mod catalog;
pub mod descriptors;
pub mod hooks;
pub mod render;
pub mod subject;
pub mod surface;

// Re-export commonly used types
pub use crate::subject::{
    AttributeKey, AttributeValue, Attributes,
    CardFace, CardId, CardSubject,
};

pub use crate::descriptors::{
    resolve_or, Attr,
    AppControl, Badge, ClickEvent, Control, Marker,
    OnAppClick, OnCardClick,
    ResolvedAppControl, ResolvedBadge, ResolvedControl, ResolvedMarker,
};

pub use crate::catalog::{AppActions, CardActions};

pub use crate::render::{
    apply_app_controls, apply_badges, apply_controls, apply_markers,
    CardView, DispatchTable, RenderData,
};

pub use crate::hooks::{HookId, HookRegistry, RenderHook};

pub use crate::surface::{RenderContext, SurfaceConfig, SurfaceKind};
