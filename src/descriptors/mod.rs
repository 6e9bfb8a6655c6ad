//! Descriptor model: badges, controls, markers, and app controls.
//!
//! A descriptor is a plain data record describing one UI affordance.
//! Some fields are literal, some are computed per subject; [`Attr`]
//! normalizes the two shapes. Each descriptor type has a matching
//! `Resolved*` record with every field concrete for one subject.
//!
//! ## Key Types
//!
//! - `Attr<T>`: Fixed value or per-subject computation
//! - `Badge` / `ResolvedBadge`: Text label overlays
//! - `Control` / `ResolvedControl`: Clickable affordances and groups
//! - `Marker` / `ResolvedMarker`: Colored status indicators
//! - `AppControl` / `ResolvedAppControl`: Window-scoped affordances
//! - `ClickEvent`, `OnCardClick`, `OnAppClick`: The dispatch contract

pub mod app_control;
pub mod attr;
pub mod badge;
pub mod control;
pub mod marker;

pub use app_control::{AppControl, ResolvedAppControl};
pub use attr::{resolve_or, Attr};
pub use badge::{Badge, ResolvedBadge};
pub use control::{ClickEvent, Control, OnAppClick, OnCardClick, ResolvedControl};
pub use marker::{Marker, ResolvedMarker, DEFAULT_MARKER_COLOR, DEFAULT_MARKER_ICON};
