//! Descriptor library: the built-in badge, control, marker, and
//! app-control catalogs.
//!
//! Each submodule exposes constructor functions for individual
//! descriptors plus a `defaults` sequence. Render assembly starts
//! from these defaults and lets hook listeners reshape them; handlers
//! for click behavior are injected by the host via [`CardActions`]
//! and [`AppActions`] since acting on cards is outside this crate.

pub mod app_controls;
pub mod badges;
pub mod controls;
pub mod markers;

pub use app_controls::AppActions;
pub use controls::CardActions;
