//! Surface identity and configuration.

pub mod config;

pub use config::{RenderContext, SurfaceConfig, SurfaceKind};
