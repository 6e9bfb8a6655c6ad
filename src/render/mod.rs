//! Render pipeline: application, dispatch, and assembly.
//!
//! - `apply`: resolve descriptor sequences per card
//! - `dispatch`: flatten control trees into class-to-handler tables
//! - `assembly`: the once-per-render extension point tying it together

pub mod apply;
pub mod assembly;
pub mod dispatch;

pub use apply::{apply_app_controls, apply_badges, apply_controls, apply_markers};
pub use assembly::{CardView, RenderData};
pub use dispatch::DispatchTable;
