//! Extension hooks: external customization of render descriptor sets.
//!
//! Replaces an untyped global hook bus with an explicit registry of
//! typed listeners, keyed by surface name and invoked synchronously
//! in registration order during render assembly.

pub mod registry;

pub use registry::{HookId, HookRegistry, RenderHook};
