//! Render hook registry.
//!
//! The registry is the crate's extension point: external code
//! registers listeners under a surface name, and render assembly
//! calls them once per render cycle with the three descriptor
//! sequences by mutable reference. Listeners may append, remove, or
//! reorder entries in place; they run in registration order, each
//! completing before the next. Flattening always sees the fully
//! mutated final sequence.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::descriptors::{AppControl, Badge, Control};
use crate::surface::RenderContext;

/// Unique identifier for a registered hook listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HookId(pub u32);

impl HookId {
    /// Create a new hook ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for HookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hook({})", self.0)
    }
}

/// A render hook listener.
///
/// Receives the render context and the badge, control, and
/// app-control sequences for in-place mutation.
pub type RenderHook = Rc<
    dyn Fn(&RenderContext, &mut Vec<Badge>, &mut Vec<Control>, &mut Vec<AppControl>),
>;

/// Registry of render hook listeners, indexed by surface name.
#[derive(Clone, Default)]
pub struct HookRegistry {
    listeners: FxHashMap<String, Vec<(HookId, RenderHook)>>,
    next_id: u32,
}

impl HookRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for a surface name, returns its ID.
    pub fn register(
        &mut self,
        surface: impl Into<String>,
        hook: impl Fn(&RenderContext, &mut Vec<Badge>, &mut Vec<Control>, &mut Vec<AppControl>)
            + 'static,
    ) -> HookId {
        let id = HookId::new(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(surface.into())
            .or_default()
            .push((id, Rc::new(hook)));
        id
    }

    /// Unregister a listener. Returns true when it was present.
    pub fn unregister(&mut self, id: HookId) -> bool {
        let mut removed = false;
        let mut empty_names = Vec::new();
        for (name, listeners) in self.listeners.iter_mut() {
            let before = listeners.len();
            listeners.retain(|(hook_id, _)| *hook_id != id);
            removed |= listeners.len() < before;
            if listeners.is_empty() {
                empty_names.push(name.clone());
            }
        }
        for name in empty_names {
            self.listeners.remove(&name);
        }
        removed
    }

    /// Number of listeners registered for a surface name.
    #[must_use]
    pub fn listener_count(&self, surface: &str) -> usize {
        self.listeners.get(surface).map_or(0, Vec::len)
    }

    /// Total listeners across all surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invoke all listeners for a surface name, in registration order.
    ///
    /// Each listener completes before the next runs; all of them see
    /// the mutations of earlier listeners.
    pub fn call(
        &self,
        surface: &str,
        ctx: &RenderContext,
        badges: &mut Vec<Badge>,
        controls: &mut Vec<Control>,
        app_controls: &mut Vec<AppControl>,
    ) {
        let Some(listeners) = self.listeners.get(surface) else {
            return;
        };
        log::debug!(
            "render hook '{}': {} listener(s)",
            surface,
            listeners.len()
        );
        for (_, hook) in listeners {
            hook(ctx, badges, controls, app_controls);
        }
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: FxHashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(name, listeners)| (name.as_str(), listeners.len()))
            .collect();
        f.debug_struct("HookRegistry")
            .field("listeners", &counts)
            .finish()
    }
}
