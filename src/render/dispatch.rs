//! Control flattening and click dispatch.
//!
//! The host's event router knows only "an element with class C was
//! clicked on card S". The dispatch table is the bridge: a flat
//! mapping from class name to handler, extracted from the (possibly
//! nested) control tree once per render.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::descriptors::{ClickEvent, Control, OnCardClick};
use crate::subject::CardSubject;

/// Flat mapping from control class name to click handler.
///
/// Rebuilt from the finalized control sequence on every render and
/// discarded with it; nothing is cached across cycles.
#[derive(Clone, Default)]
pub struct DispatchTable {
    handlers: FxHashMap<String, OnCardClick>,
}

impl DispatchTable {
    /// Flatten a control tree into a dispatch table.
    ///
    /// Left-fold in document order: a leaf contributes its handler
    /// when it has both an `onclick` and a non-empty `class`; a
    /// control's children are folded depth-first in their own order.
    /// Groups contribute nothing of their own. When two controls
    /// anywhere in the tree share a class, the later one wins; a
    /// warning is logged since that is almost always a descriptor
    /// mistake.
    #[must_use]
    pub fn from_controls(controls: &[Control]) -> Self {
        let mut pairs: SmallVec<[(String, OnCardClick); 8]> = SmallVec::new();
        collect_pairs(controls, &mut pairs);

        let mut handlers = FxHashMap::default();
        for (class, handler) in pairs {
            if handlers.insert(class.clone(), handler).is_some() {
                log::warn!("duplicate control class '{}': later handler wins", class);
            }
        }
        Self { handlers }
    }

    /// Look up the handler for a class.
    #[must_use]
    pub fn get(&self, class: &str) -> Option<&OnCardClick> {
        self.handlers.get(class)
    }

    /// Invoke the handler for the event's class, if one is mapped.
    ///
    /// Returns true when a handler ran.
    pub fn dispatch(&self, event: &ClickEvent, subject: &CardSubject) -> bool {
        match self.handlers.get(&event.class) {
            Some(handler) => {
                handler(event, subject);
                true
            }
            None => false,
        }
    }

    /// Iterate the mapped class names.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of mapped classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no classes are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut classes: Vec<_> = self.classes().collect();
        classes.sort_unstable();
        f.debug_struct("DispatchTable")
            .field("classes", &classes)
            .finish()
    }
}

fn collect_pairs(controls: &[Control], pairs: &mut SmallVec<[(String, OnCardClick); 8]>) {
    for control in controls {
        if let Some(handler) = &control.onclick {
            if !control.class.is_empty() {
                pairs.push((control.class.clone(), handler.clone()));
            }
        }
        if !control.controls.is_empty() {
            collect_pairs(&control.controls, pairs);
        }
    }
}
