//! Control descriptors - clickable affordances and control groups.
//!
//! A control is either a leaf (icon button with a click handler) or a
//! group (a wrapper class nesting child controls, with no click
//! behavior of its own). The two share one type; a group is any
//! control with a non-empty `controls` list.
//!
//! Click handlers never travel into resolved records. Resolved
//! controls are for presentation; dispatch goes through the
//! [`DispatchTable`](crate::render::DispatchTable), which is the only
//! consumer of `onclick`.

use std::rc::Rc;

use serde::Serialize;

use crate::subject::CardSubject;

use super::attr::{resolve_or, Attr};

/// A click event as reported by the host's event router.
///
/// The host owns real DOM events; this is the slice of them the
/// dispatch layer and handlers need.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// CSS class of the clicked element.
    pub class: String,
    /// Alt key held?
    pub alt: bool,
    /// Ctrl/Cmd key held?
    pub ctrl: bool,
    /// Shift key held?
    pub shift: bool,
}

impl ClickEvent {
    /// Create an event for the given element class.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ..Self::default()
        }
    }

    /// Set the alt modifier (builder pattern).
    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Set the ctrl modifier (builder pattern).
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Set the shift modifier (builder pattern).
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Handler for a card-scoped control click.
pub type OnCardClick = Rc<dyn Fn(&ClickEvent, &CardSubject)>;

/// Handler for an application-scoped control click.
pub type OnAppClick = Rc<dyn Fn(&ClickEvent)>;

/// A control descriptor: leaf affordance or group wrapper.
///
/// ## Example
///
/// ```
/// use card_overlays::descriptors::{Attr, Control};
/// use card_overlays::subject::CardSubject;
///
/// let flip = Control::new("flip")
///     .with_tooltip("Flip")
///     .with_icon("fas fa-sync-alt")
///     .with_onclick(|_event, card: &CardSubject| {
///         println!("flip {}", card.id);
///     });
///
/// assert!(!flip.is_group());
/// ```
#[derive(Clone)]
pub struct Control {
    /// CSS class. Leaves need one to be reachable by dispatch; groups
    /// use it purely for styling.
    pub class: String,

    /// Hover tooltip.
    pub tooltip: Option<Attr<String>>,

    /// Accessibility label.
    pub aria: Option<Attr<String>>,

    /// Icon class (e.g. a font-awesome class string).
    pub icon: Option<Attr<String>>,

    /// Disable this control for a given subject? Defaults to enabled.
    pub disabled: Option<Attr<bool>>,

    /// Click handler. Consumed only by the dispatch table.
    pub onclick: Option<OnCardClick>,

    /// Child controls. Non-empty makes this a group.
    pub controls: Vec<Control>,
}

impl Control {
    /// Create a leaf control with the given class.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            tooltip: None,
            aria: None,
            icon: None,
            disabled: None,
            onclick: None,
            controls: Vec::new(),
        }
    }

    /// Create a group wrapping the given children.
    pub fn group(class: impl Into<String>, children: Vec<Control>) -> Self {
        Self {
            controls: children,
            ..Self::new(class)
        }
    }

    /// Set the tooltip (builder pattern).
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<Attr<String>>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set the aria label (builder pattern).
    #[must_use]
    pub fn with_aria(mut self, aria: impl Into<Attr<String>>) -> Self {
        self.aria = Some(aria.into());
        self
    }

    /// Set the icon (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<Attr<String>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the disabled condition (builder pattern).
    #[must_use]
    pub fn with_disabled(mut self, disabled: impl Into<Attr<bool>>) -> Self {
        self.disabled = Some(disabled.into());
        self
    }

    /// Set the click handler (builder pattern).
    #[must_use]
    pub fn with_onclick(mut self, handler: impl Fn(&ClickEvent, &CardSubject) + 'static) -> Self {
        self.onclick = Some(Rc::new(handler));
        self
    }

    /// Add a child control (builder pattern).
    #[must_use]
    pub fn with_child(mut self, child: Control) -> Self {
        self.controls.push(child);
        self
    }

    /// Is this a group wrapper?
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.controls.is_empty()
    }

    /// Resolve every field against one subject, recursing through
    /// children. The click handler is deliberately left behind.
    #[must_use]
    pub fn resolve(&self, subject: &CardSubject) -> ResolvedControl {
        ResolvedControl {
            class: self.class.clone(),
            tooltip: resolve_or(self.tooltip.as_ref(), String::new(), subject),
            aria: resolve_or(self.aria.as_ref(), String::new(), subject),
            icon: resolve_or(self.icon.as_ref(), String::new(), subject),
            disabled: resolve_or(self.disabled.as_ref(), false, subject),
            controls: self.controls.iter().map(|c| c.resolve(subject)).collect(),
        }
    }
}

impl std::fmt::Debug for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Control")
            .field("class", &self.class)
            .field("tooltip", &self.tooltip)
            .field("aria", &self.aria)
            .field("icon", &self.icon)
            .field("disabled", &self.disabled)
            .field("onclick", &self.onclick.as_ref().map(|_| "<handler>"))
            .field("controls", &self.controls)
            .finish()
    }
}

/// A control with every field concrete for one subject.
///
/// Plain presentation data; no handler. Groups keep their resolved
/// children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedControl {
    /// CSS class.
    pub class: String,
    /// Hover tooltip, `""` when unset.
    pub tooltip: String,
    /// Accessibility label, `""` when unset.
    pub aria: String,
    /// Icon class, `""` when unset.
    pub icon: String,
    /// Whether presentation should render this control inert.
    pub disabled: bool,
    /// Resolved children, empty for leaves.
    pub controls: Vec<ResolvedControl>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> CardSubject {
        CardSubject::new("c1", "Ace", "ace.webp")
    }

    #[test]
    fn test_leaf_defaults() {
        let control = Control::new("flip");
        let resolved = control.resolve(&subject());
        assert_eq!(resolved.class, "flip");
        assert_eq!(resolved.tooltip, "");
        assert_eq!(resolved.icon, "");
        assert!(!resolved.disabled);
        assert!(resolved.controls.is_empty());
    }

    #[test]
    fn test_group_detection() {
        let group = Control::group("faces", vec![Control::new("next-face")]);
        assert!(group.is_group());
        assert!(!Control::new("flip").is_group());
    }

    #[test]
    fn test_resolve_recurses_into_children() {
        let group = Control::group(
            "faces",
            vec![
                Control::new("prev-face").with_icon("fas fa-chevron-left"),
                Control::new("next-face").with_icon("fas fa-chevron-right"),
            ],
        );

        let resolved = group.resolve(&subject());
        assert_eq!(resolved.controls.len(), 2);
        assert_eq!(resolved.controls[0].icon, "fas fa-chevron-left");
        assert_eq!(resolved.controls[1].class, "next-face");
    }

    #[test]
    fn test_resolve_drops_onclick() {
        let control = Control::new("discard").with_onclick(|_, _| {});
        let resolved = control.resolve(&subject());
        // ResolvedControl has no handler field at all; serializing it
        // proves only plain data survives resolution.
        let json = serde_json::to_value(&resolved).unwrap();
        assert!(json.get("onclick").is_none());
    }

    #[test]
    fn test_computed_disabled() {
        let control = Control::new("next-face")
            .with_disabled(Attr::computed(|c: &CardSubject| !c.has_next_face()));
        assert!(control.resolve(&subject()).disabled);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let card = subject();
        let group = Control::group(
            "faces",
            vec![Control::new("next-face")
                .with_disabled(Attr::computed(|c: &CardSubject| !c.has_next_face()))],
        );
        assert_eq!(group.resolve(&card), group.resolve(&card));
    }

    #[test]
    fn test_click_event_builders() {
        let event = ClickEvent::new("flip").with_shift();
        assert_eq!(event.class, "flip");
        assert!(event.shift);
        assert!(!event.alt);
    }
}
