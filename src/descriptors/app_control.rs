//! Application controls - affordances scoped to the whole window.
//!
//! Unlike card controls these act on the surface itself (shuffle the
//! pile, deal, reset) rather than on one card, so their handlers take
//! only the click event. The sequence is flat; there are no app
//! control groups.

use std::rc::Rc;

use serde::Serialize;

use crate::subject::CardSubject;

use super::attr::Attr;
use super::control::{ClickEvent, OnAppClick};

/// An application-scoped control descriptor.
#[derive(Clone)]
pub struct AppControl {
    /// Button label.
    pub label: String,

    /// CSS class for dispatch and styling.
    pub class: String,

    /// Hover tooltip.
    pub tooltip: Attr<String>,

    /// Accessibility label.
    pub aria: Attr<String>,

    /// Icon class.
    pub icon: Attr<String>,

    /// Click handler.
    pub onclick: OnAppClick,
}

impl AppControl {
    /// Create an app control. Tooltip and aria default to the label.
    pub fn new(
        label: impl Into<String>,
        class: impl Into<String>,
        icon: impl Into<Attr<String>>,
        onclick: impl Fn(&ClickEvent) + 'static,
    ) -> Self {
        let label = label.into();
        Self {
            tooltip: Attr::fixed(label.clone()),
            aria: Attr::fixed(label.clone()),
            label,
            class: class.into(),
            icon: icon.into(),
            onclick: Rc::new(onclick),
        }
    }

    /// Set the tooltip (builder pattern).
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<Attr<String>>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Set the aria label (builder pattern).
    #[must_use]
    pub fn with_aria(mut self, aria: impl Into<Attr<String>>) -> Self {
        self.aria = aria.into();
        self
    }

    /// Resolve the computed fields against one subject. The handler
    /// stays behind; dispatch goes through the surface's render data.
    #[must_use]
    pub fn resolve(&self, subject: &CardSubject) -> ResolvedAppControl {
        ResolvedAppControl {
            label: self.label.clone(),
            class: self.class.clone(),
            tooltip: self.tooltip.resolve(subject),
            aria: self.aria.resolve(subject),
            icon: self.icon.resolve(subject),
        }
    }
}

impl std::fmt::Debug for AppControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppControl")
            .field("label", &self.label)
            .field("class", &self.class)
            .field("tooltip", &self.tooltip)
            .field("aria", &self.aria)
            .field("icon", &self.icon)
            .finish()
    }
}

/// An app control with every field concrete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedAppControl {
    /// Button label.
    pub label: String,
    /// CSS class.
    pub class: String,
    /// Hover tooltip.
    pub tooltip: String,
    /// Accessibility label.
    pub aria: String,
    /// Icon class.
    pub icon: String,
}
