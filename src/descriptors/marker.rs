//! Marker descriptors - small colored status indicators on a card.

use serde::Serialize;

use crate::subject::CardSubject;

use super::attr::{resolve_or, Attr};

/// Default marker icon: a solid dot.
pub const DEFAULT_MARKER_ICON: &str = "fas fa-circle";

/// Default marker color: white.
pub const DEFAULT_MARKER_COLOR: &str = "#ffffff";

/// A marker descriptor.
///
/// Markers are independent of badges and controls: a colored dot (or
/// other glyph) signalling per-card status. Hidden by default; a
/// marker earns its place by computing `show` from the subject.
#[derive(Clone, Debug)]
pub struct Marker {
    /// CSS class for the marker element.
    pub class: String,

    /// Hover tooltip.
    pub tooltip: Attr<String>,

    /// Icon class. Defaults to [`DEFAULT_MARKER_ICON`].
    pub icon: Option<Attr<String>>,

    /// CSS color. Defaults to [`DEFAULT_MARKER_COLOR`].
    pub color: Option<Attr<String>>,

    /// Show this marker for a given subject? Defaults to hidden.
    pub show: Option<Attr<bool>>,
}

impl Marker {
    /// Create a marker with the given class and tooltip.
    pub fn new(class: impl Into<String>, tooltip: impl Into<Attr<String>>) -> Self {
        Self {
            class: class.into(),
            tooltip: tooltip.into(),
            icon: None,
            color: None,
            show: None,
        }
    }

    /// Set the icon (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<Attr<String>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<Attr<String>>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the show condition (builder pattern).
    #[must_use]
    pub fn with_show(mut self, show: impl Into<Attr<bool>>) -> Self {
        self.show = Some(show.into());
        self
    }

    /// Resolve every field against one subject.
    #[must_use]
    pub fn resolve(&self, subject: &CardSubject) -> ResolvedMarker {
        ResolvedMarker {
            class: self.class.clone(),
            tooltip: self.tooltip.resolve(subject),
            icon: resolve_or(self.icon.as_ref(), DEFAULT_MARKER_ICON.to_string(), subject),
            color: resolve_or(self.color.as_ref(), DEFAULT_MARKER_COLOR.to_string(), subject),
            show: resolve_or(self.show.as_ref(), false, subject),
        }
    }
}

/// A marker with every field concrete for one subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedMarker {
    /// CSS class for the marker element.
    pub class: String,
    /// Hover tooltip.
    pub tooltip: String,
    /// Icon class.
    pub icon: String,
    /// CSS color.
    pub color: String,
    /// Whether presentation should draw this marker.
    pub show: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> CardSubject {
        CardSubject::new("c1", "Ace", "ace.webp")
    }

    #[test]
    fn test_marker_defaults() {
        let marker = Marker::new("status", "Status");
        let resolved = marker.resolve(&subject());
        assert_eq!(resolved.icon, DEFAULT_MARKER_ICON);
        assert_eq!(resolved.color, DEFAULT_MARKER_COLOR);
        assert!(!resolved.show);
    }

    #[test]
    fn test_marker_computed_color_and_show() {
        let marker = Marker::new("status", "Status")
            .with_color(Attr::computed(|c: &CardSubject| {
                c.attr_text("marker.color").unwrap_or("#ffffff").to_string()
            }))
            .with_show(Attr::computed(|c: &CardSubject| {
                c.attr("marker.color").is_some()
            }));

        let plain = marker.resolve(&subject());
        assert!(!plain.show);
        assert_eq!(plain.color, "#ffffff");

        let mut bag = crate::subject::Attributes::default();
        bag.insert("color".into(), "#336699".into());
        let flagged = subject().with_attr("marker", bag);
        let resolved = marker.resolve(&flagged);
        assert!(resolved.show);
        assert_eq!(resolved.color, "#336699");
    }

    #[test]
    fn test_marker_custom_icon() {
        let marker = Marker::new("status", "Status").with_icon("fas fa-skull");
        assert_eq!(marker.resolve(&subject()).icon, "fas fa-skull");
    }
}
