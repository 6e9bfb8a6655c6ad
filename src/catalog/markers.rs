//! Built-in marker descriptors.

use crate::descriptors::{Attr, Marker, DEFAULT_MARKER_COLOR};
use crate::subject::CardSubject;

/// Color marker: a dot shown when the host sets a `marker.color`
/// attribute on the subject. Tooltip comes from `marker.tooltip` when
/// present.
#[must_use]
pub fn color_marker() -> Marker {
    Marker::new(
        "color-marker",
        Attr::computed(|c: &CardSubject| {
            c.attr_text("marker.tooltip").unwrap_or("Marker").to_string()
        }),
    )
    .with_color(Attr::computed(|c: &CardSubject| {
        c.attr_text("marker.color")
            .unwrap_or(DEFAULT_MARKER_COLOR)
            .to_string()
    }))
    .with_show(Attr::computed(|c: &CardSubject| {
        c.attr_text("marker.color").is_some()
    }))
}

/// The default marker sequence.
#[must_use]
pub fn defaults() -> Vec<Marker> {
    vec![color_marker()]
}
