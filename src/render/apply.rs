//! Descriptor application - resolving descriptor sequences per card.
//!
//! The descriptor list for a render cycle is decided once (defaults
//! plus hook mutations); these functions then re-evaluate it against
//! every card in the rendered collection. Pure functions of
//! (subject, list): no side effects, safe to call repeatedly.

use crate::descriptors::{
    AppControl, Badge, Control, Marker, ResolvedAppControl, ResolvedBadge, ResolvedControl,
    ResolvedMarker,
};
use crate::subject::CardSubject;

/// Resolve a badge sequence against one subject.
#[must_use]
pub fn apply_badges(subject: &CardSubject, badges: &[Badge]) -> Vec<ResolvedBadge> {
    badges.iter().map(|b| b.resolve(subject)).collect()
}

/// Resolve a control sequence against one subject.
///
/// Recurses through groups to arbitrary depth; click handlers do not
/// survive into resolved records.
#[must_use]
pub fn apply_controls(subject: &CardSubject, controls: &[Control]) -> Vec<ResolvedControl> {
    controls.iter().map(|c| c.resolve(subject)).collect()
}

/// Resolve a marker sequence against one subject.
#[must_use]
pub fn apply_markers(subject: &CardSubject, markers: &[Marker]) -> Vec<ResolvedMarker> {
    markers.iter().map(|m| m.resolve(subject)).collect()
}

/// Resolve an app-control sequence against one subject.
#[must_use]
pub fn apply_app_controls(
    subject: &CardSubject,
    app_controls: &[AppControl],
) -> Vec<ResolvedAppControl> {
    app_controls.iter().map(|c| c.resolve(subject)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::Attr;
    use proptest::prelude::*;

    #[test]
    fn test_apply_badges() {
        let badges = vec![Badge::new(
            "x",
            "T",
            Attr::computed(|c: &CardSubject| c.name.clone()),
        )];
        let card = CardSubject::new("c1", "Ace", "a.webp");

        let resolved = apply_badges(&card, &badges);
        assert_eq!(resolved.len(), 1);
        assert_eq!(
            resolved[0],
            ResolvedBadge {
                class: "x".to_string(),
                tooltip: "T".to_string(),
                text: "Ace".to_string(),
                hide: false,
            }
        );
    }

    #[test]
    fn test_apply_controls_preserves_structure() {
        let controls = vec![
            Control::new("flip"),
            Control::group("faces", vec![Control::new("next-face")]),
        ];
        let card = CardSubject::new("c1", "Ace", "a.webp");

        let resolved = apply_controls(&card, &controls);
        assert_eq!(resolved.len(), 2);
        assert!(resolved[0].controls.is_empty());
        assert_eq!(resolved[1].controls.len(), 1);
        assert_eq!(resolved[1].controls[0].class, "next-face");
    }

    #[test]
    fn test_apply_controls_idempotent() {
        let controls = vec![Control::group(
            "faces",
            vec![Control::new("next-face")
                .with_disabled(Attr::computed(|c: &CardSubject| !c.has_next_face()))],
        )];
        let card = CardSubject::new("c1", "Ace", "a.webp");

        let first = apply_controls(&card, &controls);
        let second = apply_controls(&card, &controls);
        assert_eq!(first, second);
    }

    #[test]
    fn test_apply_empty_lists() {
        let card = CardSubject::new("c1", "Ace", "a.webp");
        assert!(apply_badges(&card, &[]).is_empty());
        assert!(apply_controls(&card, &[]).is_empty());
        assert!(apply_markers(&card, &[]).is_empty());
        assert!(apply_app_controls(&card, &[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_apply_badges_idempotent(name in ".*", suit in ".*") {
            let card = CardSubject::new("c1", name, "img.webp").with_attr("suit", suit);
            let badges = vec![
                Badge::new("n", "Name", Attr::computed(|c: &CardSubject| c.name.clone())),
                Badge::new("s", "Suit", Attr::computed(|c: &CardSubject| {
                    c.attr_text("suit").unwrap_or_default().to_string()
                })),
            ];
            prop_assert_eq!(apply_badges(&card, &badges), apply_badges(&card, &badges));
        }
    }
}
