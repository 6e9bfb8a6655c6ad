//! Built-in badge descriptors.

use crate::descriptors::{Attr, Badge};
use crate::subject::CardSubject;

/// Name badge: the subject's face-aware display name.
#[must_use]
pub fn name() -> Badge {
    Badge::new(
        "card-name",
        "Name",
        Attr::computed(|c: &CardSubject| c.display_name().to_string()),
    )
}

/// Suit badge: the `suit` attribute, hidden when absent.
#[must_use]
pub fn suit() -> Badge {
    Badge::new(
        "card-suit",
        "Suit",
        Attr::computed(|c: &CardSubject| {
            c.attr_text("suit").unwrap_or_default().to_string()
        }),
    )
    .with_hide(Attr::computed(|c: &CardSubject| c.attr_text("suit").is_none()))
}

/// Value badge: the `value` attribute, hidden when absent.
#[must_use]
pub fn value() -> Badge {
    Badge::new(
        "card-value",
        "Value",
        Attr::computed(|c: &CardSubject| {
            c.attr_int("value").map(|v| v.to_string()).unwrap_or_default()
        }),
    )
    .with_hide(Attr::computed(|c: &CardSubject| c.attr_int("value").is_none()))
}

/// Drawn badge: a checkmark shown only after the card leaves its pile.
#[must_use]
pub fn drawn() -> Badge {
    Badge::new("card-drawn", "Drawn", "\u{2713}")
        .with_hide(Attr::computed(|c: &CardSubject| !c.drawn))
}

/// The default badge sequence every surface starts from.
#[must_use]
pub fn defaults() -> Vec<Badge> {
    vec![name(), suit(), value()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_badge_tracks_shown_face() {
        let card = CardSubject::new("c1", "Coin", "back.webp")
            .with_face(crate::subject::CardFace::new("Heads", "heads.webp"))
            .showing_face(0);
        assert_eq!(name().resolve(&card).text, "Heads");
    }

    #[test]
    fn test_suit_badge_hides_without_suit() {
        let plain = CardSubject::new("c1", "Blank", "b.webp");
        assert!(suit().resolve(&plain).hide);

        let suited = plain.with_attr("suit", "cups");
        let resolved = suit().resolve(&suited);
        assert!(!resolved.hide);
        assert_eq!(resolved.text, "cups");
    }

    #[test]
    fn test_value_badge_formats_int() {
        let card = CardSubject::new("c1", "Ten", "t.webp").with_attr("value", 10i32);
        let resolved = value().resolve(&card);
        assert_eq!(resolved.text, "10");
        assert!(!resolved.hide);
    }

    #[test]
    fn test_drawn_badge() {
        let in_pile = CardSubject::new("c1", "Ace", "a.webp");
        assert!(drawn().resolve(&in_pile).hide);
        assert!(!drawn().resolve(&in_pile.with_drawn(true)).hide);
    }

    #[test]
    fn test_default_badge_classes_are_unique() {
        let badges = defaults();
        let mut classes: Vec<_> = badges.iter().map(|b| b.class.clone()).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), badges.len());
    }
}
