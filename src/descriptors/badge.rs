//! Badge descriptors - small text labels overlaid on a card.

use serde::Serialize;

use crate::subject::CardSubject;

use super::attr::{resolve_or, Attr};

/// A badge descriptor.
///
/// Badges are non-interactive labels drawn over the card image - the
/// card's name, its suit, its value. `tooltip` and `text` may be
/// computed per subject; `class` is always literal since it names the
/// DOM element for styling.
///
/// ## Example
///
/// ```
/// use card_overlays::descriptors::{Attr, Badge};
/// use card_overlays::subject::CardSubject;
///
/// let badge = Badge::new("card-name", "Name", Attr::computed(|c: &CardSubject| {
///     c.display_name().to_string()
/// }));
///
/// let card = CardSubject::new("c1", "Queen of Cups", "qc.webp");
/// let resolved = badge.resolve(&card);
/// assert_eq!(resolved.text, "Queen of Cups");
/// assert!(!resolved.hide);
/// ```
#[derive(Clone, Debug)]
pub struct Badge {
    /// CSS class for the badge element.
    pub class: String,

    /// Hover tooltip.
    pub tooltip: Attr<String>,

    /// Badge text.
    pub text: Attr<String>,

    /// Hide this badge for a given subject? Defaults to shown.
    pub hide: Option<Attr<bool>>,
}

impl Badge {
    /// Create a badge with the given class, tooltip, and text.
    pub fn new(
        class: impl Into<String>,
        tooltip: impl Into<Attr<String>>,
        text: impl Into<Attr<String>>,
    ) -> Self {
        Self {
            class: class.into(),
            tooltip: tooltip.into(),
            text: text.into(),
            hide: None,
        }
    }

    /// Set the hide condition (builder pattern).
    #[must_use]
    pub fn with_hide(mut self, hide: impl Into<Attr<bool>>) -> Self {
        self.hide = Some(hide.into());
        self
    }

    /// Resolve every field against one subject.
    #[must_use]
    pub fn resolve(&self, subject: &CardSubject) -> ResolvedBadge {
        ResolvedBadge {
            class: self.class.clone(),
            tooltip: self.tooltip.resolve(subject),
            text: self.text.resolve(subject),
            hide: resolve_or(self.hide.as_ref(), false, subject),
        }
    }
}

/// A badge with every field concrete for one subject.
///
/// Plain data, ready for template interpolation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedBadge {
    /// CSS class for the badge element.
    pub class: String,
    /// Hover tooltip.
    pub tooltip: String,
    /// Badge text.
    pub text: String,
    /// Whether presentation should skip this badge.
    pub hide: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> CardSubject {
        CardSubject::new("c1", "Ace", "ace.webp").with_attr("suit", "spades")
    }

    #[test]
    fn test_literal_badge_resolves() {
        let badge = Badge::new("x", "T", "ace of spades");
        let resolved = badge.resolve(&subject());
        assert_eq!(
            resolved,
            ResolvedBadge {
                class: "x".to_string(),
                tooltip: "T".to_string(),
                text: "ace of spades".to_string(),
                hide: false,
            }
        );
    }

    #[test]
    fn test_computed_text_reads_subject() {
        let badge = Badge::new(
            "x",
            "T",
            Attr::computed(|c: &CardSubject| c.name.clone()),
        );
        assert_eq!(badge.resolve(&subject()).text, "Ace");
    }

    #[test]
    fn test_hide_defaults_false() {
        let badge = Badge::new("x", "T", "t");
        assert!(!badge.resolve(&subject()).hide);
    }

    #[test]
    fn test_computed_hide() {
        let badge = Badge::new("x", "T", "t")
            .with_hide(Attr::computed(|c: &CardSubject| c.attr_text("suit").is_none()));
        assert!(!badge.resolve(&subject()).hide);

        let suitless = CardSubject::new("c2", "Blank", "b.webp");
        assert!(badge.resolve(&suitless).hide);
    }

    #[test]
    fn test_resolved_badge_serializes() {
        let resolved = Badge::new("card-suit", "Suit", "hearts").resolve(&subject());
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["class"], "card-suit");
        assert_eq!(json["hide"], false);
    }
}
