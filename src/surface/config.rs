//! Surface configuration.
//!
//! A surface is one rendered card container: a player's hand, a
//! face-up pile, or a deck. The kind decides which catalog defaults
//! the surface starts from; the name namespaces its extension hook.

use serde::{Deserialize, Serialize};

/// The flavor of a rendered card container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// A player's hand: cards fanned out, playable.
    Hand,
    /// A generic pile of cards.
    Pile,
    /// A source deck cards are dealt from.
    Deck,
}

impl std::fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SurfaceKind::Hand => "hand",
            SurfaceKind::Pile => "pile",
            SurfaceKind::Deck => "deck",
        };
        f.write_str(s)
    }
}

/// Configuration for one surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Hook namespace and display identity for this surface.
    pub name: String,

    /// Which catalog defaults the surface starts from.
    pub kind: SurfaceKind,
}

impl SurfaceConfig {
    /// Create a surface config.
    pub fn new(name: impl Into<String>, kind: SurfaceKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Convenience constructor for a hand surface.
    pub fn hand(name: impl Into<String>) -> Self {
        Self::new(name, SurfaceKind::Hand)
    }

    /// Convenience constructor for a pile surface.
    pub fn pile(name: impl Into<String>) -> Self {
        Self::new(name, SurfaceKind::Pile)
    }

    /// Convenience constructor for a deck surface.
    pub fn deck(name: impl Into<String>) -> Self {
        Self::new(name, SurfaceKind::Deck)
    }
}

/// Context handed to hook listeners for one render cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    /// The surface's hook namespace.
    pub surface: String,

    /// The surface's kind.
    pub kind: SurfaceKind,
}

impl RenderContext {
    /// Build the context for a surface.
    #[must_use]
    pub fn for_surface(config: &SurfaceConfig) -> Self {
        Self {
            surface: config.name.clone(),
            kind: config.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(SurfaceKind::Hand.to_string(), "hand");
        assert_eq!(SurfaceKind::Deck.to_string(), "deck");
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(SurfaceConfig::hand("player-hand").kind, SurfaceKind::Hand);
        assert_eq!(SurfaceConfig::pile("discard").kind, SurfaceKind::Pile);
        assert_eq!(SurfaceConfig::deck("main-deck").kind, SurfaceKind::Deck);
    }

    #[test]
    fn test_render_context() {
        let config = SurfaceConfig::hand("player-hand");
        let ctx = RenderContext::for_surface(&config);
        assert_eq!(ctx.surface, "player-hand");
        assert_eq!(ctx.kind, SurfaceKind::Hand);
    }
}
