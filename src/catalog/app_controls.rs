//! Built-in application control descriptors.

use std::rc::Rc;

use crate::descriptors::{AppControl, OnAppClick};
use crate::surface::SurfaceKind;

fn noop() -> OnAppClick {
    Rc::new(|_| {})
}

/// Host-supplied handlers for the built-in app controls.
#[derive(Clone)]
pub struct AppActions {
    /// Shuffle the surface's cards.
    pub shuffle: OnAppClick,
    /// Draw a card into a hand.
    pub draw: OnAppClick,
    /// Deal cards from a deck.
    pub deal: OnAppClick,
    /// Recall every card to the surface.
    pub reset: OnAppClick,
}

impl Default for AppActions {
    fn default() -> Self {
        Self {
            shuffle: noop(),
            draw: noop(),
            deal: noop(),
            reset: noop(),
        }
    }
}

impl std::fmt::Debug for AppActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AppActions { .. }")
    }
}

/// Shuffle button.
#[must_use]
pub fn shuffle(handler: OnAppClick) -> AppControl {
    AppControl::new("Shuffle", "shuffle", "fas fa-random", move |e| handler(e))
}

/// Reset button: recall all cards.
#[must_use]
pub fn reset(handler: OnAppClick) -> AppControl {
    AppControl::new("Reset", "reset", "fas fa-undo", move |e| handler(e))
        .with_tooltip("Recall all cards")
}

/// Draw button - hands only.
#[must_use]
pub fn draw(handler: OnAppClick) -> AppControl {
    AppControl::new("Draw", "draw", "fas fa-plus", move |e| handler(e))
}

/// Deal button - decks only.
#[must_use]
pub fn deal(handler: OnAppClick) -> AppControl {
    AppControl::new("Deal", "deal", "fas fa-share-square", move |e| handler(e))
}

/// The default app-control sequence for a surface kind.
///
/// Every surface gets shuffle and reset; hands add draw, decks add
/// deal.
#[must_use]
pub fn defaults(actions: &AppActions, kind: SurfaceKind) -> Vec<AppControl> {
    let mut controls = vec![
        shuffle(actions.shuffle.clone()),
        reset(actions.reset.clone()),
    ];
    match kind {
        SurfaceKind::Hand => controls.push(draw(actions.draw.clone())),
        SurfaceKind::Deck => controls.push(deal(actions.deal.clone())),
        SurfaceKind::Pile => {}
    }
    controls
}
