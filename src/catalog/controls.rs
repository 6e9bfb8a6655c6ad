//! Built-in card control descriptors.
//!
//! Click behavior belongs to the host layer, so every constructor
//! takes its handler from a [`CardActions`] bundle. The catalog owns
//! everything else: classes, icons, tooltips, aria labels, and the
//! disabled predicates.

use std::rc::Rc;

use crate::descriptors::{Attr, Control, OnCardClick};
use crate::subject::CardSubject;

fn noop() -> OnCardClick {
    Rc::new(|_, _| {})
}

/// Host-supplied handlers for the built-in card controls.
///
/// `Default` wires every action to a no-op, which keeps the dispatch
/// table populated (classes stay reachable) while doing nothing.
#[derive(Clone)]
pub struct CardActions {
    /// Advance to the next face.
    pub next_face: OnCardClick,
    /// Go back to the previous face.
    pub prev_face: OnCardClick,
    /// Flip between face and back.
    pub flip: OnCardClick,
    /// Open the card's detail view.
    pub view: OnCardClick,
    /// Send the card to its discard pile.
    pub discard: OnCardClick,
    /// Play the card from a hand.
    pub play: OnCardClick,
}

impl Default for CardActions {
    fn default() -> Self {
        Self {
            next_face: noop(),
            prev_face: noop(),
            flip: noop(),
            view: noop(),
            discard: noop(),
            play: noop(),
        }
    }
}

impl std::fmt::Debug for CardActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CardActions { .. }")
    }
}

/// Next-face leaf, disabled when the subject has no later face.
#[must_use]
pub fn next_face(handler: OnCardClick) -> Control {
    let mut control = Control::new("next-face")
        .with_tooltip("Next Face")
        .with_aria("Show next face")
        .with_icon("fas fa-chevron-right")
        .with_disabled(Attr::computed(|c: &CardSubject| !c.has_next_face()));
    control.onclick = Some(handler);
    control
}

/// Previous-face leaf, disabled when the subject has no earlier face.
#[must_use]
pub fn prev_face(handler: OnCardClick) -> Control {
    let mut control = Control::new("prev-face")
        .with_tooltip("Previous Face")
        .with_aria("Show previous face")
        .with_icon("fas fa-chevron-left")
        .with_disabled(Attr::computed(|c: &CardSubject| !c.has_previous_face()));
    control.onclick = Some(handler);
    control
}

/// Face navigation group: previous then next under a shared wrapper.
#[must_use]
pub fn face_navigation(actions: &CardActions) -> Control {
    Control::group(
        "faces",
        vec![
            prev_face(actions.prev_face.clone()),
            next_face(actions.next_face.clone()),
        ],
    )
}

/// Flip leaf.
#[must_use]
pub fn flip(handler: OnCardClick) -> Control {
    let mut control = Control::new("flip")
        .with_tooltip("Flip")
        .with_aria("Flip card")
        .with_icon("fas fa-sync-alt");
    control.onclick = Some(handler);
    control
}

/// Detail-view leaf.
#[must_use]
pub fn view(handler: OnCardClick) -> Control {
    let mut control = Control::new("view")
        .with_tooltip("View")
        .with_aria("View card")
        .with_icon("fas fa-eye");
    control.onclick = Some(handler);
    control
}

/// Discard leaf.
#[must_use]
pub fn discard(handler: OnCardClick) -> Control {
    let mut control = Control::new("discard")
        .with_tooltip("Discard")
        .with_aria("Discard card")
        .with_icon("fas fa-trash");
    control.onclick = Some(handler);
    control
}

/// Play leaf - added only for hand surfaces.
#[must_use]
pub fn play(handler: OnCardClick) -> Control {
    let mut control = Control::new("play")
        .with_tooltip("Play")
        .with_aria("Play card")
        .with_icon("fas fa-play");
    control.onclick = Some(handler);
    control
}

/// The default control sequence for pile-like surfaces.
#[must_use]
pub fn defaults(actions: &CardActions) -> Vec<Control> {
    vec![
        face_navigation(actions),
        flip(actions.flip.clone()),
        view(actions.view.clone()),
        discard(actions.discard.clone()),
    ]
}

/// The default control sequence for hands: pile defaults plus play.
#[must_use]
pub fn hand_defaults(actions: &CardActions) -> Vec<Control> {
    let mut controls = defaults(actions);
    controls.push(play(actions.play.clone()));
    controls
}
