//! Render-data assembly - the once-per-render extension point.
//!
//! Assembly decides the *shape* of the descriptor sequences for one
//! render cycle: catalog defaults per surface kind, then hook
//! listeners mutate the sequences in place, then the finalized
//! control tree flattens into the dispatch table. Per-card resolution
//! happens afterwards, once per card, via [`RenderData::card_view`] -
//! the same descriptor list must be re-evaluated against every
//! distinct subject in the collection.

use serde::Serialize;

use crate::catalog::{self, AppActions, CardActions};
use crate::descriptors::{
    AppControl, Badge, ClickEvent, Control, Marker, OnAppClick, ResolvedAppControl,
    ResolvedBadge, ResolvedControl, ResolvedMarker,
};
use crate::hooks::HookRegistry;
use crate::subject::CardSubject;
use crate::surface::{RenderContext, SurfaceConfig, SurfaceKind};

use super::apply::{apply_app_controls, apply_badges, apply_controls, apply_markers};
use super::dispatch::DispatchTable;

/// The finalized descriptor sequences and dispatch table for one
/// render cycle.
///
/// Everything here is rebuilt fresh by [`RenderData::assemble`] each
/// cycle; the previous cycle's data is simply dropped.
#[derive(Clone, Debug)]
pub struct RenderData {
    /// Context the hook listeners saw.
    pub context: RenderContext,

    /// Badge sequence, pre-resolution.
    pub badges: Vec<Badge>,

    /// Control sequence, pre-resolution.
    pub controls: Vec<Control>,

    /// App-control sequence, pre-resolution.
    pub app_controls: Vec<AppControl>,

    /// Marker sequence. Markers are not published to the hook.
    pub markers: Vec<Marker>,

    dispatch: DispatchTable,
}

impl RenderData {
    /// Assemble the render data for one cycle.
    ///
    /// 1. Pull catalog defaults for the surface kind (hands get the
    ///    play control, hands/decks get extra app controls).
    /// 2. Call the surface's hook listeners with the badge, control,
    ///    and app-control sequences by mutable reference.
    /// 3. Flatten the finalized control sequence into the dispatch
    ///    table retained for the rest of the cycle.
    #[must_use]
    pub fn assemble(
        surface: &SurfaceConfig,
        card_actions: &CardActions,
        app_actions: &AppActions,
        hooks: &HookRegistry,
    ) -> Self {
        let mut badges = catalog::badges::defaults();
        let mut controls = match surface.kind {
            SurfaceKind::Hand => catalog::controls::hand_defaults(card_actions),
            SurfaceKind::Pile | SurfaceKind::Deck => catalog::controls::defaults(card_actions),
        };
        let mut app_controls = catalog::app_controls::defaults(app_actions, surface.kind);
        let markers = catalog::markers::defaults();

        let context = RenderContext::for_surface(surface);
        hooks.call(
            &surface.name,
            &context,
            &mut badges,
            &mut controls,
            &mut app_controls,
        );

        let dispatch = DispatchTable::from_controls(&controls);
        log::debug!(
            "assembled '{}': {} badges, {} controls, {} app controls, {} dispatch classes",
            surface.name,
            badges.len(),
            controls.len(),
            app_controls.len(),
            dispatch.len()
        );

        Self {
            context,
            badges,
            controls,
            app_controls,
            markers,
            dispatch,
        }
    }

    /// The dispatch table for this cycle.
    #[must_use]
    pub fn dispatch(&self) -> &DispatchTable {
        &self.dispatch
    }

    /// Route a card click to its handler. Returns true when one ran.
    pub fn handle_click(&self, event: &ClickEvent, subject: &CardSubject) -> bool {
        self.dispatch.dispatch(event, subject)
    }

    /// Look up an app-control handler by class.
    ///
    /// The app-control sequence is flat and short; a linear scan
    /// replaces a second dispatch table.
    #[must_use]
    pub fn app_handler(&self, class: &str) -> Option<&OnAppClick> {
        self.app_controls
            .iter()
            .rev()
            .find(|c| c.class == class)
            .map(|c| &c.onclick)
    }

    /// Resolve the card-scoped descriptor sequences for one subject.
    #[must_use]
    pub fn card_view(&self, subject: &CardSubject) -> CardView {
        CardView {
            badges: apply_badges(subject, &self.badges),
            controls: apply_controls(subject, &self.controls),
            markers: apply_markers(subject, &self.markers),
        }
    }

    /// Resolve the app-control sequence for one subject.
    #[must_use]
    pub fn app_view(&self, subject: &CardSubject) -> Vec<ResolvedAppControl> {
        apply_app_controls(subject, &self.app_controls)
    }
}

/// Per-card resolved render data, ready for template interpolation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Resolved badges, in sequence order.
    pub badges: Vec<ResolvedBadge>,
    /// Resolved controls, structure preserved.
    pub controls: Vec<ResolvedControl>,
    /// Resolved markers.
    pub markers: Vec<ResolvedMarker>,
}
