//! Reactive per-view state. Created by the landing view, dropped with it.

use leptos::prelude::*;

use crate::motion::{Offset, PointerPosition};

/// Whether the pointer is over the download link.
///
/// Only the last transition matters: `enter` sets it, `leave` clears it.
#[derive(Clone, Copy, Debug)]
pub struct HoverState(RwSignal<bool>);

impl HoverState {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    pub fn enter(&self) {
        self.0.set(true);
    }

    pub fn leave(&self) {
        self.0.set(false);
    }

    /// Tracked read, for use inside views.
    pub fn is_hovering(&self) -> bool {
        self.0.get()
    }
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pointer position plus the two spring-smoothed layer offsets it drives.
#[derive(Clone, Copy, Debug)]
pub struct ParallaxState {
    pub pointer: RwSignal<PointerPosition>,
    pub background: RwSignal<Offset>,
    pub hero: RwSignal<Offset>,
}

impl ParallaxState {
    pub fn new() -> Self {
        Self {
            pointer: RwSignal::new(PointerPosition::default()),
            background: RwSignal::new(Offset::default()),
            hero: RwSignal::new(Offset::default()),
        }
    }

    /// Inline style for the sky layer.
    pub fn background_style(&self) -> String {
        self.background.get().transform()
    }

    /// Inline style for the hero icon wrapper.
    pub fn hero_style(&self) -> String {
        self.hero.get().transform()
    }
}

impl Default for ParallaxState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_round_trip_returns_to_idle() {
        let owner = Owner::new();
        owner.with(|| {
            let hover = HoverState::new();
            assert!(!hover.is_hovering());

            hover.enter();
            assert!(hover.is_hovering());

            hover.leave();
            assert!(!hover.is_hovering());
        });
    }

    #[test]
    fn hover_reflects_latest_transition() {
        let owner = Owner::new();
        owner.with(|| {
            let hover = HoverState::new();
            hover.enter();
            hover.enter();
            hover.leave();
            assert!(!hover.is_hovering());
            hover.leave();
            hover.enter();
            assert!(hover.is_hovering());
        });
    }

    #[test]
    fn parallax_starts_at_rest() {
        let owner = Owner::new();
        owner.with(|| {
            let state = ParallaxState::new();
            assert_eq!(state.pointer.get_untracked(), PointerPosition::default());
            assert_eq!(
                state.background_style(),
                "transform: translate3d(0.00px, 0.00px, 0);"
            );
        });
    }
}
