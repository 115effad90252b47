//! The landing view: backdrop, hero, description card and download link.

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::decor::Decorations;
use crate::dom::{AnimationLoop, WindowListener, track_pointer};
use crate::error::LandingError;
use crate::motion::{FrameClock, Layer, ParallaxLayer};
use crate::sections::{Backdrop, Hero, InfoColumn};
use crate::state::{HoverState, ParallaxState};

/// Browser resources held for as long as the view is mounted.
struct MotionGuards {
    _pointer: WindowListener,
    _frames: AnimationLoop,
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let decor = Decorations::sample(js_sys::Math::random);
    let parallax = ParallaxState::new();
    let hover = HoverState::new();
    use_parallax(parallax);

    view! {
        <main class="landing">
            <Backdrop decor=decor offset=parallax.background />
            <div class="content">
                <Hero offset=parallax.hero />
                <InfoColumn hover=hover />
            </div>
        </main>
    }
}

/// Drive `state` from the pointer for as long as the current owner lives.
///
/// The listener and frame loop are released in `on_cleanup`; after that
/// `state` is never written again. Without a `window` the springs stay at
/// rest and a warning is logged.
pub fn use_parallax(state: ParallaxState) {
    match start_parallax(state) {
        Ok(guards) => {
            let guards = SendWrapper::new(guards);
            on_cleanup(move || {
                drop(guards);
                log::debug!("parallax released");
            });
        }
        Err(err) => log::warn!("parallax disabled: {err}"),
    }
}

/// Pointer listener feeding the springs, and a frame loop stepping them.
fn start_parallax(state: ParallaxState) -> Result<MotionGuards, LandingError> {
    let pointer = track_pointer(move |position| state.pointer.set(position))?;

    let mut background = ParallaxLayer::new(Layer::Background);
    let mut hero = ParallaxLayer::new(Layer::Hero);
    let mut clock = FrameClock::default();
    let frames = AnimationLoop::start(move |timestamp| {
        let dt = clock.advance(timestamp);
        let Some(position) = state.pointer.try_get_untracked() else {
            return;
        };
        if !background.is_settled(position) {
            state.background.set(background.step(position, dt));
        }
        if !hero.is_settled(position) {
            state.hero.set(hero.step(position, dt));
        }
    })?;

    Ok(MotionGuards {
        _pointer: pointer,
        _frames: frames,
    })
}
