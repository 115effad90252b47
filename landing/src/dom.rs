//! Scoped browser resources: window listeners and the animation frame loop.
//!
//! Both are guards. Registration happens in the constructor, removal in
//! `Drop`, so whoever owns the guard owns the registration.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, MouseEvent, Window};

use crate::error::LandingError;
use crate::motion::PointerPosition;

fn window() -> Result<Window, LandingError> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

/// An event listener on `window`, removed when dropped.
pub struct WindowListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn attach<F>(event: &'static str, handler: F) -> Result<Self, LandingError>
    where
        F: FnMut(Event) + 'static,
    {
        let target: EventTarget = window()?.into();
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| LandingError::listener(event, &err))?;
        log::debug!("attached window `{event}` listener");
        Ok(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        log::debug!("removed window `{}` listener", self.event);
    }
}

/// Listen to `mousemove` and report viewport-normalized positions.
pub fn track_pointer<F>(mut on_move: F) -> Result<WindowListener, LandingError>
where
    F: FnMut(PointerPosition) + 'static,
{
    let window = window()?;
    WindowListener::attach("mousemove", move |event: Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        on_move(PointerPosition::from_client(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            width,
            height,
        ));
    })
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A self-rescheduling `requestAnimationFrame` loop, cancelled when dropped.
pub struct AnimationLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    frame: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationLoop {
    /// Start calling `tick` with the frame timestamp (ms) once per frame.
    pub fn start<F>(mut tick: F) -> Result<Self, LandingError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = window()?;
        let pending = Rc::new(Cell::new(None));
        let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let next = {
            let window = window.clone();
            let pending = pending.clone();
            let frame = frame.clone();
            move |timestamp: f64| {
                pending.set(None);
                tick(timestamp);
                // cleared on drop, possibly from inside `tick`
                if let Some(callback) = frame.borrow().as_ref() {
                    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(err) => {
                            log::warn!("{}", LandingError::animation_frame(&err));
                        }
                    }
                }
            }
        };
        let callback: FrameCallback = Closure::wrap(Box::new(next) as Box<dyn FnMut(f64)>);
        let requested = window.request_animation_frame(callback.as_ref().unchecked_ref());
        *frame.borrow_mut() = Some(callback);
        match requested {
            Ok(id) => pending.set(Some(id)),
            Err(err) => {
                frame.borrow_mut().take();
                return Err(LandingError::animation_frame(&err));
            }
        }
        log::debug!("animation loop started");

        Ok(Self {
            window,
            pending,
            frame,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the closure -> Rc -> closure cycle.
        self.frame.borrow_mut().take();
        log::debug!("animation loop stopped");
    }
}
