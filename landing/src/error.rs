//! Errors from the handful of DOM calls the page owns.
//!
//! None of these are fatal: callers log them and the page degrades to a
//! static layout (no parallax).

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum LandingError {
    #[error("no global `window` available")]
    NoWindow,

    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },

    #[error("failed to request animation frame: {0}")]
    AnimationFrame(String),
}

impl LandingError {
    pub(crate) fn listener(event: &'static str, err: &JsValue) -> Self {
        Self::Listener {
            event,
            reason: describe(err),
        }
    }

    pub(crate) fn animation_frame(err: &JsValue) -> Self {
        Self::AnimationFrame(describe(err))
    }
}

/// Best-effort text for a thrown JS value.
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_call() {
        let err = LandingError::Listener {
            event: "mousemove",
            reason: "blocked".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to register `mousemove` listener: blocked"
        );
        assert_eq!(
            LandingError::NoWindow.to_string(),
            "no global `window` available"
        );
    }
}
