//! # bita-landing
//!
//! Landing page for BITA, a Tagalog terminology app for beginners.
//! Client-side rendered with Leptos 0.8 and served as static files by
//! Trunk.
//!
//! ## Architecture
//!
//! - [`shell`] - document metadata, font, global stylesheet
//! - [`page`] - the landing view and its runtime behavior
//! - [`sections`] - presentational pieces of the view
//! - [`motion`] - pointer normalization and spring parallax (pure math)
//! - [`decor`] - per-mount sampling of ambient decorations
//! - [`dom`] - window listener and animation frame guards
//! - [`state`] - reactive hover and parallax state
//! - [`content`] - static copy, links and assets
//!
//! ---
//!
//! Developed by the BITA Team (c)2025

// The ssr renderer used by the native tests nests view types deeply enough
// to exceed the default query depth.
#![recursion_limit = "256"]
pub mod content;
pub mod decor;
pub mod dom;
pub mod error;
pub mod icons;
pub mod motion;
pub mod page;
pub mod sections;
pub mod shell;
pub mod state;
pub mod styles;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;

pub use error::LandingError;
use page::LandingPage;
use shell::Shell;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Shell>
            <LandingPage />
        </Shell>
    }
}

/// Install the panic hook and the console logger. Safe to call twice.
pub fn init_browser_runtime() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Err only when a logger is already installed.
    let _ = console_log::init_with_level(level);
}
