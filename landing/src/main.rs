// BITA Landing Page — Leptos 0.8 Edition
// Developed by the BITA Team (c)2025

use bita_landing::{App, init_browser_runtime};
use leptos::prelude::*;

fn main() {
    init_browser_runtime();
    log::info!("mounting landing page");
    leptos::mount::mount_to_body(|| view! { <App/> });
}
