//! Document shell: metadata, font and the global stylesheet.
//!
//! Rendered once per page load around the landing view. Requires
//! `provide_meta_context()` higher up (see [`crate::App`]).

use leptos::prelude::*;
use leptos_meta::{Html, Link, Meta, Style, Title};

use crate::content::{
    FONT_STYLESHEET, HERO_ICON, SITE_DESCRIPTION, SITE_LANG, SITE_TITLE, StructuredData,
};
use crate::styles::LANDING_CSS;

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <Html attr:lang=SITE_LANG />
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=SITE_TITLE />
        <Meta property="og:description" content=SITE_DESCRIPTION />
        <Meta property="og:image" content=HERO_ICON.src />

        <Link rel="preconnect" href="https://fonts.googleapis.com" />
        <Link rel="stylesheet" href=FONT_STYLESHEET />
        <Style>{LANDING_CSS}</Style>

        <StructuredDataScript />

        {children()}
    }
}

/// JSON-LD record for search engines; omitted if serialization fails.
#[component]
fn StructuredDataScript() -> impl IntoView {
    match StructuredData::for_site().to_json() {
        Ok(json) => {
            view! { <script type="application/ld+json" inner_html=json></script> }.into_any()
        }
        Err(err) => {
            log::warn!("skipping structured data: {err}");
            ().into_any()
        }
    }
}
