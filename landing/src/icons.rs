//! Inline SVG icons (Lucide, 24px grid, stroke based).

use leptos::prelude::*;

/// Renders a stroked icon from one or more path strings.
///
/// ```rust,ignore
/// view! { <Icon paths=ICON_CHECK_CIRCLE size="18" class="feature-check" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data, drawn in order
    paths: &'static [&'static str],
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {paths.iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

pub const ICON_DOWNLOAD: &[&str] = &[
    "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
    "M7 10l5 5 5-5",
    "M12 15V3",
];

pub const ICON_CHECK_CIRCLE: &[&str] = &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4 12 14.01l-3-3"];

pub const ICON_SMARTPHONE: &[&str] = &[
    "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
    "M12 18h.01",
];
