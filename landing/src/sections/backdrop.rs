use leptos::prelude::*;

use crate::content::{BACKGROUND, ISLAND};
use crate::decor::Decorations;
use crate::motion::Offset;

/// Everything behind the content: parallax sky plus ambient decorations.
#[component]
pub fn Backdrop(decor: Decorations, #[prop(into)] offset: Signal<Offset>) -> impl IntoView {
    let Decorations {
        clouds,
        islands,
        particles,
        rings,
    } = decor;

    view! {
        <div class="layer sky" style=move || offset.get().transform()>
            <img src=BACKGROUND.src alt=BACKGROUND.alt />
        </div>

        <div class="layer clouds">
            {clouds
                .into_iter()
                .map(|cloud| view! { <div class="cloud" style=cloud.style()></div> })
                .collect_view()}
        </div>

        <div class="layer islands">
            {islands
                .into_iter()
                .map(|island| {
                    view! {
                        <div class="island" style=island.style()>
                            <img
                                src=ISLAND.src
                                alt=ISLAND.alt
                                width=ISLAND.width.to_string()
                                height=ISLAND.height.to_string()
                                loading="lazy"
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <div class="layer particles">
            {particles
                .into_iter()
                .map(|particle| view! { <div class="particle" style=particle.style()></div> })
                .collect_view()}
        </div>

        <div class="layer rings">
            {rings
                .into_iter()
                .map(|ring| view! { <div class="ring" style=ring.style()></div> })
                .collect_view()}
        </div>
    }
}
