use leptos::prelude::*;

use crate::content::HERO_ICON;
use crate::motion::Offset;

/// The floating BITA icon with its pulsing glow.
///
/// Three nested transforms: pointer parallax (inline, per frame), vertical
/// float and a slow rock (both CSS).
#[component]
pub fn Hero(#[prop(into)] offset: Signal<Offset>) -> impl IntoView {
    view! {
        <div class="hero-column">
            <div class="hero-parallax" style=move || offset.get().transform()>
                <div class="hero-float">
                    <div class="hero-rock">
                        <img
                            class="hero-icon"
                            src=HERO_ICON.src
                            alt=HERO_ICON.alt
                            width=HERO_ICON.width.to_string()
                            height=HERO_ICON.height.to_string()
                        />
                        <div class="hero-glow"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_icon_at_requested_size() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let offset = RwSignal::new(Offset { x: 7.5, y: -7.5 });
            view! { <Hero offset=offset /> }.to_html()
        });

        assert!(html.contains(r#"src="/images/bitaicon.png""#));
        assert!(html.contains(r#"width="400""#));
        assert!(html.contains(r#"height="400""#));
        assert!(html.contains("translate3d(7.50px, -7.50px, 0)"));
        assert!(html.contains("hero-glow"));
    }
}
