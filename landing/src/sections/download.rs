use leptos::prelude::*;

use crate::content::{CTA_LABEL, DOWNLOAD_URL, INSTALL_HINT, LINK_REL, LINK_TARGET};
use crate::icons::{ICON_DOWNLOAD, ICON_SMARTPHONE, Icon};
use crate::state::HoverState;

/// The download call-to-action plus the install hint under it.
///
/// The link is a plain anchor: the browser opens the APK host in a new
/// context and nothing is tracked afterwards. Hover only drives visuals
/// (glow scale, bouncing icon); `href`, `target` and `rel` never change.
#[component]
pub fn DownloadSection(hover: HoverState) -> impl IntoView {
    view! {
        <div class="download">
            <a
                class="cta"
                href=DOWNLOAD_URL
                target=LINK_TARGET
                rel=LINK_REL
                on:mouseenter=move |_| hover.enter()
                on:mouseleave=move |_| hover.leave()
            >
                <div class="cta-glow" class:hovering=move || hover.is_hovering()></div>
                <span class="cta-button">
                    <span class="cta-icon" class:bouncing=move || hover.is_hovering()>
                        <Icon paths=ICON_DOWNLOAD size="20" />
                    </span>
                    {CTA_LABEL}
                </span>
            </a>

            <div class="install-hint">
                <Icon paths=ICON_SMARTPHONE size="14" />
                <span>{INSTALL_HINT}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(hover: HoverState) -> String {
        view! { <DownloadSection hover=hover /> }.to_html()
    }

    fn anchor(html: &str) -> &str {
        let start = html.find("<a ").expect("cta anchor");
        let end = start + html[start..].find('>').expect("anchor end");
        &html[start..end]
    }

    #[test]
    fn link_is_fixed_in_every_hover_state() {
        let owner = Owner::new();
        owner.with(|| {
            let hover = HoverState::new();
            let idle = render(hover);
            hover.enter();
            let hovering = render(hover);
            hover.leave();
            let left = render(hover);

            for html in [&idle, &hovering, &left] {
                let a = anchor(html);
                assert!(a.contains(&format!(r#"href="{DOWNLOAD_URL}""#)), "{a}");
                assert!(a.contains(r#"target="_blank""#), "{a}");
                assert!(a.contains(r#"rel="noopener noreferrer""#), "{a}");
            }
        });
    }

    #[test]
    fn hover_drives_glow_and_bounce() {
        let owner = Owner::new();
        owner.with(|| {
            let hover = HoverState::new();
            let idle = render(hover);
            assert!(!idle.contains("hovering"));
            assert!(!idle.contains("bouncing"));

            hover.enter();
            let hovering = render(hover);
            assert!(hovering.contains("hovering"));
            assert!(hovering.contains("bouncing"));
        });
    }

    #[test]
    fn shows_label_and_install_hint() {
        let owner = Owner::new();
        let html = owner.with(|| render(HoverState::new()));

        assert!(html.contains(CTA_LABEL));
        assert!(html.contains(INSTALL_HINT));
    }
}
