use leptos::prelude::*;

use super::DownloadSection;
use crate::content::{FEATURES, INTRO, SUBTITLE};
use crate::icons::{ICON_CHECK_CIRCLE, Icon};
use crate::state::HoverState;

/// Right-hand column: subtitle, then the glass card with intro, features
/// and the download link.
#[component]
pub fn InfoColumn(hover: HoverState) -> impl IntoView {
    view! {
        <div class="info-column">
            <div class="subtitle-wrap">
                <p class="subtitle">{SUBTITLE}</p>
                <div class="subtitle-underline"></div>
            </div>

            <div class="card">
                <p class="card-intro">{INTRO}</p>
                <FeatureList features=&FEATURES />
                <DownloadSection hover=hover />
            </div>
        </div>
    }
}

/// Feature bullets, each behind a check mark, entering one after another.
#[component]
pub fn FeatureList(features: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="features">
            {features
                .iter()
                .enumerate()
                .map(|(index, feature)| {
                    let delay = format!("animation-delay: {:.1}s;", entrance_delay(index));
                    view! {
                        <li class="feature" style=delay>
                            <Icon paths=ICON_CHECK_CIRCLE size="18" class="feature-check" />
                            <p class="feature-text">{*feature}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Seconds before feature `index` slides in.
fn entrance_delay(index: usize) -> f64 {
    0.8 + index as f64 * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn features_render_in_order_with_check_marks() {
        let html = view! { <FeatureList features=&FEATURES /> }.to_html();

        let items: Vec<&str> = html.split("<li").skip(1).collect();
        assert_eq!(items.len(), 3);
        for (item, feature) in items.iter().zip(FEATURES) {
            let check = item.find("feature-check").expect("check mark");
            let text = item.find(feature).expect("feature text");
            assert!(check < text, "check mark must precede {feature:?}");
        }

        let positions: Vec<usize> = FEATURES
            .iter()
            .map(|f| html.find(f).expect("feature present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn features_enter_staggered() {
        let delays: Vec<f64> = (0..3).map(entrance_delay).collect();
        assert!((delays[0] - 0.8).abs() < 1e-9);
        assert!((delays[2] - 1.0).abs() < 1e-9);

        let html = view! { <FeatureList features=&FEATURES /> }.to_html();
        assert!(html.contains("animation-delay: 0.9s;"));
    }

    #[test]
    fn card_holds_intro_features_and_download() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <InfoColumn hover=HoverState::new() /> }.to_html());

        assert!(html.contains(SUBTITLE));
        assert!(html.contains("Maligayang pagdating sa BITA!"));
        assert_eq!(html.matches("<li").count(), 3);
        assert!(html.contains("Mag-download Ngayon"));
    }
}
