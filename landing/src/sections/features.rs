use leptos::prelude::*;

use crate::content::{FEATURES, Feature};
use crate::icons::Icon;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section section-tinted">
            <div class="container">
                <div class="section-header fade-in">
                    <div class="eyebrow">"Key Features"</div>
                    <h2 class="section-title">"Everything You Need for Smarter Cooking"</h2>
                    <p class="section-description">
                        "Our intelligent app simplifies your cooking journey from finding recipes to grocery shopping, "
                        "helping you save time and enjoy delicious meals."
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=feature index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature, index: usize) -> impl IntoView {
    // Cards fade in one after another.
    let delay = format!("animation-delay: {:.1}s;", index as f32 * 0.1);
    view! {
        <article class="card feature-card" style=delay>
            <div class="feature-icon">
                <Icon glyph=feature.icon size=48 />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
