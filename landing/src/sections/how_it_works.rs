use leptos::prelude::*;

use crate::content::{HOW_IT_WORKS_IMAGE, STEPS, Step};
use crate::icons::{Glyph, Icon};

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="section">
            <div class="container split-grid">
                <div class="how-art">
                    <img src=HOW_IT_WORKS_IMAGE alt="Using Smart Recipe App" class="how-image" />
                    <div class="glass-chip glass-chip-top">
                        <Icon glyph=Glyph::Utensils size=20 class="text-accent" />
                        <p>"Recipe Analyzed"</p>
                    </div>
                    <div class="glass-chip glass-chip-bottom">
                        <Icon glyph=Glyph::ShoppingCart size=20 class="text-accent" />
                        <p>"Shopping List Ready"</p>
                    </div>
                </div>

                <div class="how-content fade-in">
                    <div class="eyebrow">"How It Works"</div>
                    <h2 class="section-title">"Simple Steps to Smarter Cooking"</h2>
                    <p class="section-description">
                        "Our intuitive app simplifies the entire cooking process from recipe discovery to grocery shopping, "
                        "making meal preparation easier than ever."
                    </p>
                    <ol class="steps">
                        {STEPS.iter().map(|step| view! { <StepItem step=step /> }).collect_view()}
                    </ol>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepItem(step: &'static Step) -> impl IntoView {
    view! {
        <li class="step">
            <div class=format!("step-badge {}", step.color)>
                <Icon glyph=step.icon size=32 />
            </div>
            <div>
                <h3 class="step-title">{step.title}</h3>
                <p class="step-description">{step.description}</p>
            </div>
        </li>
    }
}
