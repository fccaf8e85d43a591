use leptos::prelude::*;

use crate::content::{DOWNLOAD_LINK, HERO_IMAGE, HERO_STATS};
use crate::icons::{Glyph, Icon};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-glow hero-glow-top"></div>
                <div class="hero-glow hero-glow-bottom"></div>

                <div class="hero-content fade-in">
                    <div class="eyebrow">"Revolutionizing your kitchen experience"</div>
                    <h1 class="hero-title">
                        "Transform Your "
                        <span class="text-accent">"Cooking Experience"</span>
                    </h1>
                    <p class="hero-description">
                        "Discover a smarter way to manage recipes, plan meals, and shop for groceries "
                        "with our AI-powered assistant."
                    </p>
                    <div class="hero-actions">
                        <a href=DOWNLOAD_LINK.href class="btn btn-primary">
                            "Get Started"
                            <Icon glyph=Glyph::ArrowRight size=16 />
                        </a>
                        <a href="#how-it-works" class="btn btn-secondary">"Learn More"</a>
                    </div>
                    <div class="hero-stats">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="hero-stat">
                                        <p class="hero-stat-value">{stat.value}</p>
                                        <p class="hero-stat-label">{stat.label}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <HeroArtwork />
            </div>
        </section>
    }
}

#[component]
fn HeroArtwork() -> impl IntoView {
    view! {
        <div class="hero-art fade-in">
            <div class="hero-art-frame">
                <img src=HERO_IMAGE alt="Smart Recipe App" class="hero-image" />
                <FloatingCard
                    class="floating-card floating-card-left"
                    badge="520"
                    title="Calories"
                    subtitle="Per Serving"
                />
                <FloatingCard
                    class="floating-card floating-card-right"
                    badge="$12"
                    title="Estimated Cost"
                    subtitle="For 4 Servings"
                />
            </div>
        </div>
    }
}

#[component]
fn FloatingCard(
    class: &'static str,
    badge: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class=class>
            <div class="floating-badge">{badge}</div>
            <div>
                <p class="floating-title">{title}</p>
                <p class="floating-subtitle">{subtitle}</p>
            </div>
        </div>
    }
}
