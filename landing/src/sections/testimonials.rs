use leptos::prelude::*;

use crate::content::{Rating, TESTIMONIALS, Testimonial};
use crate::icons::{Glyph, Icon};
use crate::state::Carousel;

#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = match Carousel::new(TESTIMONIALS.len()) {
        Ok(carousel) => RwSignal::new(carousel),
        Err(e) => {
            tracing::warn!("testimonials section skipped: {}", e);
            return ().into_any();
        }
    };

    let show_previous = move |_| {
        carousel.update(|c| {
            let index = c.previous();
            tracing::debug!(index, "testimonial: previous");
        });
    };
    let show_next = move |_| {
        carousel.update(|c| {
            let index = c.next();
            tracing::debug!(index, "testimonial: next");
        });
    };

    let track_style = move || {
        format!(
            "transform: translateX({}%);",
            carousel.with(Carousel::offset_percent)
        )
    };

    let indicators = carousel.with_untracked(|c| c.indicators().map(|(i, _)| i).collect::<Vec<_>>());

    view! {
        <section id="testimonials" class="section">
            <div class="container">
                <div class="section-header fade-in">
                    <div class="eyebrow">"Testimonials"</div>
                    <h2 class="section-title">"Loved by Home Cooks Everywhere"</h2>
                    <p class="section-description">
                        "Real kitchens, real stories. Here is what our early users say about cooking with SmartRecipe."
                    </p>
                </div>

                <div class="carousel" aria-roledescription="carousel">
                    <div class="carousel-viewport">
                        <div class="carousel-track" style=track_style>
                            {TESTIMONIALS
                                .iter()
                                .enumerate()
                                .map(|(index, testimonial)| {
                                    let hidden = move || (!carousel.with(|c| c.is_active(index))).to_string();
                                    view! {
                                        <div class="carousel-slide" aria-hidden=hidden>
                                            <TestimonialCard testimonial=testimonial />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="carousel-controls">
                        <button class="carousel-arrow" aria-label="Previous testimonial" on:click=show_previous>
                            <Icon glyph=Glyph::ChevronLeft />
                        </button>
                        <div class="carousel-dots">
                            {indicators
                                .into_iter()
                                .map(|index| view! { <Indicator carousel=carousel index=index /> })
                                .collect_view()}
                        </div>
                        <button class="carousel-arrow" aria-label="Next testimonial" on:click=show_next>
                            <Icon glyph=Glyph::ChevronRight />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn Indicator(carousel: RwSignal<Carousel>, index: usize) -> impl IntoView {
    let active = move || carousel.with(|c| c.is_active(index));
    let select = move |_| {
        carousel.update(|c| match c.jump_to(index) {
            Ok(index) => tracing::debug!(index, "testimonial: jump"),
            Err(e) => tracing::warn!("{}", e),
        });
    };

    view! {
        <button
            class=move || if active() { "carousel-dot active" } else { "carousel-dot" }
            aria-label=format!("Show testimonial {}", index + 1)
            aria-current=move || active().to_string()
            on:click=select
        ></button>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <figure class="card testimonial-card">
            <Icon glyph=Glyph::Quote size=32 class="testimonial-quote-mark" />
            <Stars rating=testimonial.rating />
            <blockquote class="testimonial-quote">{testimonial.quote}</blockquote>
            <figcaption class="testimonial-author">
                <img src=testimonial.avatar_url alt=testimonial.author class="testimonial-avatar" />
                <div>
                    <p class="testimonial-name">{testimonial.author}</p>
                    <p class="testimonial-role">{testimonial.role}</p>
                </div>
            </figcaption>
        </figure>
    }
}

#[component]
fn Stars(rating: Rating) -> impl IntoView {
    let label = format!("{} out of {} stars", rating.stars(), Rating::MAX);
    view! {
        <div class="testimonial-stars" aria-label=label>
            {(1..=Rating::MAX)
                .map(|n| {
                    let lit = n <= rating.stars();
                    let class = if lit { "star lit" } else { "star" };
                    view! { <Icon glyph=Glyph::Star size=16 class=class filled=lit /> }
                })
                .collect_view()}
        </div>
    }
}
