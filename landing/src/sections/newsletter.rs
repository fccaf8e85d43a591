use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::toaster::use_notifier;
use crate::config::LandingConfig;
use crate::content::{NEWSLETTER_IMAGE, STORE_LINKS, SUBSCRIBED_NOTICE, Store, StoreLink};
use crate::dom::PendingTimeout;
use crate::icons::{Glyph, Icon};
use crate::state::{NewsletterForm, Submission, SubmissionKind};

#[component]
pub fn Newsletter() -> impl IntoView {
    let delay = use_context::<LandingConfig>()
        .unwrap_or_default()
        .submit_delay();
    let notifier = use_notifier();
    let form = RwSignal::new(NewsletterForm::default());
    let submission = RwSignal::new(Submission::new(SubmissionKind::Newsletter));
    let pending = PendingTimeout::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = form.with_untracked(NewsletterForm::validate) {
            tracing::debug!("newsletter blocked: {}", e);
            return;
        }
        let mut next = submission.get_untracked();
        if let Err(e) = next.begin() {
            tracing::warn!("{}", e);
            return;
        }
        submission.set(next);

        pending.schedule(delay, move || {
            submission.update(|s| {
                if let Err(e) = s.complete() {
                    tracing::warn!("{}", e);
                }
            });
            form.update(NewsletterForm::clear);
            if let Some(notifier) = notifier {
                notifier.notify(&SUBSCRIBED_NOTICE);
            }
        });
    };

    let busy = move || submission.with(Submission::is_busy);
    let subscribed = move || submission.with(Submission::is_submitted);

    view! {
        <section id="download" class="section section-brand">
            <div class="container">
                <div class="newsletter-card">
                    <div class="newsletter-art">
                        <img src=NEWSLETTER_IMAGE alt="Delicious Food" class="newsletter-image" />
                        <div class="newsletter-art-overlay"></div>
                        <div class="newsletter-art-caption">
                            <h3>"Get Early Access"</h3>
                            <p>"Join our beta program and be among the first to experience the future of cooking."</p>
                        </div>
                    </div>

                    <div class="newsletter-body">
                        <div class="eyebrow">"Coming Soon"</div>
                        <h2 class="section-title">"Stay Updated"</h2>
                        <p class="section-description">
                            "Subscribe to our newsletter to receive the latest updates about our app launch, "
                            "exclusive early access, and cooking tips."
                        </p>

                        <Show
                            when=subscribed
                            fallback=move || {
                                view! {
                                    <form class="form" on:submit=on_submit>
                                        <div class="form-field">
                                            <label for="newsletter-email">"Email Address"</label>
                                            <input
                                                type="email"
                                                id="newsletter-email"
                                                placeholder="you@example.com"
                                                required
                                                prop:value=move || form.with(|f| f.email.clone())
                                                on:input=move |ev| {
                                                    form.update(|f| f.email = event_target_value(&ev));
                                                }
                                            />
                                        </div>
                                        <button type="submit" class="btn btn-primary btn-block" disabled=busy>
                                            {move || {
                                                if busy() {
                                                    view! { <span>"Subscribing..."</span> }.into_any()
                                                } else {
                                                    view! {
                                                        "Subscribe"
                                                        <Icon glyph=Glyph::ArrowRight size=16 />
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                        </button>
                                        <p class="form-note">"We respect your privacy. Unsubscribe at any time."</p>
                                    </form>
                                }
                            }
                        >
                            <div class="confirmation-inline">
                                <Icon glyph=Glyph::Check size=20 />
                                <p>"Thanks for subscribing!"</p>
                            </div>
                        </Show>

                        <div class="store-links">
                            <p class="store-links-label">"Download our app:"</p>
                            <div class="store-links-row">
                                {STORE_LINKS.iter().map(|link| view! { <StoreButton link=link /> }).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StoreButton(link: &'static StoreLink) -> impl IntoView {
    let logo = match link.store {
        Store::AppStore => view! {
            <svg class="store-logo" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M17.5,12.5A5.51,5.51,0,0,1,16,16.5a5.41,5.41,0,0,1-4,2,5.5,5.5,0,0,1,0-11,5.41,5.41,0,0,1,4,2A5.51,5.51,0,0,1,17.5,12.5Z"></path>
                <path d="M12,2A10,10,0,1,0,22,12,10,10,0,0,0,12,2Zm0,18a8,8,0,1,1,8-8A8,8,0,0,1,12,20Z"></path>
            </svg>
        }
        .into_any(),
        Store::GooglePlay => view! {
            <svg class="store-logo" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M3.5,20.5a1,1,0,0,1-.5-.87V4.37a1,1,0,0,1,.5-.87l9-5a1,1,0,0,1,1,0l9,5a1,1,0,0,1,.5.87V19.63a1,1,0,0,1-.5.87l-9,5a1,1,0,0,1-1,0Z"></path>
            </svg>
        }
        .into_any(),
    };

    view! {
        <a href=link.href class="store-button">
            {logo}
            <div class="store-button-text">
                <p class="store-caption">{link.caption}</p>
                <p class="store-name">{link.name}</p>
            </div>
        </a>
    }
}
