use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::toaster::use_notifier;
use crate::config::LandingConfig;
use crate::content::APPLICATION_NOTICE;
use crate::dom::PendingTimeout;
use crate::icons::{Glyph, Icon};
use crate::state::{BetaApplication, ExperienceLevel, Submission, SubmissionKind};

#[component]
pub fn BetaTester() -> impl IntoView {
    let delay = use_context::<LandingConfig>()
        .unwrap_or_default()
        .submit_delay();
    let notifier = use_notifier();
    let form = RwSignal::new(BetaApplication::default());
    let submission = RwSignal::new(Submission::new(SubmissionKind::BetaApplication));
    let pending = PendingTimeout::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = form.with_untracked(BetaApplication::validate) {
            tracing::debug!("beta application blocked: {}", e);
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
            form.update(BetaApplication::clear);
            if let Some(notifier) = notifier {
                notifier.notify(&APPLICATION_NOTICE);
            }
        });
    };

    let submit_another = move |_| {
        submission.update(|s| {
            if let Err(e) = s.reset() {
                tracing::warn!("{}", e);
            }
        });
        form.update(BetaApplication::clear);
    };

    let busy = move || submission.with(Submission::is_busy);
    let submitted = move || submission.with(Submission::is_submitted);

    view! {
        <section id="beta-tester" class="section section-soft">
            <div class="container">
                <div class="section-header fade-in">
                    <div class="eyebrow">"Join Our Beta"</div>
                    <h2 class="section-title">"Become a Beta Tester"</h2>
                    <p class="section-description">
                        "Help us shape the future of cooking and meal planning. Join our exclusive beta program "
                        "and be among the first to experience Smart Recipe."
                    </p>
                </div>

                <div class="beta-card">
                    <div class="beta-emblem">
                        <Icon glyph=Glyph::Rocket size=80 />
                        <div class="beta-emblem-ring"></div>
                    </div>

                    <div class="beta-body">
                        <Show
                            when=submitted
                            fallback=move || {
                                view! {
                                    <form class="form" on:submit=on_submit>
                                        <h3 class="form-title">"Apply Now"</h3>
                                        <div class="form-row">
                                            <div class="form-field">
                                                <label for="beta-full-name">"Full Name"</label>
                                                <input
                                                    type="text"
                                                    id="beta-full-name"
                                                    placeholder="Your name"
                                                    required
                                                    prop:value=move || form.with(|f| f.full_name.clone())
                                                    on:input=move |ev| {
                                                        form.update(|f| f.full_name = event_target_value(&ev));
                                                    }
                                                />
                                            </div>
                                            <div class="form-field">
                                                <label for="beta-email">"Email Address"</label>
                                                <input
                                                    type="email"
                                                    id="beta-email"
                                                    placeholder="you@example.com"
                                                    required
                                                    prop:value=move || form.with(|f| f.email.clone())
                                                    on:input=move |ev| {
                                                        form.update(|f| f.email = event_target_value(&ev));
                                                    }
                                                />
                                            </div>
                                        </div>

                                        <div class="form-field">
                                            <label for="beta-experience">"Cooking Experience"</label>
                                            <select
                                                id="beta-experience"
                                                required
                                                prop:value=move || {
                                                    form.with(|f| f.experience.map(ExperienceLevel::value).unwrap_or_default())
                                                }
                                                on:change=move |ev| {
                                                    let level = ExperienceLevel::from_select(&event_target_value(&ev));
                                                    form.update(|f| f.experience = level);
                                                }
                                            >
                                                <option value="">"Select your experience level"</option>
                                                {ExperienceLevel::ALL
                                                    .into_iter()
                                                    .map(|level| view! { <option value=level.value()>{level.label()}</option> })
                                                    .collect_view()}
                                            </select>
                                        </div>

                                        <div class="form-field">
                                            <label for="beta-reason">"Why do you want to join our beta?"</label>
                                            <textarea
                                                id="beta-reason"
                                                rows="3"
                                                placeholder="Tell us why you're interested in our app..."
                                                required
                                                prop:value=move || form.with(|f| f.reason.clone())
                                                on:input=move |ev| {
                                                    form.update(|f| f.reason = event_target_value(&ev));
                                                }
                                            ></textarea>
                                        </div>

                                        <button type="submit" class="btn btn-primary btn-block" disabled=busy>
                                            {move || {
                                                if busy() {
                                                    view! { <span>"Submitting..."</span> }.into_any()
                                                } else {
                                                    view! {
                                                        "Apply to be a Beta Tester"
                                                        <Icon glyph=Glyph::ArrowRight size=16 />
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <div class="confirmation">
                                <div class="confirmation-badge">
                                    <Icon glyph=Glyph::Check size=32 />
                                </div>
                                <h3 class="form-title">"Thank You!"</h3>
                                <p>"Your application has been received. We'll review it and get back to you soon."</p>
                                <button class="btn btn-secondary" on:click=submit_another>
                                    "Submit Another Application"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}
