//! Toast notices raised by the forms.
//!
//! The root provides a [`Notifier`]; sections pull it from context and push
//! notices into it. [`Toaster`] renders whatever is queued.

use std::time::Duration;

use leptos::prelude::*;

use crate::config::LandingConfig;
use crate::content::NoticeText;
use crate::dom::TimeoutSet;
use crate::icons::{Glyph, Icon};
use crate::state::{Notice, NoticeId, NoticeQueue};

#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NoticeQueue>,
    timers: TimeoutSet,
    duration: Duration,
}

impl Notifier {
    /// Pending auto-dismiss timers are cleared when the current owner is disposed.
    pub fn new(config: &LandingConfig) -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::new(config.notice_limit)),
            timers: TimeoutSet::new(),
            duration: config.notice_duration(),
        }
    }

    /// Queue a notice and schedule its dismissal.
    pub fn notify(&self, text: &NoticeText) -> Option<NoticeId> {
        let id = self.queue.try_update(|q| q.push(text.title, text.description))?;
        tracing::info!(id, title = text.title, "notice shown");

        let queue = self.queue;
        self.timers.schedule(id, self.duration, move || {
            queue.try_update(|q| q.dismiss(id));
        });
        Some(id)
    }

    pub fn dismiss(&self, id: NoticeId) {
        self.timers.cancel(id);
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    /// Notices currently on screen.
    pub fn len(&self) -> usize {
        self.queue.with_untracked(NoticeQueue::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Vec<Notice> {
        self.queue.with(|q| q.iter().cloned().collect())
    }
}

pub fn provide_notifier(config: &LandingConfig) -> Notifier {
    let notifier = Notifier::new(config);
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Option<Notifier> {
    use_context::<Notifier>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let Some(notifier) = use_notifier() else {
        tracing::warn!("Toaster mounted without a Notifier in context");
        return ().into_any();
    };

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || notifier.snapshot()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class="toast">
                            <div class="toast-body">
                                <p class="toast-title">{notice.title}</p>
                                <p class="toast-description">{notice.description}</p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss notification"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                <Icon glyph=Glyph::Close size=16 />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
    .into_any()
}
