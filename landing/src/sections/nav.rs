use leptos::ev;
use leptos::prelude::*;

use crate::config::LandingConfig;
use crate::content::{BRAND_ACCENT, BRAND_REST, DOWNLOAD_LINK, NAV_LINKS};
use crate::dom;
use crate::icons::{Glyph, Icon};
use crate::state::NavbarState;

#[component]
pub fn Nav() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let mut initial = NavbarState::new(&config);
    // Reloads can land mid-page.
    initial.on_scroll(dom::scroll_offset());
    let state = RwSignal::new(initial);

    dom::scoped_window_listener(ev::scroll, move |_| {
        let mut next = state.get_untracked();
        if next.on_scroll(dom::scroll_offset()) {
            state.set(next);
        }
    });

    dom::scoped_window_listener(ev::resize, move |_| {
        let mut next = state.get_untracked();
        if next.on_resize(dom::viewport_width()) {
            tracing::debug!("mobile menu closed by resize");
            state.set(next);
        }
    });

    let menu_open = move || state.with(NavbarState::menu_open);
    let toggle_menu = move |_| {
        state.update(|s| {
            let open = s.toggle_menu();
            tracing::debug!(open, "mobile menu toggled");
        });
    };
    let close_menu = move |_| {
        state.update(|s| {
            s.on_link_selected();
        });
    };

    view! {
        <header class=move || state.with(|s| s.appearance().css_class())>
            <div class="container nav-inner">
                <a href="#" class="nav-brand">
                    <span class="nav-brand-accent">{BRAND_ACCENT}</span>
                    {BRAND_REST}
                </a>

                <nav class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
                        .collect_view()}
                    <a href=DOWNLOAD_LINK.href class="btn btn-primary">{DOWNLOAD_LINK.label}</a>
                </nav>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=toggle_menu
                >
                    {move || {
                        let glyph = if menu_open() { Glyph::Close } else { Glyph::Menu };
                        view! { <Icon glyph=glyph /> }
                    }}
                </button>
            </div>

            // Mobile menu stays mounted so the slide transition can run both ways
            <div class=move || if menu_open() { "nav-mobile open" } else { "nav-mobile" }>
                <div class="container nav-mobile-inner">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="nav-mobile-link" on:click=close_menu>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=DOWNLOAD_LINK.href class="btn btn-primary" on:click=close_menu>
                        {DOWNLOAD_LINK.label}
                    </a>
                </div>
            </div>
        </header>
    }
}
