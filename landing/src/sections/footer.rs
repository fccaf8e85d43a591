use leptos::prelude::*;

use crate::content::{BETA_LINK, BRAND_ACCENT, BRAND_REST, DOWNLOAD_LINK, NAV_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <a href="#" class="footer-brand">
                    <span class="nav-brand-accent">{BRAND_ACCENT}</span>
                    {BRAND_REST}
                </a>
                <nav class="footer-links">
                    {NAV_LINKS
                        .iter()
                        .chain([&BETA_LINK, &DOWNLOAD_LINK])
                        .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                        .collect_view()}
                </nav>
                <p class="footer-copyright">"© 2025 SmartRecipe. All rights reserved."</p>
            </div>
        </footer>
    }
}
