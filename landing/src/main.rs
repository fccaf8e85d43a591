// SmartRecipe Landing Page - Leptos 0.8 Edition

use leptos::prelude::*;
use smartrecipe_landing::{App, LandingConfig, logging};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = LandingConfig::load();
    tracing::info!("mounting landing page");
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
