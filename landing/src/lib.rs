//! # smartrecipe-landing
//!
//! Marketing site for the SmartRecipe app, rendered client-side with
//! [Leptos](https://leptos.dev/) and compiled to WebAssembly.
//!
//! The page is a fixed stack of sections. The interactive ones (navbar,
//! testimonial carousel, newsletter and beta-tester forms) are thin views
//! over the DOM-free state machines in [`state`], which is where the
//! behavior lives and where it is tested.
//!
//! ## Modules
//!
//! - [`state`] - carousel, navbar, submission lifecycle, form models, notices
//! - [`content`] - copy, artwork URLs and list data
//! - [`sections`] - Leptos components, one per page section
//! - [`config`] - optional overrides read from the host page
//! - [`dom`] - window listeners and timeouts scoped to component lifetime

pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod icons;
pub mod logging;
pub mod sections;
pub mod state;

pub use config::LandingConfig;
pub use error::{LandingError, Result};

use leptos::prelude::*;
use sections::*;

/// Whole page. Sections never read each other's state; the config and the
/// notice sink are the only values shared through context.
#[component]
pub fn App(#[prop(optional)] config: LandingConfig) -> impl IntoView {
    provide_notifier(&config);
    provide_context(config);

    view! {
        <Nav />
        <main>
            <Hero />
            <Features />
            <HowItWorks />
            <Testimonials />
            <BetaTester />
            <Newsletter />
        </main>
        <Footer />
        <Toaster />
    }
}
