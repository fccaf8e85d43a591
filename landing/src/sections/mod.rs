// SmartRecipe Landing Page: sections, top to bottom

mod beta_tester;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod nav;
mod newsletter;
mod testimonials;
mod toaster;

pub use beta_tester::BetaTester;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use newsletter::Newsletter;
pub use testimonials::Testimonials;
pub use toaster::{Notifier, Toaster, provide_notifier, use_notifier};
