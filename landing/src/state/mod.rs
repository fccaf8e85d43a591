//! DOM-free state machines behind the interactive sections.
//!
//! Each component owns one of these exclusively; nothing here is shared
//! between sections.

pub mod carousel;
pub mod forms;
pub mod navbar;
pub mod notices;
pub mod submission;

pub use carousel::Carousel;
pub use forms::{BetaApplication, ExperienceLevel, FormField, NewsletterForm};
pub use navbar::{Appearance, NavbarState};
pub use notices::{Notice, NoticeId, NoticeQueue};
pub use submission::{Phase, Submission, SubmissionKind};
