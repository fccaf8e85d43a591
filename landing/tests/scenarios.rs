//! End-to-end behavior of the page's state machines, driven the way the
//! components drive them.

use pretty_assertions::assert_eq;
use smartrecipe_landing::LandingError;
use smartrecipe_landing::config::LandingConfig;
use smartrecipe_landing::content::TESTIMONIALS;
use smartrecipe_landing::state::{
    Appearance, BetaApplication, Carousel, ExperienceLevel, FormField, NavbarState,
    NewsletterForm, NoticeQueue, Phase, Submission, SubmissionKind,
};

#[test]
fn next_full_cycle_returns_to_start() {
    for len in 1..=8 {
        for start in 0..len {
            let mut c = Carousel::starting_at(len, start).unwrap();
            for _ in 0..len {
                c.next();
            }
            assert_eq!(c.current(), start, "len={len} start={start}");
        }
    }
}

#[test]
fn previous_undoes_next() {
    for len in 1..=6 {
        for start in 0..len {
            let mut c = Carousel::starting_at(len, start).unwrap();
            c.next();
            c.previous();
            assert_eq!(c.current(), start, "len={len} start={start}");
        }
    }
}

#[test]
fn jump_selects_that_testimonial() {
    let mut c = Carousel::new(TESTIMONIALS.len()).unwrap();
    for (i, testimonial) in TESTIMONIALS.iter().enumerate().rev() {
        c.jump_to(i).unwrap();
        assert_eq!(TESTIMONIALS[c.current()].author, testimonial.author);
    }
}

#[test]
fn four_item_carousel_wraps() {
    let mut c = Carousel::new(4).unwrap();
    assert_eq!(c.current(), 0);
    c.next();
    assert_eq!(c.current(), 1);
    c.next();
    c.next();
    c.next();
    assert_eq!(c.current(), 0);
}

#[test]
fn widening_viewport_closes_open_menu() {
    let mut nav = NavbarState::new(&LandingConfig::default());
    nav.on_resize(500.0);
    nav.toggle_menu();
    assert!(nav.menu_open());
    assert!(nav.on_resize(900.0));
    assert!(!nav.menu_open());
    assert_eq!(nav.appearance(), Appearance::Transparent);
}

#[test]
fn newsletter_subscription_states() {
    let mut form = NewsletterForm {
        email: "user@example.com".into(),
    };
    let mut submission = Submission::new(SubmissionKind::Newsletter);
    let mut notices = NoticeQueue::new(LandingConfig::default().notice_limit);

    form.validate().unwrap();
    submission.begin().unwrap();
    assert_eq!(submission.phase(), Phase::Submitting);
    assert!(submission.is_busy());

    // steps run by the submit timer; web.rs drives the mounted page
    submission.complete().unwrap();
    form.clear();
    notices.push("Successfully subscribed!", "");

    assert_eq!(submission.phase(), Phase::Submitted);
    assert_eq!(form.email, "");
    assert_eq!(notices.len(), 1);
    assert!(submission.reset().is_err());
}

#[test]
fn beta_application_without_name_is_blocked() {
    let form = BetaApplication {
        full_name: String::new(),
        email: "cook@example.com".into(),
        experience: Some(ExperienceLevel::Beginner),
        reason: "Learning to cook".into(),
    };
    let submission = Submission::new(SubmissionKind::BetaApplication);

    let err = form.validate().unwrap_err();
    assert!(matches!(err, LandingError::MissingField(FormField::FullName)));
    assert_eq!(submission.phase(), Phase::Idle);
}

#[test]
fn submit_another_application() {
    let mut form = BetaApplication {
        full_name: "Jamie Oliver".into(),
        email: "jamie@example.com".into(),
        experience: Some(ExperienceLevel::Professional),
        reason: "Testing new kitchen tools".into(),
    };
    let mut submission = Submission::new(SubmissionKind::BetaApplication);

    form.validate().unwrap();
    submission.begin().unwrap();
    submission.complete().unwrap();
    assert!(submission.is_submitted());

    submission.reset().unwrap();
    form.clear();
    assert_eq!(submission.phase(), Phase::Idle);
    assert_eq!(form, BetaApplication::default());
}

#[test]
fn config_block_overrides_timing() {
    let config = LandingConfig::from_json(r#"{ "submit_delay_ms": 250, "notice_limit": 1 }"#).unwrap();
    assert_eq!(config.submit_delay().as_millis(), 250);

    let mut notices = NoticeQueue::new(config.notice_limit);
    notices.push("Application received!", "");
    notices.push("Successfully subscribed!", "");
    let titles: Vec<_> = notices.iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["Successfully subscribed!"]);
}
