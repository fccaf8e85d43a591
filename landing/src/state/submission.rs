//! Simulated form submission lifecycle.
//!
//! `Idle -> Submitting -> Submitted`, and for the beta application only,
//! `Submitted -> Idle` again. Nothing leaves the browser; the component
//! completes the submission from a one-shot timer.

use std::fmt;

use crate::error::{LandingError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Idle => "idle",
            Phase::Submitting => "submitting",
            Phase::Submitted => "submitted",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Newsletter,
    BetaApplication,
}

impl SubmissionKind {
    fn allows_reset(self) -> bool {
        matches!(self, SubmissionKind::BetaApplication)
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SubmissionKind::Newsletter => "newsletter",
            SubmissionKind::BetaApplication => "beta application",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Begin,
    Complete,
    Reset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Begin => "begin",
            Action::Complete => "complete",
            Action::Reset => "reset",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    kind: SubmissionKind,
    phase: Phase,
}

impl Submission {
    pub fn new(kind: SubmissionKind) -> Self {
        Self {
            kind,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the submit control must stay disabled.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    pub fn begin(&mut self) -> Result<()> {
        self.step(Action::Begin, Phase::Idle, Phase::Submitting)
    }

    pub fn complete(&mut self) -> Result<()> {
        self.step(Action::Complete, Phase::Submitting, Phase::Submitted)
    }

    /// "Submit another" on the beta form. The newsletter has no way back.
    pub fn reset(&mut self) -> Result<()> {
        if !self.kind.allows_reset() {
            return Err(self.rejected(Action::Reset));
        }
        self.step(Action::Reset, Phase::Submitted, Phase::Idle)
    }

    fn step(&mut self, action: Action, from: Phase, to: Phase) -> Result<()> {
        if self.phase != from {
            return Err(self.rejected(action));
        }
        tracing::debug!(kind = %self.kind, %from, %to, "submission phase change");
        self.phase = to;
        Ok(())
    }

    fn rejected(&self, action: Action) -> LandingError {
        LandingError::InvalidTransition {
            kind: self.kind,
            from: self.phase,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_newsletter_cycle() {
        let mut s = Submission::new(SubmissionKind::Newsletter);
        assert_eq!(s.phase(), Phase::Idle);
        s.begin().unwrap();
        assert!(s.is_busy());
        s.complete().unwrap();
        assert!(s.is_submitted());
        assert!(!s.is_busy());
    }

    #[test]
    fn newsletter_cannot_reset() {
        let mut s = Submission::new(SubmissionKind::Newsletter);
        s.begin().unwrap();
        s.complete().unwrap();
        let err = s.reset().unwrap_err();
        assert!(matches!(
            err,
            LandingError::InvalidTransition {
                from: Phase::Submitted,
                action: Action::Reset,
                ..
            }
        ));
        assert_eq!(s.phase(), Phase::Submitted);
    }

    #[test]
    fn beta_application_resets_to_idle() {
        let mut s = Submission::new(SubmissionKind::BetaApplication);
        s.begin().unwrap();
        s.complete().unwrap();
        s.reset().unwrap();
        assert_eq!(s.phase(), Phase::Idle);
        s.begin().unwrap();
        assert!(s.is_busy());
    }

    #[test]
    fn double_begin_is_rejected() {
        let mut s = Submission::new(SubmissionKind::BetaApplication);
        s.begin().unwrap();
        assert!(s.begin().is_err());
        assert_eq!(s.phase(), Phase::Submitting);
    }

    #[test]
    fn complete_requires_pending_submission() {
        let mut s = Submission::new(SubmissionKind::Newsletter);
        assert!(s.complete().is_err());
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn reset_before_submitted_is_rejected() {
        let mut s = Submission::new(SubmissionKind::BetaApplication);
        s.begin().unwrap();
        assert!(s.reset().is_err());
        assert!(s.is_busy());
    }
}
