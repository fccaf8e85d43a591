//! Errors reported by the page's state layer.
//!
//! The UI never panics on these: handlers log them and keep the current state.

use thiserror::Error;

use crate::state::forms::FormField;
use crate::state::submission::{Action, Phase, SubmissionKind};

#[derive(Debug, Error)]
pub enum LandingError {
    #[error("carousel needs at least one item")]
    EmptyCarousel,

    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{kind} form cannot {action} while {from}")]
    InvalidTransition {
        kind: SubmissionKind,
        from: Phase,
        action: Action,
    },

    #[error("required field is empty: {0}")]
    MissingField(FormField),

    #[error("invalid landing config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("dom: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_name_the_offending_value() {
        let err = LandingError::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(err.to_string(), "index 7 is out of range for 4 items");

        let err = LandingError::MissingField(FormField::FullName);
        assert_eq!(err.to_string(), "required field is empty: Full Name");

        let err = LandingError::InvalidTransition {
            kind: SubmissionKind::Newsletter,
            from: Phase::Submitted,
            action: Action::Reset,
        };
        assert_eq!(err.to_string(), "newsletter form cannot reset while submitted");
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LandingError = parse.into();
        assert!(matches!(err, LandingError::Config(_)));
    }
}
