//! Field values for the newsletter and beta-tester forms.
//!
//! Validation only rejects empty required fields, same as the browser's
//! `required` attribute on the inputs. Anything stricter would be a guess
//! about a backend that does not exist.

use std::fmt;

use crate::error::{LandingError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    Experience,
    Reason,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email Address",
            FormField::Experience => "Cooking Experience",
            FormField::Reason => "Why do you want to join our beta?",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
        ExperienceLevel::Professional,
    ];

    /// Value of the matching `<option>`.
    pub fn value(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
            ExperienceLevel::Professional => "professional",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner - I'm learning to cook",
            ExperienceLevel::Intermediate => "Intermediate - I cook regularly",
            ExperienceLevel::Advanced => "Advanced - I'm an experienced home cook",
            ExperienceLevel::Professional => "Professional - I have culinary training",
        }
    }

    /// Parses a `<select>` value. The placeholder option (`""`) and any value
    /// outside [`Self::ALL`] are `None`.
    pub fn from_select(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|level| level.value() == value)
    }
}

fn require(value: &str, field: FormField) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LandingError::MissingField(field));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn validate(&self) -> Result<()> {
        require(&self.email, FormField::Email)
    }

    pub fn clear(&mut self) {
        self.email.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BetaApplication {
    pub full_name: String,
    pub email: String,
    pub experience: Option<ExperienceLevel>,
    pub reason: String,
}

impl BetaApplication {
    /// First empty required field in on-screen order.
    pub fn validate(&self) -> Result<()> {
        require(&self.full_name, FormField::FullName)?;
        require(&self.email, FormField::Email)?;
        if self.experience.is_none() {
            return Err(LandingError::MissingField(FormField::Experience));
        }
        require(&self.reason, FormField::Reason)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
