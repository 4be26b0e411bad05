//! Newsletter signup form state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors surfaced as inline form feedback.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("Please enter your email address.")]
    EmptyEmail,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscribeState {
    #[default]
    Idle,
    Subscribed,
}

/// The footer newsletter form: one email field and a subscribe action.
/// There is no backend; a successful submit just records the state and
/// clears the field.
#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    email: String,
    state: SubscribeState,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> SubscribeState {
        self.state
    }

    /// Validate and subscribe. The field is cleared on success and kept
    /// for correction on failure.
    pub fn submit(&mut self) -> Result<(), NewsletterError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(NewsletterError::EmptyEmail);
        }
        if !is_plausible_email(email) {
            return Err(NewsletterError::InvalidEmail);
        }

        self.email.clear();
        self.state = SubscribeState::Subscribed;
        Ok(())
    }
}

/// Form-level plausibility check, not RFC validation: something before
/// an '@', and a '.' somewhere after it.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_is_rejected() {
        let mut form = NewsletterForm::new();
        assert_eq!(form.submit(), Err(NewsletterError::EmptyEmail));
        form.set_email("   ");
        assert_eq!(form.submit(), Err(NewsletterError::EmptyEmail));
    }

    #[test]
    fn test_implausible_email_is_rejected() {
        let mut form = NewsletterForm::new();
        for bad in ["not-an-email", "@example.com", "user@nodot"] {
            form.set_email(bad);
            assert_eq!(form.submit(), Err(NewsletterError::InvalidEmail), "{}", bad);
            // Field is kept for correction.
            assert_eq!(form.email(), bad);
        }
    }

    #[test]
    fn test_successful_subscribe_clears_the_field() {
        let mut form = NewsletterForm::new();
        form.set_email("ada@example.com");
        assert!(form.submit().is_ok());
        assert_eq!(form.state(), SubscribeState::Subscribed);
        assert_eq!(form.email(), "");
    }
}
