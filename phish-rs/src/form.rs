//! Input form contract
//!
//! Guards the two user-supplied fields before they reach the classifier and
//! maps the returned label to display text.

use crate::config::DisplayConfig;
use crate::error::{PhishError, Result};
use crate::spam::{Label, NaiveBayesClassifier};
use tracing::warn;

/// Outcome shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Phishing,
    Safe,
}

impl Verdict {
    /// Display text configured for this verdict
    pub fn display<'a>(&self, display: &'a DisplayConfig) -> &'a str {
        match self {
            Verdict::Phishing => &display.spam_label,
            Verdict::Safe => &display.ham_label,
        }
    }
}

impl From<Label> for Verdict {
    fn from(label: Label) -> Self {
        match label {
            Label::Spam => Verdict::Phishing,
            Label::Ham => Verdict::Safe,
        }
    }
}

/// Both fields must be non-empty after trimming
pub fn validate_fields(message: &str, sender: &str) -> Result<()> {
    let mut missing = Vec::new();
    if message.trim().is_empty() {
        missing.push("message");
    }
    if sender.trim().is_empty() {
        missing.push("sender");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        warn!("Rejected form input, missing: {}", missing.join(", "));
        Err(PhishError::InvalidInput(format!(
            "missing {}",
            missing.join(" and ")
        )))
    }
}

/// Validate the form fields, then classify
pub fn check_message(
    classifier: &NaiveBayesClassifier,
    message: &str,
    sender: &str,
) -> Result<Verdict> {
    validate_fields(message, sender)?;
    Ok(classifier.predict(message, sender)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spam::demo_corpus;

    #[test]
    fn test_validate_fields() {
        assert!(validate_fields("hello there", "a@b.com").is_ok());
        assert!(validate_fields("", "a@b.com").is_err());
        assert!(validate_fields("hello", "  ").is_err());

        let err = validate_fields(" ", "").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: missing message and sender");
    }

    #[test]
    fn test_verdict_display() {
        let display = DisplayConfig::default();
        assert_eq!(Verdict::from(Label::Spam).display(&display), "phishing");
        assert_eq!(Verdict::from(Label::Ham).display(&display), "safe");
    }

    #[test]
    fn test_check_message_untrained() {
        let classifier = NaiveBayesClassifier::new();
        assert!(matches!(
            check_message(&classifier, "hello there", "a@b.com"),
            Err(PhishError::UntrainedModel)
        ));
    }

    #[test]
    fn test_check_message_demo() {
        let mut classifier = NaiveBayesClassifier::new();
        classifier.train(&demo_corpus());

        let verdict = check_message(
            &classifier,
            "Срочно обнови пароль по ссылке http://fake.com",
            "admin@gmail.com",
        )
        .unwrap();
        assert_eq!(verdict, Verdict::Phishing);

        let verdict = check_message(
            &classifier,
            "Привет, как дела? Встретимся завтра?",
            "friend@company.com",
        )
        .unwrap();
        assert_eq!(verdict, Verdict::Safe);
    }
}
