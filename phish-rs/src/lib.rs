//! phish-rs: Naive Bayes phishing detector
//!
//! Classifies a short message and its sender address as phishing ("spam")
//! or legitimate ("ham").
//!
//! # Features
//!
//! - **Feature extraction**: word tokens, sender domain, suspicious symbols, links
//! - **Classifier**: multinomial Naive Bayes with Laplace smoothing
//! - **Corpora**: JSON training files or a small built-in demo corpus
//!
//! # Example
//!
//! ```
//! use phish_rs::spam::{Label, LabeledMessage, NaiveBayesClassifier};
//!
//! let mut classifier = NaiveBayesClassifier::new();
//! classifier.train(&[
//!     LabeledMessage::new("free money now", "a@x.com", Label::Spam),
//!     LabeledMessage::new("let us meet tomorrow", "b@y.com", Label::Ham),
//! ]);
//!
//! let label = classifier.predict("free money again", "c@x.com").unwrap();
//! assert_eq!(label, Label::Spam);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`form`]: Input validation and display verdicts
//! - [`logging`]: Tracing subscriber setup
//! - [`spam`]: Feature extraction and classification

pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod spam;

// Re-export commonly used types
pub use config::Config;
pub use error::{PhishError, Result};
pub use spam::{Label, NaiveBayesClassifier};
