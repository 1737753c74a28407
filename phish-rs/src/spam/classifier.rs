//! Naive Bayes classifier
//!
//! Multinomial Naive Bayes over the feature sets produced by
//! [`FeatureExtractor`], with add-one smoothing.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::features::{FeatureExtractor, FeatureSet};
use super::types::*;
use crate::error::{PhishError, Result};

/// Cumulative feature counts for one class
#[derive(Debug, Clone, Default)]
pub struct ClassModel {
    feature_counts: HashMap<String, u64>,
    total_features: u64,
    examples: u64,
}

impl ClassModel {
    /// Fold one example's features into the model
    fn absorb(&mut self, features: &FeatureSet) {
        self.examples += 1;
        for (feature, count) in features.iter() {
            *self.feature_counts.entry(feature.to_string()).or_insert(0) += count;
            self.total_features += count;
        }
    }

    /// Cumulative count for a feature, zero when unseen
    pub fn feature_count(&self, feature: &str) -> u64 {
        self.feature_counts.get(feature).copied().unwrap_or(0)
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.feature_counts.contains_key(feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.feature_counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of every feature count absorbed
    pub fn total_feature_count(&self) -> u64 {
        self.total_features
    }

    /// Number of training examples absorbed
    pub fn example_count(&self) -> u64 {
        self.examples
    }

    /// Smoothed ln P(feature | class)
    fn log_likelihood(&self, feature: &str, vocabulary_size: usize) -> f64 {
        let numerator = self.feature_count(feature) as f64 + 1.0;
        let denominator = self.total_features as f64 + vocabulary_size as f64;
        (numerator / denominator).ln()
    }
}

/// Two-class Naive Bayes phishing classifier
#[derive(Debug, Clone, Default)]
pub struct NaiveBayesClassifier {
    extractor: FeatureExtractor,
    spam: ClassModel,
    ham: ClassModel,
}

impl NaiveBayesClassifier {
    /// Create an untrained classifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb a batch of labelled examples
    ///
    /// Repeated calls accumulate; nothing is ever reset or deduplicated.
    pub fn train(&mut self, examples: &[LabeledMessage]) {
        // Extract the whole batch before touching either model
        let extracted: Vec<(Label, FeatureSet)> = examples
            .iter()
            .map(|example| {
                (
                    example.label,
                    self.extractor.extract(&example.text, &example.sender),
                )
            })
            .collect();

        for (label, features) in &extracted {
            self.model_mut(*label).absorb(features);
        }

        debug!(
            "Trained on {} examples (spam={}, ham={})",
            examples.len(),
            self.spam.example_count(),
            self.ham.example_count()
        );
    }

    /// Train from parallel message and label sequences
    ///
    /// Label 1 is spam, any other value is ham. Messages without a sender
    /// use [`DEFAULT_SENDER`]. Fails before mutating anything if the
    /// sequences differ in length.
    pub fn train_parallel(&mut self, messages: &[Message], labels: &[u8]) -> Result<()> {
        if messages.len() != labels.len() {
            return Err(PhishError::InvalidInput(format!(
                "{} messages but {} labels",
                messages.len(),
                labels.len()
            )));
        }

        let examples: Vec<LabeledMessage> = messages
            .iter()
            .zip(labels)
            .map(|(message, &label)| {
                LabeledMessage::from_message(message, Label::from_indicator(label), DEFAULT_SENDER)
            })
            .collect();

        self.train(&examples);
        Ok(())
    }

    /// Compute both class log-probabilities for a message
    pub fn scores(&self, message: &str, sender: &str) -> Result<ClassScores> {
        if message.trim().is_empty() {
            return Err(PhishError::InvalidInput("message is empty".to_string()));
        }
        if sender.trim().is_empty() {
            return Err(PhishError::InvalidInput("sender is empty".to_string()));
        }

        let total_examples = self.spam.example_count() + self.ham.example_count();
        if total_examples == 0 {
            return Err(PhishError::UntrainedModel);
        }

        let features = self.extractor.extract(message, sender);
        let vocabulary_size = self.vocabulary_size();

        let mut scores = ClassScores {
            spam: log_prior(self.spam.example_count(), total_examples),
            ham: log_prior(self.ham.example_count(), total_examples),
        };

        for (feature, count) in features.iter() {
            if count == 0 {
                continue;
            }
            let count = count as f64;
            scores.spam += count * self.spam.log_likelihood(feature, vocabulary_size);
            scores.ham += count * self.ham.log_likelihood(feature, vocabulary_size);
        }

        debug!(
            "Scored message: spam={:.4} ham={:.4} vocabulary={}",
            scores.spam, scores.ham, vocabulary_size
        );

        Ok(scores)
    }

    /// Classify a message
    pub fn predict(&self, message: &str, sender: &str) -> Result<Label> {
        Ok(self.scores(message, sender)?.label())
    }

    /// Distinct feature names across both classes
    pub fn vocabulary_size(&self) -> usize {
        let spam_only: HashSet<&str> = self.spam.iter().map(|(f, _)| f).collect();
        spam_only.len() + self.ham.iter().filter(|(f, _)| !spam_only.contains(f)).count()
    }

    pub fn is_trained(&self) -> bool {
        self.spam.example_count() + self.ham.example_count() > 0
    }

    pub fn spam_model(&self) -> &ClassModel {
        &self.spam
    }

    pub fn ham_model(&self) -> &ClassModel {
        &self.ham
    }

    /// Get training statistics
    pub fn stats(&self) -> ClassifierStats {
        ClassifierStats {
            spam_examples: self.spam.example_count(),
            ham_examples: self.ham.example_count(),
            spam_features: self.spam.total_feature_count(),
            ham_features: self.ham.total_feature_count(),
            vocabulary_size: self.vocabulary_size(),
        }
    }

    fn model_mut(&mut self, label: Label) -> &mut ClassModel {
        match label {
            Label::Spam => &mut self.spam,
            Label::Ham => &mut self.ham,
        }
    }
}

/// ln(class examples / total examples); a class with no examples scores -inf
fn log_prior(class_examples: u64, total_examples: u64) -> f64 {
    (class_examples as f64 / total_examples as f64).ln()
}
