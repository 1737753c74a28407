//! Spam types and data structures

use serde::{Deserialize, Serialize};

/// Sender used for training messages that carry no address
pub const DEFAULT_SENDER: &str = "unknown@unknown";

/// Classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Phishing or unsolicited message
    Spam,
    /// Legitimate message
    Ham,
}

impl Label {
    /// Map a binary indicator to a label: 1 is spam, anything else is ham
    pub fn from_indicator(value: u8) -> Self {
        if value == 1 {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    /// Binary indicator for this label
    pub fn indicator(self) -> u8 {
        match self {
            Label::Spam => 1,
            Label::Ham => 0,
        }
    }

    pub fn is_spam(self) -> bool {
        self == Label::Spam
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Spam => write!(f, "spam"),
            Label::Ham => write!(f, "ham"),
        }
    }
}

/// An unlabelled message as supplied to the parallel-array training interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message text
    pub text: String,
    /// Sender address, if known
    #[serde(default)]
    pub sender: Option<String>,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Option<&str>) -> Self {
        Self {
            text: text.into(),
            sender: sender.map(str::to_string),
        }
    }
}

/// A training example paired with its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledMessage {
    /// Message text
    pub text: String,
    /// Sender address
    pub sender: String,
    /// Expected class
    pub label: Label,
}

impl LabeledMessage {
    pub fn new(text: impl Into<String>, sender: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            sender: sender.into(),
            label,
        }
    }

    /// Pair a message with its label, substituting `default_sender` when it has none
    pub fn from_message(message: &Message, label: Label, default_sender: &str) -> Self {
        Self {
            text: message.text.clone(),
            sender: message
                .sender
                .clone()
                .unwrap_or_else(|| default_sender.to_string()),
            label,
        }
    }
}

/// Log-probability accumulators produced for one message
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassScores {
    /// ln P(spam) + sum of count * ln P(feature | spam)
    pub spam: f64,
    /// ln P(ham) + sum of count * ln P(feature | ham)
    pub ham: f64,
}

impl ClassScores {
    /// Spam only when its accumulator is strictly greater; ties go to ham
    pub fn label(&self) -> Label {
        if self.spam > self.ham {
            Label::Spam
        } else {
            Label::Ham
        }
    }
}

/// Classifier training statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifierStats {
    /// Spam examples absorbed
    pub spam_examples: u64,
    /// Ham examples absorbed
    pub ham_examples: u64,
    /// Sum of all spam feature counts
    pub spam_features: u64,
    /// Sum of all ham feature counts
    pub ham_features: u64,
    /// Distinct feature names across both classes
    pub vocabulary_size: usize,
}
