//! Training corpora
//!
//! Corpus files are JSON arrays of `{ "text", "sender", "label" }` records
//! where `label` is a binary indicator (1 = spam, anything else = ham).

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::types::{Label, LabeledMessage, Message};
use crate::error::{PhishError, Result};

/// One record of a corpus file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// Message text
    pub text: String,
    /// Sender address
    #[serde(default)]
    pub sender: Option<String>,
    /// 1 for spam, anything else for ham
    pub label: u8,
}

impl CorpusRecord {
    fn into_labeled(self, default_sender: &str) -> LabeledMessage {
        let message = Message {
            text: self.text,
            sender: self.sender,
        };
        LabeledMessage::from_message(&message, Label::from_indicator(self.label), default_sender)
    }
}

/// Parse a JSON corpus, filling missing senders with `default_sender`
pub fn parse_corpus(json: &str, default_sender: &str) -> Result<Vec<LabeledMessage>> {
    let records: Vec<CorpusRecord> = serde_json::from_str(json)?;
    if records.is_empty() {
        return Err(PhishError::Corpus("corpus contains no examples".to_string()));
    }

    Ok(records
        .into_iter()
        .map(|record| record.into_labeled(default_sender))
        .collect())
}

/// Load a JSON corpus file
pub fn load_corpus<P: AsRef<Path>>(path: P, default_sender: &str) -> Result<Vec<LabeledMessage>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        PhishError::Corpus(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let examples = parse_corpus(&content, default_sender)?;
    let spam = examples.iter().filter(|e| e.label.is_spam()).count();
    info!(
        "Loaded {} training examples from {} ({} spam, {} ham)",
        examples.len(),
        path.display(),
        spam,
        examples.len() - spam
    );

    Ok(examples)
}

/// Small built-in corpus: two phishing lures and two friendly messages
pub fn demo_corpus() -> Vec<LabeledMessage> {
    vec![
        LabeledMessage::new(
            "Срочно обнови пароль по ссылке http://fake.com",
            "admin@gmail.com",
            Label::Spam,
        ),
        LabeledMessage::new(
            "Ваш счет заблокирован! Перейдите http://bank.ru",
            "support@yahoo.com",
            Label::Spam,
        ),
        LabeledMessage::new(
            "Привет, как дела? Встретимся завтра?",
            "friend@company.com",
            Label::Ham,
        ),
        LabeledMessage::new("Поздравляю с праздником!", "team@work.org", Label::Ham),
    ]
}
