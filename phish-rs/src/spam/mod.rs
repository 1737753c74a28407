//! Phishing classification module
//!
//! Provides feature extraction and a Naive Bayes classifier trained on
//! labelled messages.

pub mod classifier;
pub mod corpus;
pub mod features;
pub mod types;

pub use classifier::{ClassModel, NaiveBayesClassifier};
pub use corpus::{demo_corpus, load_corpus, parse_corpus, CorpusRecord};
pub use features::{FeatureExtractor, FeatureSet, SUSPICIOUS_SYMBOLS};
pub use types::*;
