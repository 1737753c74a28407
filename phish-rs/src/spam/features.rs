//! Feature extraction
//!
//! Turns a (message, sender) pair into a sparse bag of named counts: word
//! tokens, the sender domain, suspicious symbols and a link marker.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Symbols counted as literal substrings of the normalized message
pub const SUSPICIOUS_SYMBOLS: [&str; 5] = ["!", "!!", "...", "$", "@"];

/// Tokens of this many characters or fewer are dropped
pub const MIN_TOKEN_CHARS: usize = 2;

/// Name of the binary link marker
pub const HAS_LINK: &str = "hasLink";

const LINK_PATTERN: &str = r"(?i)https?://\S+";

fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(LINK_PATTERN).expect("link pattern is a valid regex"))
}

/// Sparse mapping from feature name to count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    counts: BTreeMap<String, u64>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to a feature, creating it at zero first
    pub fn increment(&mut self, feature: &str, count: u64) {
        *self.counts.entry(feature.to_string()).or_insert(0) += count;
    }

    /// Set a feature to exactly `count`, replacing any previous value
    pub fn set(&mut self, feature: impl Into<String>, count: u64) {
        self.counts.insert(feature.into(), count);
    }

    /// Count for a feature, zero when absent
    pub fn get(&self, feature: &str) -> u64 {
        self.counts.get(feature).copied().unwrap_or(0)
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.counts.contains_key(feature)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate (feature, count) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Stateless feature extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the feature set for a message and its sender
    pub fn extract(&self, message: &str, sender: &str) -> FeatureSet {
        let normalized = message.to_lowercase();
        let normalized = normalized.trim();
        let mut features = FeatureSet::new();

        for token in normalized
            .split_whitespace()
            .filter(|t| t.chars().count() > MIN_TOKEN_CHARS)
        {
            features.increment(token, 1);
        }

        // Structural features overwrite any word token with the same name
        features.set(domain_feature(sender), 1);

        for symbol in SUSPICIOUS_SYMBOLS {
            let count = normalized.matches(symbol).count() as u64;
            if count > 0 {
                features.set(format!("symbol:{}", symbol), count);
            }
        }

        let has_link = link_regex().is_match(normalized);
        features.set(HAS_LINK, u64::from(has_link));

        features
    }
}

/// Domain part of a sender address, or "unknown" when there is no `@`
pub fn sender_domain(sender: &str) -> &str {
    match sender.split_once('@') {
        Some((_, domain)) => domain,
        None => "unknown",
    }
}

fn domain_feature(sender: &str) -> String {
    format!("domain:{}", sender_domain(sender))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(message: &str, sender: &str) -> FeatureSet {
        FeatureExtractor::new().extract(message, sender)
    }

    #[test]
    fn test_empty_message() {
        let features = extract("   ", "user@example.com");
        assert_eq!(features.len(), 2);
        assert_eq!(features.get("domain:example.com"), 1);
        assert!(features.contains(HAS_LINK));
        assert_eq!(features.get(HAS_LINK), 0);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let features = extract("Hi to all of the team", "a@b.com");
        assert!(!features.contains("hi"));
        assert!(!features.contains("to"));
        assert!(!features.contains("of"));
        assert_eq!(features.get("all"), 1);
        assert_eq!(features.get("the"), 1);
        assert_eq!(features.get("team"), 1);
    }

    #[test]
    fn test_tokens_lowercased_and_counted() {
        let features = extract("  Free FREE free money  ", "a@b.com");
        assert_eq!(features.get("free"), 3);
        assert_eq!(features.get("money"), 1);
    }

    #[test]
    fn test_token_length_counts_characters() {
        // Two Cyrillic letters take four bytes but are still too short
        let features = extract("по ссылке", "a@b.com");
        assert!(!features.contains("по"));
        assert_eq!(features.get("ссылке"), 1);
    }

    #[test]
    fn test_token_length_counts_scalar_values() {
        // One emoji is a single char even though it spans two UTF-16 units
        let features = extract("a😀 ab😀 \u{0085}ok\u{0085}", "a@b.com");
        assert!(!features.contains("a😀"));
        assert_eq!(features.get("ab😀"), 1);
        // NEL separates tokens like any other whitespace
        assert!(!features.contains("ok"));
        assert_eq!(features.len(), 3);
    }

    #[test]
    fn test_sender_domain() {
        assert_eq!(sender_domain("admin@gmail.com"), "gmail.com");
        assert_eq!(sender_domain("no-at-sign"), "unknown");
        assert_eq!(sender_domain("a@b@c.org"), "b@c.org");
        assert_eq!(sender_domain("trailing@"), "");
    }

    #[test]
    fn test_domain_feature_always_one() {
        let features = extract("domain:x.com domain:x.com", "me@x.com");
        assert_eq!(features.get("domain:x.com"), 1);

        let features = extract("hello there", "nobody");
        assert_eq!(features.get("domain:unknown"), 1);
    }

    #[test]
    fn test_symbols_counted_literally() {
        let features = extract("win!!! now... $$ a@b", "x@y.com");
        assert_eq!(features.get("symbol:!"), 3);
        assert_eq!(features.get("symbol:!!"), 1);
        assert_eq!(features.get("symbol:..."), 1);
        assert_eq!(features.get("symbol:$"), 2);
        assert_eq!(features.get("symbol:@"), 1);
    }

    #[test]
    fn test_absent_symbols_omitted() {
        let features = extract("plain words only", "x@y.com");
        for symbol in SUSPICIOUS_SYMBOLS {
            assert!(!features.contains(&format!("symbol:{}", symbol)));
        }
    }

    #[test]
    fn test_link_detection() {
        assert_eq!(extract("go to HTTPS://Bank.example/login", "a@b.c").get(HAS_LINK), 1);
        assert_eq!(extract("see http://x", "a@b.c").get(HAS_LINK), 1);
        assert_eq!(extract("bare http:// here", "a@b.c").get(HAS_LINK), 0);
        assert_eq!(extract("ftp://files.example", "a@b.c").get(HAS_LINK), 0);
    }

    #[test]
    fn test_feature_set_accessors() {
        let mut set = FeatureSet::new();
        assert!(set.is_empty());
        set.increment("alpha", 2);
        set.increment("alpha", 1);
        set.set("beta", 0);
        assert_eq!(set.get("alpha"), 3);
        assert_eq!(set.get("gamma"), 0);
        assert!(set.contains("beta"));
        assert_eq!(set.total(), 3);
        let names: Vec<&str> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }
}
