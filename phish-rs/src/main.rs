//! Command-line phishing check
//!
//! # Usage
//!
//! ```bash
//! # Check a message against the built-in demo corpus
//! phish-check "Your account is locked! http://bank.example" support@bank.example
//!
//! # Train on a JSON corpus and print training statistics
//! phish-check --corpus corpus.json --stats "see you tomorrow" friend@example.com
//! ```

use clap::Parser;
use phish_rs::config::Config;
use phish_rs::form::{self, Verdict};
use phish_rs::spam::{demo_corpus, load_corpus, NaiveBayesClassifier};
use phish_rs::PhishError;
use std::path::Path;
use tracing::info;

#[derive(Parser)]
#[command(name = "phish-check")]
#[command(about = "Classify a message as phishing or safe", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, default_value = "phish.toml")]
    config: String,

    /// Training corpus (JSON), overrides the configured path
    #[arg(long)]
    corpus: Option<String>,

    /// Print training statistics as JSON
    #[arg(long)]
    stats: bool,

    /// Message text
    message: Option<String>,

    /// Sender address
    sender: Option<String>,
}

/// Result of one invocation
#[derive(Debug, PartialEq)]
enum Outcome {
    /// Lines for stdout
    Report(Vec<String>),
    /// A field was blank; the prompt goes to stderr
    MissingInput(String),
}

impl Outcome {
    fn exit_code(&self) -> i32 {
        match self {
            Outcome::Report(_) => 0,
            Outcome::MissingInput(_) => 2,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_found = Path::new(&cli.config).exists();
    let config = if config_found {
        Config::from_file(&cli.config)?
    } else {
        Config::default()
    };

    phish_rs::logging::init(&config.logging)?;
    if !config_found {
        info!("No config file found, using defaults");
    }

    let outcome = run(cli, &config)?;
    match &outcome {
        Outcome::Report(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Outcome::MissingInput(prompt) => eprintln!("{}", prompt),
    }

    std::process::exit(outcome.exit_code());
}

/// Train on the selected corpus and classify the message given on the command line
fn run(cli: Cli, config: &Config) -> anyhow::Result<Outcome> {
    let prompt = || Outcome::MissingInput(config.display.missing_input_prompt.clone());

    let message = cli.message.unwrap_or_default();
    let sender = cli.sender.unwrap_or_default();
    if form::validate_fields(&message, &sender).is_err() {
        return Ok(prompt());
    }

    let corpus_path = cli.corpus.or_else(|| config.training.corpus_path.clone());
    let examples = match corpus_path {
        Some(path) => load_corpus(&path, &config.training.default_sender)?,
        None => {
            info!("No corpus configured, training on built-in demo corpus");
            demo_corpus()
        }
    };

    let mut classifier = NaiveBayesClassifier::new();
    classifier.train(&examples);

    let mut lines = Vec::new();
    if cli.stats {
        lines.push(serde_json::to_string_pretty(&classifier.stats())?);
    }

    match form::check_message(&classifier, &message, &sender) {
        Ok(verdict) => {
            if verdict == Verdict::Phishing {
                info!("Message from {} classified as phishing", sender);
            }
            lines.push(verdict.display(&config.display).to_string());
            Ok(Outcome::Report(lines))
        }
        Err(PhishError::InvalidInput(_)) => Ok(prompt()),
        Err(e) => Err(e.into()),
    }
}
