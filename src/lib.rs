//! # Polarity
//!
//! A Naive Bayes sentiment classifier for movie review text.
//!
//! Polarity learns word-frequency statistics from a labeled corpus of
//! reviews and classifies free text as expressing positive or negative
//! sentiment.
//!
//! ## Features
//!
//! - Word/punctuation tokenization with a pluggable analysis pipeline
//! - Stop word filtering shared by training and classification
//! - Add-one (Laplace) smoothed log-likelihood scoring
//! - Checksummed binary model cache with load-or-train orchestration
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use polarity::analysis::analyzer::sentiment_analyzer;
//! use polarity::bayes::classifier::BayesClassifier;
//! use polarity::bayes::model::Label;
//! use polarity::bayes::trainer::Trainer;
//!
//! # fn main() -> polarity::error::Result<()> {
//! let analyzer = Arc::new(sentiment_analyzer("stopwords.txt")?);
//! let trainer = Trainer::new(analyzer.clone(), "movies-5", "movies-1");
//! let model = trainer.train("movie_reviews")?;
//!
//! let classifier = BayesClassifier::new(model, analyzer);
//! assert_eq!(classifier.classify("I love this movie")?, Label::Positive);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod bayes;
pub mod cli;
pub mod error;
pub mod storage;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
