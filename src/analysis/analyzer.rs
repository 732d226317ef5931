//! Analyzers that combine a tokenizer with a chain of token filters.
//!
//! The analyzer is the single entry point the trainer and the classifier use
//! to turn raw text into a filtered token stream. Both sides share the same
//! pipeline, which guarantees that stop words are excluded from frequency
//! counting and from scoring alike.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use polarity::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use polarity::analysis::token_filter::stop::StopFilter;
//! use polarity::analysis::tokenizer::word_punct::WordPunctTokenizer;
//!
//! let tokenizer = Arc::new(WordPunctTokenizer::new());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));
//!
//! let tokens: Vec<_> = analyzer.analyze("The plot AND the cast").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "plot");
//! assert_eq!(tokens[1].text, "cast");
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::word_punct::WordPunctTokenizer;
use crate::error::Result;

/// Trait for analyzers that convert raw text into a token stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// Filters are applied sequentially in the order they were added.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Build the standard sentiment analysis pipeline.
///
/// Word/punctuation tokenization followed by stop word filtering, with the
/// stop list loaded from the given file using the same tokenizer. A missing
/// stop list is a fatal error.
pub fn sentiment_analyzer<P: AsRef<Path>>(stop_list: P) -> Result<PipelineAnalyzer> {
    let tokenizer = Arc::new(WordPunctTokenizer::new());
    let stop_filter = StopFilter::from_path(stop_list, tokenizer.as_ref())?;

    Ok(PipelineAnalyzer::new(tokenizer).add_filter(Arc::new(stop_filter)))
}
