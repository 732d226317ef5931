//! Stop filter implementation.
//!
//! This module provides a filter that removes common low-information words
//! (stop words) from the token stream. The same stop word set is used during
//! training and classification, so a word excluded from the frequency tables
//! is also excluded from scoring.
//!
//! There is no built-in default word list. The set is loaded from an
//! external word-list file, tokenized with the same tokenizer used for
//! documents so that both sides agree on token format.
//!
//! # Examples
//!
//! ```
//! use polarity::analysis::token::Token;
//! use polarity::analysis::token_filter::Filter;
//! use polarity::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["the", "is"]);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("movie", 1),
//!     Token::new("is", 2),
//!     Token::new("great", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "movie");
//! assert_eq!(result[1].text, "great");
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{PolarityError, Result};

/// A filter that removes stop words from the token stream.
///
/// The word set is immutable after construction and shared read-only by
/// every consumer, so one filter can back both the trainer and the
/// classifier.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the given stop word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarity::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Create a new stop filter by reading and tokenizing a word-list file.
    ///
    /// The file is tokenized with the given tokenizer so the resulting set
    /// matches the token format of analyzed documents. A missing or
    /// unreadable file is a fatal [`PolarityError::StopwordLoad`] error.
    pub fn from_path<P: AsRef<Path>>(path: P, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            PolarityError::stopword_load(format!(
                "failed to read stop list {}: {e}",
                path.display()
            ))
        })?;

        let stop_words: HashSet<String> = tokenizer.tokenize(&text)?.map(|t| t.text).collect();
        Ok(Self::with_stop_words(stop_words))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !stop_words.contains(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::tokenizer::word_punct::WordPunctTokenizer;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("test", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_is_stop_word() {
        let filter = StopFilter::from_words(vec!["the"]);
        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("movie"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "The\nand\nof").unwrap();

        let tokenizer = WordPunctTokenizer::new();
        let filter = StopFilter::from_path(file.path(), &tokenizer).unwrap();

        // Entries are tokenized, so "The" is stored lower-cased.
        assert!(filter.is_stop_word("the"));
        assert!(filter.is_stop_word("and"));
        assert!(filter.is_stop_word("of"));
        assert!(!filter.is_stop_word("movie"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let tokenizer = WordPunctTokenizer::new();
        let result = StopFilter::from_path("no/such/stoplist.txt", &tokenizer);
        assert!(matches!(result, Err(PolarityError::StopwordLoad(_))));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::from_words(vec!["the"]).name(), "stop");
    }
}
