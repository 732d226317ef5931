//! Word/punctuation tokenizer implementation.
//!
//! Splits text into lower-cased word tokens and single-character punctuation
//! tokens, preserving their order of occurrence. Whitespace produces no
//! tokens.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that emits words and standalone punctuation symbols.
///
/// A word is a maximal run of ASCII alphanumerics, apostrophes, underscores,
/// or hyphens, emitted lower-cased. Any other non-whitespace character is
/// emitted verbatim as its own single-character token.
///
/// # Examples
///
/// ```
/// use polarity::analysis::token::Token;
/// use polarity::analysis::tokenizer::Tokenizer;
/// use polarity::analysis::tokenizer::word_punct::WordPunctTokenizer;
///
/// let tokenizer = WordPunctTokenizer::new();
/// let tokens: Vec<Token> = tokenizer.tokenize("Great movie!").unwrap().collect();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].text, "great");
/// assert_eq!(tokens[1].text, "movie");
/// assert_eq!(tokens[2].text, "!");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordPunctTokenizer;

impl WordPunctTokenizer {
    /// Create a new word/punctuation tokenizer.
    pub fn new() -> Self {
        WordPunctTokenizer
    }

    /// Check whether a character belongs to a word run.
    fn is_word_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '\'' | '_' | '-')
    }
}

impl Tokenizer for WordPunctTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut buffer = String::new();
        let mut word_start = 0;

        for (offset, c) in text.char_indices() {
            if Self::is_word_char(c) {
                if buffer.is_empty() {
                    word_start = offset;
                }
                buffer.push(c);
                continue;
            }

            if !buffer.is_empty() {
                tokens.push(Token::with_offsets(
                    buffer.to_lowercase(),
                    position,
                    word_start,
                    offset,
                ));
                position += 1;
                buffer.clear();
            }

            // Punctuation keeps its original case; whitespace yields nothing.
            if !c.is_whitespace() {
                tokens.push(Token::with_offsets(
                    c.to_string(),
                    position,
                    offset,
                    offset + c.len_utf8(),
                ));
                position += 1;
            }
        }

        if !buffer.is_empty() {
            tokens.push(Token::with_offsets(
                buffer.to_lowercase(),
                position,
                word_start,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_punct"
    }
}
