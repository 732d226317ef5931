//! Text analysis module for Polarity.
//!
//! This module provides the text analysis functionality shared by training
//! and classification: tokenization, stop word filtering, and the analysis
//! pipeline that combines them.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
