//! Token filter implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform a token stream.
pub trait Filter: Send + Sync {
    /// Filter the given token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod stop;

// Re-export all filters for convenient access
pub use stop::StopFilter;
