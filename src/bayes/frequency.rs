//! Token frequency tables.
//!
//! A [`FrequencyTable`] maps tokens to occurrence counts for one sentiment
//! class. Tables start empty and are only mutated through [`update`]
//! (`FrequencyTable::update`); absent tokens implicitly have count zero, and
//! no zero-count entry is ever stored.
//!
//! # Examples
//!
//! ```
//! use polarity::bayes::frequency::FrequencyTable;
//!
//! let mut table = FrequencyTable::new();
//! table.update(vec!["like", "this", "like"]);
//!
//! assert_eq!(table.get("like"), 2);
//! assert_eq!(table.get("this"), 1);
//! assert_eq!(table.get("absent"), 0);
//! assert_eq!(table.total(), 3);
//! ```

use std::collections::HashMap;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

/// A mapping from token to positive occurrence count for one sentiment class.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: HashMap<String, u64, RandomState>,
}

impl FrequencyTable {
    /// Create a new empty frequency table.
    pub fn new() -> Self {
        FrequencyTable {
            counts: HashMap::default(),
        }
    }

    /// Increment the count of every token in the sequence by one, inserting
    /// with count 1 when absent.
    ///
    /// This is the sole mutator of a table. The final counts do not depend
    /// on the order of the tokens. Tokens are counted exactly as given;
    /// case folding is the tokenizer's responsibility.
    pub fn update<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for token in tokens {
            *self.counts.entry(token.into()).or_insert(0) += 1;
        }
    }

    /// Get the count for a token, or 0 if the token is absent.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Check whether a token is present in the table.
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Get the sum of all counts in the table.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Get the number of distinct tokens in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over the distinct tokens in the table.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(|k| k.as_str())
    }

    /// Iterate over (token, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
