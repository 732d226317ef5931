//! The trained sentiment model.
//!
//! A [`SentimentModel`] is the pair of per-class frequency tables produced
//! by training. Once constructed it is immutable; classification only reads
//! it, so a model can be shared freely between classifiers.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::bayes::frequency::FrequencyTable;
use crate::error::PolarityError;

/// A sentiment class label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Positive sentiment
    Positive,
    /// Negative sentiment
    Negative,
}

impl Label {
    /// Pick the label for a (positive, negative) log-likelihood pair.
    ///
    /// The decision rule is a strict `>`: an exact tie is negative.
    pub fn from_scores(positive: f64, negative: f64) -> Self {
        if positive > negative {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// Get the string form of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "positive",
            Label::Negative => "negative",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Label {
    type Err = PolarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Label::Positive),
            "negative" => Ok(Label::Negative),
            other => Err(PolarityError::invalid_operation(format!(
                "unknown label: {other}"
            ))),
        }
    }
}

/// The trained state of the classifier: one frequency table per class.
///
/// # Examples
///
/// ```
/// use polarity::bayes::frequency::FrequencyTable;
/// use polarity::bayes::model::SentimentModel;
///
/// let mut positive = FrequencyTable::new();
/// positive.update(vec!["love", "great"]);
/// let mut negative = FrequencyTable::new();
/// negative.update(vec!["terrible", "love"]);
///
/// let model = SentimentModel::new(positive, negative);
/// // "love" appears in both tables but counts once in the vocabulary.
/// assert_eq!(model.vocabulary_size(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentModel {
    positive: FrequencyTable,
    negative: FrequencyTable,
}

impl SentimentModel {
    /// Create a model from a pair of trained tables.
    pub fn new(positive: FrequencyTable, negative: FrequencyTable) -> Self {
        SentimentModel { positive, negative }
    }

    /// Get the positive-class frequency table.
    pub fn positive(&self) -> &FrequencyTable {
        &self.positive
    }

    /// Get the negative-class frequency table.
    pub fn negative(&self) -> &FrequencyTable {
        &self.negative
    }

    /// Get the frequency table for the given class.
    pub fn table(&self, label: Label) -> &FrequencyTable {
        match label {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }

    /// Get the size of the combined vocabulary: the union of the distinct
    /// tokens across both tables.
    ///
    /// Recomputed on demand; it sizes the smoothing denominator at
    /// classification time.
    pub fn vocabulary_size(&self) -> usize {
        let mut vocabulary: HashSet<&str, RandomState> =
            HashSet::with_capacity_and_hasher(self.positive.len(), RandomState::default());
        vocabulary.extend(self.positive.keys());
        vocabulary.extend(self.negative.keys());
        vocabulary.len()
    }

    /// Check if both tables are empty (an untrained model).
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}
