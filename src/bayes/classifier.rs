//! Naive Bayes classification.
//!
//! Scores a text under each class's unigram language model with add-one
//! (Laplace) smoothing and returns the more likely label. Scores are
//! accumulated in log space so long inputs stay numerically stable.
//!
//! Two deliberate quirks of the scoring are preserved exactly:
//!
//! - the smoothing denominator adds the *combined* vocabulary size (the
//!   union over both tables) to each class total, rather than a per-class
//!   vocabulary;
//! - the decision rule is a strict `>`, so an exact tie between the two
//!   scores classifies as negative. There is no neutral outcome.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::bayes::model::{Label, SentimentModel};
use crate::error::Result;

/// Classifies text against a trained [`SentimentModel`].
///
/// The model is taken by value and never mutated; classifying the same text
/// twice yields the same label.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use polarity::analysis::analyzer::PipelineAnalyzer;
/// use polarity::analysis::tokenizer::word_punct::WordPunctTokenizer;
/// use polarity::bayes::classifier::BayesClassifier;
/// use polarity::bayes::frequency::FrequencyTable;
/// use polarity::bayes::model::{Label, SentimentModel};
///
/// let mut positive = FrequencyTable::new();
/// positive.update(vec!["love", "love", "great"]);
/// let mut negative = FrequencyTable::new();
/// negative.update(vec!["terrible", "awful", "boring"]);
///
/// let analyzer = Arc::new(PipelineAnalyzer::new(Arc::new(WordPunctTokenizer::new())));
/// let classifier = BayesClassifier::new(SentimentModel::new(positive, negative), analyzer);
///
/// assert_eq!(classifier.classify("love it").unwrap(), Label::Positive);
/// ```
pub struct BayesClassifier {
    model: SentimentModel,
    analyzer: Arc<dyn Analyzer>,
}

impl BayesClassifier {
    /// Create a classifier from a trained model and the analysis pipeline.
    ///
    /// The analyzer must be the same pipeline the model was trained with so
    /// stop words are excluded from scoring exactly as they were from
    /// counting.
    pub fn new(model: SentimentModel, analyzer: Arc<dyn Analyzer>) -> Self {
        BayesClassifier { model, analyzer }
    }

    /// Get the underlying model.
    pub fn model(&self) -> &SentimentModel {
        &self.model
    }

    /// Compute the (positive, negative) log-likelihood scores for a text.
    ///
    /// Every surviving token contributes
    /// `ln((count + 1) / (class_total + vocab_size))` to its class
    /// accumulator, where `vocab_size` is the combined vocabulary of both
    /// tables. Add-one smoothing keeps unseen tokens at a finite, non-zero
    /// probability.
    pub fn scores(&self, text: &str) -> Result<(f64, f64)> {
        let tokens = self.analyzer.analyze(text)?;

        let pos_total = self.model.positive().total() as f64;
        let neg_total = self.model.negative().total() as f64;
        let vocab_size = self.model.vocabulary_size() as f64;

        let mut pos_score = 0.0;
        let mut neg_score = 0.0;

        for token in tokens {
            let pos_count = (self.model.positive().get(&token.text) + 1) as f64;
            let neg_count = (self.model.negative().get(&token.text) + 1) as f64;

            pos_score += (pos_count / (pos_total + vocab_size)).ln();
            neg_score += (neg_count / (neg_total + vocab_size)).ln();
        }

        Ok((pos_score, neg_score))
    }

    /// Classify a text as positive or negative.
    ///
    /// Returns [`Label::Positive`] only when the positive score is strictly
    /// greater; ties resolve to [`Label::Negative`].
    pub fn classify(&self, text: &str) -> Result<Label> {
        let (pos_score, neg_score) = self.scores(text)?;
        Ok(Label::from_scores(pos_score, neg_score))
    }
}

impl std::fmt::Debug for BayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BayesClassifier")
            .field("analyzer", &self.analyzer.name())
            .field("vocabulary_size", &self.model.vocabulary_size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::PipelineAnalyzer;
    use crate::analysis::token_filter::stop::StopFilter;
    use crate::analysis::tokenizer::word_punct::WordPunctTokenizer;
    use crate::bayes::frequency::FrequencyTable;

    fn plain_analyzer() -> Arc<dyn Analyzer> {
        Arc::new(PipelineAnalyzer::new(Arc::new(WordPunctTokenizer::new())))
    }

    fn skewed_model() -> SentimentModel {
        let mut positive = FrequencyTable::new();
        positive.update(vec!["love", "love", "love", "great", "wonderful"]);
        let mut negative = FrequencyTable::new();
        negative.update(vec!["terrible", "terrible", "awful", "boring", "worst"]);
        SentimentModel::new(positive, negative)
    }

    #[test]
    fn test_skewed_classification() {
        let classifier = BayesClassifier::new(skewed_model(), plain_analyzer());

        assert_eq!(classifier.classify("I love this").unwrap(), Label::Positive);
        assert_eq!(
            classifier.classify("this is terrible").unwrap(),
            Label::Negative
        );
    }

    #[test]
    fn test_tie_resolves_to_negative() {
        // Symmetric tables: any out-of-vocabulary text scores identically
        // under both classes.
        let mut positive = FrequencyTable::new();
        positive.update(vec!["good"]);
        let mut negative = FrequencyTable::new();
        negative.update(vec!["bad"]);
        let classifier =
            BayesClassifier::new(SentimentModel::new(positive, negative), plain_analyzer());

        let (pos_score, neg_score) = classifier.scores("zebra quantum").unwrap();
        assert_eq!(pos_score, neg_score);
        assert_eq!(
            classifier.classify("zebra quantum").unwrap(),
            Label::Negative
        );
    }

    #[test]
    fn test_empty_input_is_negative() {
        // No tokens means both scores stay at zero, and the tie rule picks
        // negative.
        let classifier = BayesClassifier::new(skewed_model(), plain_analyzer());

        let (pos_score, neg_score) = classifier.scores("").unwrap();
        assert_eq!(pos_score, 0.0);
        assert_eq!(neg_score, 0.0);
        assert_eq!(classifier.classify("").unwrap(), Label::Negative);
    }

    #[test]
    fn test_all_stop_words_is_negative() {
        let tokenizer = Arc::new(WordPunctTokenizer::new());
        let analyzer = Arc::new(
            PipelineAnalyzer::new(tokenizer)
                .add_filter(Arc::new(StopFilter::from_words(vec!["this", "is", "it"]))),
        );
        let classifier = BayesClassifier::new(skewed_model(), analyzer);

        assert_eq!(classifier.classify("it is this").unwrap(), Label::Negative);
    }

    #[test]
    fn test_out_of_vocabulary_does_not_fail() {
        let classifier = BayesClassifier::new(skewed_model(), plain_analyzer());

        let (pos_score, neg_score) = classifier.scores("xylophone zeppelin").unwrap();
        assert!(pos_score.is_finite());
        assert!(neg_score.is_finite());

        // Smoothing gives every token probability mass, so a label is
        // always produced.
        let label = classifier.classify("xylophone zeppelin").unwrap();
        assert!(matches!(label, Label::Positive | Label::Negative));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let classifier = BayesClassifier::new(skewed_model(), plain_analyzer());

        let first = classifier.classify("a wonderful and great film").unwrap();
        let second = classifier.classify("a wonderful and great film").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_smoothing_uses_combined_vocabulary() {
        // One token in each class: vocab size is 2, totals are 1 each.
        // "good" scores ln(2/3) positive vs ln(1/3) negative.
        let mut positive = FrequencyTable::new();
        positive.update(vec!["good"]);
        let mut negative = FrequencyTable::new();
        negative.update(vec!["bad"]);
        let classifier =
            BayesClassifier::new(SentimentModel::new(positive, negative), plain_analyzer());

        let (pos_score, neg_score) = classifier.scores("good").unwrap();
        assert!((pos_score - (2.0f64 / 3.0).ln()).abs() < 1e-12);
        assert!((neg_score - (1.0f64 / 3.0).ln()).abs() < 1e-12);
    }
}
