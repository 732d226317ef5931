//! End-to-end tests: corpus training, classification, and model caching.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use polarity::analysis::analyzer::{Analyzer, sentiment_analyzer};
use polarity::bayes::classifier::BayesClassifier;
use polarity::bayes::model::Label;
use polarity::bayes::trainer::Trainer;
use polarity::error::PolarityError;
use polarity::storage::cache::ModelCache;

const STOP_WORDS: &str = "a\nan\nand\nis\nit\nthe\nthis\nto\nwas\ni\n";

/// Build a temp directory holding a stop list and a small skewed corpus:
/// "love" dominates positive reviews and "terrible" negative ones.
fn setup_corpus() -> (TempDir, TempDir) {
    let corpus = TempDir::new().unwrap();
    let files = [
        ("movies-5-0001.txt", "I love this movie. Love the cast!"),
        ("movies-5-0002.txt", "Such a wonderful story, love it."),
        ("movies-5-0003.txt", "Great acting and a great ending."),
        ("movies-1-0001.txt", "This was terrible. Truly terrible."),
        ("movies-1-0002.txt", "A boring, terrible waste of time."),
        ("movies-1-0003.txt", "The worst film I have ever seen."),
        ("movies-3-0001.txt", "It was released last year."),
    ];
    for (name, contents) in files {
        fs::write(corpus.path().join(name), contents).unwrap();
    }

    let config = TempDir::new().unwrap();
    fs::write(config.path().join("stopwords.txt"), STOP_WORDS).unwrap();

    (corpus, config)
}

fn analyzer_for(config: &TempDir) -> Arc<dyn Analyzer> {
    Arc::new(sentiment_analyzer(config.path().join("stopwords.txt")).unwrap())
}

fn train(corpus: &TempDir, config: &TempDir) -> BayesClassifier {
    let analyzer = analyzer_for(config);
    let trainer = Trainer::new(analyzer.clone(), "movies-5", "movies-1");
    let model = trainer.train(corpus.path()).unwrap();
    BayesClassifier::new(model, analyzer)
}

#[test]
fn test_end_to_end_classification() {
    let (corpus, config) = setup_corpus();
    let classifier = train(&corpus, &config);

    assert_eq!(classifier.classify("I love this").unwrap(), Label::Positive);
    assert_eq!(
        classifier.classify("this is terrible").unwrap(),
        Label::Negative
    );
}

#[test]
fn test_training_skips_neutral_and_stop_words() {
    let (corpus, config) = setup_corpus();
    let classifier = train(&corpus, &config);
    let model = classifier.model();

    // The movies-3 file belongs to neither class.
    assert_eq!(model.positive().get("released"), 0);
    assert_eq!(model.negative().get("released"), 0);

    // Stop words never reach the tables.
    assert_eq!(model.positive().get("the"), 0);
    assert_eq!(model.negative().get("the"), 0);

    // Words are counted lower-cased: "Love", "love" and "Love!" all fold.
    assert_eq!(model.positive().get("love"), 3);
    assert_eq!(model.negative().get("terrible"), 3);
}

#[test]
fn test_out_of_vocabulary_text() {
    let (corpus, config) = setup_corpus();
    let classifier = train(&corpus, &config);

    let (pos_score, neg_score) = classifier.scores("zygomorphic quasar").unwrap();
    assert!(pos_score.is_finite());
    assert!(neg_score.is_finite());
    assert!(classifier.classify("zygomorphic quasar").is_ok());
}

#[test]
fn test_cache_round_trip() {
    let (corpus, config) = setup_corpus();
    let classifier = train(&corpus, &config);

    let cache = ModelCache::new(config.path().join("model.dat"));
    cache.save(classifier.model()).unwrap();
    let loaded = cache.load().unwrap();

    assert_eq!(&loaded, classifier.model());

    // The reloaded model classifies identically.
    let reloaded = BayesClassifier::new(loaded, analyzer_for(&config));
    assert_eq!(
        reloaded.classify("love the wonderful cast").unwrap(),
        classifier.classify("love the wonderful cast").unwrap()
    );
}

#[test]
fn test_load_or_train_prefers_cache() {
    let (corpus, config) = setup_corpus();
    let analyzer = analyzer_for(&config);
    let trainer = Trainer::new(analyzer, "movies-5", "movies-1");

    let cache = ModelCache::new(config.path().join("model.dat"));
    let trained = cache.load_or_train(&trainer, corpus.path()).unwrap();
    assert!(cache.exists());

    // Remove the corpus: the second call must come from the cache.
    drop(corpus);
    let loaded = cache
        .load_or_train(&trainer, Path::new("gone/corpus"))
        .unwrap();
    assert_eq!(loaded, trained);
}

#[test]
fn test_corrupt_cache_propagates() {
    let (corpus, config) = setup_corpus();
    let analyzer = analyzer_for(&config);
    let trainer = Trainer::new(analyzer, "movies-5", "movies-1");

    let cache_path = config.path().join("model.dat");
    let cache = ModelCache::new(&cache_path);
    cache.load_or_train(&trainer, corpus.path()).unwrap();

    // Corrupt the payload; load_or_train must surface the error rather than
    // silently retraining.
    let mut bytes = fs::read(&cache_path).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    fs::write(&cache_path, &bytes).unwrap();

    let result = cache.load_or_train(&trainer, corpus.path());
    assert!(matches!(result, Err(PolarityError::CacheCorrupt(_))));
}

#[test]
fn test_missing_stop_list_is_fatal() {
    let result = sentiment_analyzer("definitely/not/here.txt");
    assert!(matches!(result, Err(PolarityError::StopwordLoad(_))));
}

#[test]
fn test_missing_corpus_is_fatal() {
    let (_corpus, config) = setup_corpus();
    let analyzer = analyzer_for(&config);
    let trainer = Trainer::new(analyzer, "movies-5", "movies-1");

    let result = trainer.train("does/not/exist");
    assert!(matches!(result, Err(PolarityError::CorpusNotFound(_))));

    // Nothing was persisted on failure.
    assert!(!ModelCache::new(config.path().join("model.dat")).exists());
}
