//! Command implementations for the Polarity CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, sentiment_analyzer};
use crate::bayes::classifier::BayesClassifier;
use crate::bayes::frequency::FrequencyTable;
use crate::bayes::model::{Label, SentimentModel};
use crate::bayes::trainer::Trainer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{PolarityError, Result};
use crate::storage::cache::ModelCache;

/// Execute a CLI command.
pub fn execute_command(args: PolarityArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Repl(repl_args) => repl(repl_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
    }
}

/// Train a model and persist it to the cache.
fn train(args: TrainArgs, cli_args: &PolarityArgs) -> Result<()> {
    let cache = ModelCache::new(&args.cache);
    if cache.exists() && !args.force {
        return Err(PolarityError::invalid_operation(format!(
            "model cache {} already exists. Use --force to retrain.",
            args.cache.display()
        )));
    }

    if cli_args.verbosity() > 0 {
        println!("Training from corpus: {}", args.corpus_dir.display());
    }

    let analyzer = Arc::new(sentiment_analyzer(&args.stop_list)?);
    let trainer = Trainer::new(
        analyzer,
        args.positive_prefix.clone(),
        args.negative_prefix.clone(),
    );

    let verbose = cli_args.verbosity() > 1;
    let mut files_processed = 0;
    let model = trainer.train_with_progress(&args.corpus_dir, |index, total, name| {
        files_processed = total;
        if verbose {
            println!("Training on file {index} of {total}: {name}");
        }
    })?;

    cache.save(&model)?;

    output_result(
        "Model trained successfully",
        &TrainResult {
            files_processed,
            positive_total: model.positive().total(),
            negative_total: model.negative().total(),
            vocabulary_size: model.vocabulary_size(),
            cache_path: args.cache.display().to_string(),
        },
        cli_args,
    )
}

/// Classify a single text.
fn classify(args: ClassifyArgs, cli_args: &PolarityArgs) -> Result<()> {
    let classifier = build_classifier(
        &args.cache,
        &args.stop_list,
        args.corpus_dir.as_deref(),
        &args.positive_prefix,
        &args.negative_prefix,
        cli_args,
    )?;

    // The scores already determine the label; analyze the text once.
    let (positive_score, negative_score) = classifier.scores(&args.text)?;
    let label = Label::from_scores(positive_score, negative_score);

    output_result(
        "Classification result",
        &ClassifyResult {
            label: label.to_string(),
            positive_score,
            negative_score,
        },
        cli_args,
    )
}

/// Interactive read loop: classify each line typed on stdin until `exit`.
fn repl(args: ReplArgs, cli_args: &PolarityArgs) -> Result<()> {
    let classifier = build_classifier(
        &args.cache,
        &args.stop_list,
        args.corpus_dir.as_deref(),
        &args.positive_prefix,
        &args.negative_prefix,
        cli_args,
    )?;

    println!("Type 'exit' to quit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("Enter your review: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let review = line.trim();
        if review.eq_ignore_ascii_case("exit") {
            break;
        }
        if review.is_empty() {
            continue;
        }

        let label = classifier.classify(review)?;
        println!("Prediction: {label}");
    }

    Ok(())
}

/// Show statistics for a persisted model.
fn stats(args: StatsArgs, cli_args: &PolarityArgs) -> Result<()> {
    let cache = ModelCache::new(&args.cache);
    let model = cache.load()?;

    output_result(
        "Model statistics",
        &ModelStats {
            cache_path: args.cache.display().to_string(),
            vocabulary_size: model.vocabulary_size(),
            positive: class_stats(model.positive(), args.top),
            negative: class_stats(model.negative(), args.top),
        },
        cli_args,
    )
}

/// Summarize one class table, with the `top` most frequent tokens.
fn class_stats(table: &FrequencyTable, top: usize) -> ClassStats {
    let mut tokens: Vec<(String, u64)> = table.iter().map(|(t, c)| (t.to_string(), c)).collect();
    tokens.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tokens.truncate(top);

    ClassStats {
        total_tokens: table.total(),
        unique_tokens: table.len(),
        top_tokens: tokens,
    }
}

/// Build a classifier from the cache, training first when the cache is
/// missing and a corpus directory was given.
fn build_classifier(
    cache_path: &Path,
    stop_list: &Path,
    corpus_dir: Option<&Path>,
    positive_prefix: &str,
    negative_prefix: &str,
    cli_args: &PolarityArgs,
) -> Result<BayesClassifier> {
    let analyzer: Arc<dyn Analyzer> = Arc::new(sentiment_analyzer(stop_list)?);
    let cache = ModelCache::new(cache_path);

    let model: SentimentModel = if cache.exists() {
        if cli_args.verbosity() > 1 {
            println!("Loading cached model from {}", cache_path.display());
        }
        cache.load()?
    } else if let Some(corpus_dir) = corpus_dir {
        if cli_args.verbosity() > 0 {
            println!("No model cache found - training from {}", corpus_dir.display());
        }
        let trainer = Trainer::new(analyzer.clone(), positive_prefix, negative_prefix);
        cache.load_or_train(&trainer, corpus_dir)?
    } else {
        return Err(PolarityError::invalid_operation(format!(
            "no model cache at {} and no --corpus-dir to train from",
            cache_path.display()
        )));
    };

    Ok(BayesClassifier::new(model, analyzer))
}
