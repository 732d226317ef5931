//! Command line argument parsing for the Polarity CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Polarity - a Naive Bayes sentiment classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "polarity")]
#[command(about = "A Naive Bayes sentiment classifier for movie review text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PolarityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PolarityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model from a labeled corpus and persist it
    Train(TrainArgs),

    /// Classify a single text
    Classify(ClassifyArgs),

    /// Interactively classify reviews typed on stdin
    Repl(ReplArgs),

    /// Show statistics for a trained model
    Stats(StatsArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the corpus directory
    #[arg(value_name = "CORPUS_DIR")]
    pub corpus_dir: PathBuf,

    /// Filename prefix of positive reviews
    #[arg(long, default_value = "movies-5")]
    pub positive_prefix: String,

    /// Filename prefix of negative reviews
    #[arg(long, default_value = "movies-1")]
    pub negative_prefix: String,

    /// Path to the stop word list
    #[arg(short, long, default_value = "stopwords.txt")]
    pub stop_list: PathBuf,

    /// Path to write the model cache
    #[arg(short, long, default_value = "model.dat")]
    pub cache: PathBuf,

    /// Overwrite an existing model cache
    #[arg(long)]
    pub force: bool,
}

/// Arguments for classifying a single text
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Path to the model cache
    #[arg(short, long, default_value = "model.dat")]
    pub cache: PathBuf,

    /// Path to the stop word list
    #[arg(short, long, default_value = "stopwords.txt")]
    pub stop_list: PathBuf,

    /// Corpus directory to train from when no cache exists
    #[arg(long)]
    pub corpus_dir: Option<PathBuf>,

    /// Filename prefix of positive reviews (used when training)
    #[arg(long, default_value = "movies-5")]
    pub positive_prefix: String,

    /// Filename prefix of negative reviews (used when training)
    #[arg(long, default_value = "movies-1")]
    pub negative_prefix: String,
}

/// Arguments for the interactive read loop
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Path to the model cache
    #[arg(short, long, default_value = "model.dat")]
    pub cache: PathBuf,

    /// Path to the stop word list
    #[arg(short, long, default_value = "stopwords.txt")]
    pub stop_list: PathBuf,

    /// Corpus directory to train from when no cache exists
    #[arg(long)]
    pub corpus_dir: Option<PathBuf>,

    /// Filename prefix of positive reviews (used when training)
    #[arg(long, default_value = "movies-5")]
    pub positive_prefix: String,

    /// Filename prefix of negative reviews (used when training)
    #[arg(long, default_value = "movies-1")]
    pub negative_prefix: String,
}

/// Arguments for model statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the model cache
    #[arg(short, long, default_value = "model.dat")]
    pub cache: PathBuf,

    /// Number of top tokens to show per class
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}
