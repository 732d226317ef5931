//! Corpus training.
//!
//! The trainer walks a directory of labeled review files, analyzes each one,
//! and routes its tokens to the positive or negative frequency table based
//! on a filename-prefix convention. Label assignment never inspects file
//! contents.
//!
//! Training always starts from two empty tables, so re-running it over the
//! same corpus produces the same model. There is no incremental update of an
//! existing model.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::bayes::frequency::FrequencyTable;
use crate::bayes::model::SentimentModel;
use crate::error::{PolarityError, Result};

/// Trains a [`SentimentModel`] from a labeled corpus directory.
#[derive(Clone)]
pub struct Trainer {
    analyzer: Arc<dyn Analyzer>,
    positive_prefix: String,
    negative_prefix: String,
}

impl Trainer {
    /// Create a new trainer.
    ///
    /// Files whose names start with `positive_prefix` feed the positive
    /// table, files starting with `negative_prefix` feed the negative table,
    /// and all other files are ignored.
    pub fn new<S: Into<String>>(
        analyzer: Arc<dyn Analyzer>,
        positive_prefix: S,
        negative_prefix: S,
    ) -> Self {
        Trainer {
            analyzer,
            positive_prefix: positive_prefix.into(),
            negative_prefix: negative_prefix.into(),
        }
    }

    /// Get the analyzer used by this trainer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Train a model from the files directly under `corpus_dir`.
    ///
    /// The listing is non-recursive. A missing directory or one without any
    /// files is a fatal [`PolarityError::CorpusNotFound`]; an unreadable
    /// file aborts training with the underlying I/O error and no model is
    /// produced.
    pub fn train<P: AsRef<Path>>(&self, corpus_dir: P) -> Result<SentimentModel> {
        self.train_with_progress(corpus_dir, |_, _, _| {})
    }

    /// Train a model, invoking `progress` with `(index, total, filename)`
    /// before each file is processed.
    pub fn train_with_progress<P, F>(&self, corpus_dir: P, mut progress: F) -> Result<SentimentModel>
    where
        P: AsRef<Path>,
        F: FnMut(usize, usize, &str),
    {
        let corpus_dir = corpus_dir.as_ref();
        let files = self.list_corpus_files(corpus_dir)?;

        let mut positive = FrequencyTable::new();
        let mut negative = FrequencyTable::new();

        let total = files.len();
        for (index, (path, file_name)) in files.iter().enumerate() {
            progress(index + 1, total, file_name);

            let text = fs::read_to_string(path)?;
            let tokens: Vec<String> = self.analyzer.analyze(&text)?.map(|t| t.text).collect();

            if file_name.starts_with(&self.positive_prefix) {
                positive.update(tokens);
            } else if file_name.starts_with(&self.negative_prefix) {
                negative.update(tokens);
            }
            // Files matching neither prefix belong to no class.
        }

        Ok(SentimentModel::new(positive, negative))
    }

    /// List the files directly under the corpus directory as (path, name)
    /// pairs, sorted by name for deterministic training runs.
    ///
    /// Names are converted lossily so a file with a non-UTF-8 name still
    /// counts as part of the corpus and is routed by its displayable prefix.
    fn list_corpus_files(&self, corpus_dir: &Path) -> Result<Vec<(PathBuf, String)>> {
        let entries = fs::read_dir(corpus_dir).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                PolarityError::corpus_not_found(corpus_dir.display().to_string())
            } else {
                PolarityError::Io(e)
            }
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                let name = entry.file_name().to_string_lossy().into_owned();
                files.push((entry.path(), name));
            }
        }
        files.sort_by(|a, b| a.1.cmp(&b.1));

        if files.is_empty() {
            return Err(PolarityError::corpus_not_found(format!(
                "no training files in {}",
                corpus_dir.display()
            )));
        }

        Ok(files)
    }
}

impl std::fmt::Debug for Trainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trainer")
            .field("analyzer", &self.analyzer.name())
            .field("positive_prefix", &self.positive_prefix)
            .field("negative_prefix", &self.negative_prefix)
            .finish()
    }
}
