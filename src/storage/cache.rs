//! File-backed model cache.
//!
//! A trained [`SentimentModel`] is persisted as a small framed binary file:
//! magic bytes, a format version, a CRC32 checksum of the payload, the
//! payload length, and the bincode-encoded model. The frame lets a load
//! distinguish "no cache" (a missing file) from "corrupt cache" (bad magic,
//! wrong version, truncation, or a checksum mismatch), which is propagated
//! rather than silently retrained.
//!
//! # Examples
//!
//! ```no_run
//! use polarity::bayes::model::SentimentModel;
//! use polarity::storage::cache::ModelCache;
//!
//! # fn main() -> polarity::error::Result<()> {
//! let cache = ModelCache::new("model.dat");
//! let model = SentimentModel::default();
//! cache.save(&model)?;
//! assert_eq!(cache.load()?, model);
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::bayes::model::SentimentModel;
use crate::bayes::trainer::Trainer;
use crate::error::{PolarityError, Result};

/// Magic bytes identifying a Polarity model cache file.
const MAGIC: &[u8; 4] = b"PLRM";

/// Current cache format version.
const FORMAT_VERSION: u32 = 1;

/// Size of the frame header: magic, version, checksum, payload length.
const HEADER_LEN: u64 = 4 + 4 + 4 + 8;

/// A file-backed cache for a trained model.
#[derive(Clone, Debug)]
pub struct ModelCache {
    path: PathBuf,
}

impl ModelCache {
    /// Create a cache handle for the given file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ModelCache { path: path.into() }
    }

    /// Get the cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether a cache file exists.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Persist a model, replacing any existing cache file.
    pub fn save(&self, model: &SentimentModel) -> Result<()> {
        let payload = bincode::serialize(model)
            .map_err(|e| PolarityError::serialization(format!("failed to encode model: {e}")))?;

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&payload);
        let checksum = hasher.finalize();

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(MAGIC)?;
        writer.write_u32::<LittleEndian>(FORMAT_VERSION)?;
        writer.write_u32::<LittleEndian>(checksum)?;
        writer.write_u64::<LittleEndian>(payload.len() as u64)?;
        writer.write_all(&payload)?;
        writer.flush()?;

        Ok(())
    }

    /// Load a previously persisted model.
    ///
    /// A missing file surfaces as an I/O error; a file that exists but
    /// cannot be decoded as a model is a [`PolarityError::CacheCorrupt`].
    pub fn load(&self) -> Result<SentimentModel> {
        let file = File::open(&self.path)?;
        let file_len = file.metadata()?.len();
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 4];
        reader
            .read_exact(&mut magic)
            .map_err(|_| self.corrupt("truncated header"))?;
        if magic != *MAGIC {
            return Err(self.corrupt("bad magic bytes"));
        }

        let version = reader
            .read_u32::<LittleEndian>()
            .map_err(|_| self.corrupt("truncated header"))?;
        if version != FORMAT_VERSION {
            return Err(self.corrupt(format!("unsupported format version {version}")));
        }

        let checksum = reader
            .read_u32::<LittleEndian>()
            .map_err(|_| self.corrupt("truncated header"))?;
        let payload_len = reader
            .read_u64::<LittleEndian>()
            .map_err(|_| self.corrupt("truncated header"))?;

        // A corrupt length field must not drive the allocation below.
        if payload_len > file_len.saturating_sub(HEADER_LEN) {
            return Err(self.corrupt("implausible payload length"));
        }

        let mut payload = vec![0u8; payload_len as usize];
        reader
            .read_exact(&mut payload)
            .map_err(|_| self.corrupt("truncated payload"))?;

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&payload);
        if hasher.finalize() != checksum {
            return Err(self.corrupt("checksum mismatch"));
        }

        bincode::deserialize(&payload).map_err(|e| self.corrupt(format!("decode failed: {e}")))
    }

    /// Delete the cache file if it exists.
    pub fn delete(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Load the cached model if the cache file exists, otherwise train from
    /// the corpus and persist the result before returning it.
    ///
    /// A corrupt cache propagates as an error instead of falling back to
    /// retraining, so a format mismatch is never masked.
    pub fn load_or_train<P: AsRef<Path>>(
        &self,
        trainer: &Trainer,
        corpus_dir: P,
    ) -> Result<SentimentModel> {
        if self.exists() {
            return self.load();
        }

        let model = trainer.train(corpus_dir)?;
        self.save(&model)?;
        Ok(model)
    }

    fn corrupt<S: std::fmt::Display>(&self, msg: S) -> PolarityError {
        PolarityError::cache_corrupt(format!("{}: {msg}", self.path.display()))
    }
}
