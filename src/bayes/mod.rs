//! Naive Bayes sentiment model for Polarity.
//!
//! This module contains the statistical core: per-class frequency tables,
//! the trained model, the corpus trainer, and the log-likelihood classifier.

pub mod classifier;
pub mod frequency;
pub mod model;
pub mod trainer;

// Re-export commonly used types
pub use classifier::*;
pub use frequency::*;
pub use model::*;
pub use trainer::*;
