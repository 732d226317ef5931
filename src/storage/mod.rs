//! Storage layer for Polarity.
//!
//! This module owns the on-disk format of trained models and the
//! load-or-train orchestration around it. The core training and
//! classification code never touches the filesystem.

pub mod cache;

// Re-export commonly used types
pub use cache::*;
