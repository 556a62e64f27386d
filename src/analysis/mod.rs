//! Text analysis module for Prosemeter.
//!
//! This module provides the core readability pipeline: tokenization into
//! words and sentences, syllable estimation, passage analysis, and deep
//! per-sentence analysis.

pub mod analyzer;
pub mod deep;
pub mod result;
pub mod syllable;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::TextAnalyzer;
pub use deep::DeepAnalyzer;
pub use result::{AnalysisResult, COMPLEX_SYLLABLES, DeepAnalysisResult};
pub use syllable::SyllableEstimator;
