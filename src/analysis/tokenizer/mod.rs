//! Tokenizer implementations for readability analysis.
//!
//! This module provides the two tokenization strategies the pipeline needs:
//! word extraction and sentence extraction. Both run independently over the
//! same input text; neither is derived from the other.
//!
//! # Available Tokenizers
//!
//! - [`word::WordTokenizer`] - Splits text into word tokens, stripping
//!   attached punctuation
//! - [`sentence::SentenceTokenizer`] - Splits text into sentences on `.`,
//!   `!`, and `?` terminators
//!
//! # Examples
//!
//! ```
//! use prosemeter::analysis::tokenizer::Tokenizer;
//! use prosemeter::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let words = tokenizer.tokenize("Hello, world!").unwrap();
//! assert_eq!(words, vec!["Hello", "world"]);
//! ```

use crate::error::Result;

/// Trait for tokenizers that split text into string tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts;
/// implementations hold no mutable state.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered sequence of tokens.
    ///
    /// Empty input yields an empty sequence, not an error.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and diagnostics).
    fn name(&self) -> &'static str;
}

pub mod sentence;
pub mod word;
