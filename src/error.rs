//! Error types for the Prosemeter library.
//!
//! All fallible operations in Prosemeter return [`Result`], with
//! [`ProsemeterError`] as the error type. The enum distinguishes the two
//! failure-tolerance levels of the pipeline: word-level syllable failures
//! ([`ProsemeterError::Syllable`]) are caught and logged by the analyzer,
//! while sentence-level failures inside deep analysis
//! ([`ProsemeterError::Sentence`]) always propagate to the caller.
//!
//! # Examples
//!
//! ```
//! use prosemeter::error::{ProsemeterError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ProsemeterError::syllable("word contains whitespace"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Prosemeter operations.
#[derive(Error, Debug)]
pub enum ProsemeterError {
    /// I/O errors (reading input files in the CLI)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenizer construction, pipeline failures)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Syllable estimation rejected a malformed word (empty or containing
    /// whitespace). Fatal to the single-word call only; the analyzer layer
    /// catches it.
    #[error("Syllable error: {0}")]
    Syllable(String),

    /// A per-sentence analysis inside deep analysis failed. Carries the
    /// index and content of the failing sentence for diagnostics.
    #[error("Sentence {index} ({text:?}) failed analysis: {source}")]
    Sentence {
        /// Zero-based index of the sentence in the passage.
        index: usize,
        /// The sentence text that failed.
        text: String,
        /// The underlying analysis error.
        source: Box<ProsemeterError>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ProsemeterError.
pub type Result<T> = std::result::Result<T, ProsemeterError>;

impl ProsemeterError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ProsemeterError::Analysis(msg.into())
    }

    /// Create a new syllable error.
    pub fn syllable<S: Into<String>>(msg: S) -> Self {
        ProsemeterError::Syllable(msg.into())
    }

    /// Create a new sentence-level error wrapping the failure of one
    /// per-sentence analysis.
    pub fn sentence<S: Into<String>>(index: usize, text: S, source: ProsemeterError) -> Self {
        ProsemeterError::Sentence {
            index,
            text: text.into(),
            source: Box::new(source),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ProsemeterError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = ProsemeterError::syllable("Test syllable error");
        assert_eq!(error.to_string(), "Syllable error: Test syllable error");
    }

    #[test]
    fn test_sentence_error_context() {
        let inner = ProsemeterError::analysis("inner failure");
        let error = ProsemeterError::sentence(3, "A bad sentence.", inner);

        match &error {
            ProsemeterError::Sentence { index, text, .. } => {
                assert_eq!(*index, 3);
                assert_eq!(text, "A bad sentence.");
            }
            _ => panic!("Expected Sentence error variant"),
        }

        let message = error.to_string();
        assert!(message.contains("Sentence 3"));
        assert!(message.contains("A bad sentence."));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let prosemeter_error = ProsemeterError::from(io_error);

        match prosemeter_error {
            ProsemeterError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
