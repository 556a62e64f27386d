//! Word tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::error::{ProsemeterError, Result};

/// Strip leading and trailing characters that are not ASCII letters.
///
/// Interior characters are untouched, so `"word,"` becomes `"word"` while
/// `"it's"` keeps its apostrophe. Idempotent: applying it twice gives the
/// same result as applying it once.
pub fn trim_non_letters(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_ascii_alphabetic())
}

/// A tokenizer that extracts word tokens from raw text.
///
/// Newline runs are collapsed to single spaces, the text is split on space
/// characters, attached punctuation is trimmed from each fragment, and any
/// fragment left without an ASCII letter is discarded. Interior space runs
/// are deliberately not collapsed first; the empty fragments they produce
/// fall out of the letterless-fragment rule.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// Matches runs of newline characters to be replaced by single spaces.
    newlines: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Result<Self> {
        let newlines = Regex::new(r"[\r\n]+")
            .map_err(|e| ProsemeterError::analysis(format!("Invalid newline pattern: {e}")))?;

        Ok(WordTokenizer {
            newlines: Arc::new(newlines),
        })
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default word tokenizer pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let flattened = self.newlines.replace_all(text, " ");

        let words = flattened
            .split(' ')
            .map(trim_non_letters)
            .filter(|token| !token.is_empty())
            .map(|token| token.to_string())
            .collect();

        Ok(words)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
