//! Sentence tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::error::{ProsemeterError, Result};

/// A tokenizer that splits text into sentences.
///
/// Newline runs are collapsed to single spaces, then each sentence is a
/// greedy run of non-terminator characters followed by exactly one of `.`,
/// `!`, or `?`, optionally wrapped in parentheses. A trailing fragment with
/// no terminator at all is kept as a final sentence. Terminal punctuation is
/// retained.
///
/// Any `.` terminates a sentence, including abbreviation periods, so
/// `"Dr. Smith went home."` splits after `"Dr."`. Downstream metrics are
/// calibrated against this exact boundary rule.
#[derive(Clone, Debug)]
pub struct SentenceTokenizer {
    /// Matches runs of newline characters to be replaced by single spaces.
    newlines: Arc<Regex>,
    /// Matches one terminated sentence, optionally parenthesis-wrapped.
    sentence: Arc<Regex>,
}

impl SentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new() -> Result<Self> {
        let newlines = Regex::new(r"[\r\n]+")
            .map_err(|e| ProsemeterError::analysis(format!("Invalid newline pattern: {e}")))?;
        let sentence = Regex::new(r"\(?[^.!?]+[.!?]\)?")
            .map_err(|e| ProsemeterError::analysis(format!("Invalid sentence pattern: {e}")))?;

        Ok(SentenceTokenizer {
            newlines: Arc::new(newlines),
            sentence: Arc::new(sentence),
        })
    }
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new().expect("Default sentence tokenizer patterns should be valid")
    }
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let flattened = self.newlines.replace_all(text, " ");

        let mut sentences = Vec::new();
        let mut last_end = 0;

        for mat in self.sentence.find_iter(&flattened) {
            sentences.push(mat.as_str().to_string());
            last_end = mat.end();
        }

        // Unterminated trailing fragment counts as a final sentence, as long
        // as it contains something other than bare terminators.
        let remainder = &flattened[last_end..];
        if remainder.chars().any(|c| !matches!(c, '.' | '!' | '?')) {
            sentences.push(remainder.to_string());
        }

        Ok(sentences)
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_tokenizer() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let sentences = tokenizer.tokenize("First one. Second one! Third?").unwrap();

        assert_eq!(sentences, vec!["First one.", " Second one!", " Third?"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let sentences = tokenizer.tokenize("").unwrap();

        assert!(sentences.is_empty());
    }

    #[test]
    fn test_abbreviation_terminates() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let sentences = tokenizer
            .tokenize("Dr. Smith went home. He was tired")
            .unwrap();

        assert_eq!(
            sentences,
            vec!["Dr.", " Smith went home.", " He was tired"]
        );
    }

    #[test]
    fn test_unterminated_fragment() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let sentences = tokenizer.tokenize("no terminator here").unwrap();

        assert_eq!(sentences, vec!["no terminator here"]);
    }

    #[test]
    fn test_parenthesised_sentence() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let sentences = tokenizer.tokenize("(An aside.) Main point.").unwrap();

        assert_eq!(sentences, vec!["(An aside.)", " Main point."]);
    }

    #[test]
    fn test_newlines_collapsed() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let sentences = tokenizer.tokenize("One.\nTwo.\n\nThree").unwrap();

        assert_eq!(sentences, vec!["One.", " Two.", " Three"]);
    }

    #[test]
    fn test_bare_terminators_only() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let sentences = tokenizer.tokenize("One.").unwrap();
        assert_eq!(sentences, vec!["One."]);

        // Trailing periods alone do not form an extra sentence.
        let sentences = tokenizer.tokenize("Wait...").unwrap();
        assert_eq!(sentences, vec!["Wait."]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SentenceTokenizer::new().unwrap().name(), "sentence");
    }
}
