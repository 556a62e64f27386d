//! Rule-based syllable estimation for English words.
//!
//! The estimator is a heuristic, not a dictionary lookup: it counts vowel
//! runs after a small amount of suffix normalization. It is expected to be
//! imprecise on irregular words; that imprecision is intentional and is
//! inherited by every downstream readability metric, which are calibrated
//! against these exact rules.
//!
//! # Rules
//!
//! Applied in order to a single word token:
//!
//! 1. Reject empty input or input containing whitespace.
//! 2. Words of three characters or fewer estimate to exactly 1 syllable.
//! 3. Matching is case-insensitive (the word is lowercased internally).
//! 4. Unless the word ends in `le`, one trailing `es`, `ed`, or `e` is
//!    stripped. The `le` exemption keeps words like "little" at 2.
//! 5. The estimate is the number of maximal runs of vowels
//!    (`a,e,i,o,u,y`); a vowel-free word estimates to 0.
//!
//! # Examples
//!
//! ```
//! use prosemeter::analysis::syllable::SyllableEstimator;
//!
//! let estimator = SyllableEstimator::new().unwrap();
//! assert_eq!(estimator.estimate("cat").unwrap(), 1);
//! assert_eq!(estimator.estimate("little").unwrap(), 2);
//! assert_eq!(estimator.estimate("hoped").unwrap(), 1);
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use regex::Regex;

use crate::error::{ProsemeterError, Result};

/// Estimates syllable counts for single word tokens.
#[derive(Clone, Debug)]
pub struct SyllableEstimator {
    /// Matches one strippable trailing suffix (`es`, `ed`, or bare `e`).
    suffix: Arc<Regex>,
    /// Matches one maximal run of vowel characters.
    vowel_run: Arc<Regex>,
}

impl SyllableEstimator {
    /// Create a new syllable estimator.
    pub fn new() -> Result<Self> {
        let suffix = Regex::new(r"(?:es|ed|e)$")
            .map_err(|e| ProsemeterError::analysis(format!("Invalid suffix pattern: {e}")))?;
        let vowel_run = Regex::new(r"[aeiouy]+")
            .map_err(|e| ProsemeterError::analysis(format!("Invalid vowel pattern: {e}")))?;

        Ok(SyllableEstimator {
            suffix: Arc::new(suffix),
            vowel_run: Arc::new(vowel_run),
        })
    }

    /// Estimate the syllable count of a single word token.
    ///
    /// The tokenizer guarantees words are non-empty and whitespace-free;
    /// the estimator still validates both and fails with
    /// [`ProsemeterError::Syllable`] when the guarantee is broken.
    pub fn estimate(&self, word: &str) -> Result<usize> {
        if word.is_empty() {
            return Err(ProsemeterError::syllable("word is empty"));
        }
        if word.chars().any(char::is_whitespace) {
            return Err(ProsemeterError::syllable(format!(
                "word contains whitespace: {word:?}"
            )));
        }

        // Short words never decompose further.
        if word.chars().count() <= 3 {
            return Ok(1);
        }

        let lowered = word.to_lowercase();

        let stripped = if lowered.ends_with("le") {
            Cow::from(lowered.as_str())
        } else {
            self.suffix.replace(&lowered, "")
        };

        Ok(self.vowel_run.find_iter(&stripped).count())
    }
}

impl Default for SyllableEstimator {
    fn default() -> Self {
        Self::new().expect("Default syllable estimator patterns should be valid")
    }
}
