//! The passage analyzer that drives the readability pipeline.
//!
//! [`TextAnalyzer`] composes the word tokenizer, sentence tokenizer, and
//! syllable estimator into a single `analyze` call:
//!
//! ```text
//! Raw Text ─┬─> SentenceTokenizer ──> sentences
//!           └─> WordTokenizer ──> words ──> SyllableEstimator (per word)
//!                                               │
//!                              aggregation + readability formulas
//!                                               │
//!                                        AnalysisResult
//! ```
//!
//! Sentences and words come from two independent tokenizations of the same
//! text; neither count is derived from the other. A sentence-ending
//! abbreviation like "Dr." therefore distorts the sentence count without
//! touching the word count.
//!
//! # Examples
//!
//! ```
//! use prosemeter::analysis::analyzer::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new().unwrap();
//! let result = analyzer.analyze("Readability is measurable. Mostly.").unwrap();
//!
//! assert_eq!(result.num_sentences, 2);
//! assert_eq!(result.num_words, 4);
//! ```

use crate::analysis::result::{AnalysisResult, COMPLEX_SYLLABLES};
use crate::analysis::syllable::SyllableEstimator;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::sentence::SentenceTokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::Result;
use crate::score;

/// Analyzes a passage of text into an [`AnalysisResult`].
///
/// Stateless apart from its compiled patterns; a single instance is safe to
/// share across threads and calls.
#[derive(Clone, Debug)]
pub struct TextAnalyzer {
    words: WordTokenizer,
    sentences: SentenceTokenizer,
    syllables: SyllableEstimator,
}

impl TextAnalyzer {
    /// Create a new text analyzer with the standard heuristic rules.
    pub fn new() -> Result<Self> {
        Ok(TextAnalyzer {
            words: WordTokenizer::new()?,
            sentences: SentenceTokenizer::new()?,
            syllables: SyllableEstimator::new()?,
        })
    }

    /// Analyze one passage (or one sentence) of text.
    ///
    /// A word the syllable estimator rejects is logged and dropped from the
    /// analysis; it never fails the passage, and `words` stays parallel to
    /// `syllable_counts`. Degenerate input with zero words or sentences
    /// yields NaN/infinity ratios, not an error.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let sentences = self.sentences.tokenize(text)?;
        let raw_words = self.words.tokenize(text)?;

        let mut words = Vec::with_capacity(raw_words.len());
        let mut syllable_counts = Vec::with_capacity(raw_words.len());
        for word in raw_words {
            match self.syllables.estimate(&word) {
                Ok(count) => {
                    words.push(word);
                    syllable_counts.push(count);
                }
                Err(e) => log::warn!("skipping word {word:?}: {e}"),
            }
        }

        let complex_word_indices: Vec<usize> = syllable_counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count >= COMPLEX_SYLLABLES)
            .map(|(i, _)| i)
            .collect();
        let complex_words: Vec<String> = complex_word_indices
            .iter()
            .map(|&i| words[i].clone())
            .collect();

        let num_words = words.len();
        let num_sentences = sentences.len();
        let num_syllables = syllable_counts.iter().sum();
        let num_complex_words = complex_words.len();

        // Unguarded divisions: zero denominators produce NaN/infinity and
        // flow into the formulas unchanged.
        let words_per_sentence = num_words as f64 / num_sentences as f64;
        let syllables_per_word = num_syllables as f64 / num_words as f64;
        let complex_word_ratio = num_complex_words as f64 / num_words as f64;
        let complex_words_per_sentence = num_complex_words as f64 / num_sentences as f64;

        Ok(AnalysisResult {
            source: text.to_string(),
            sentences,
            words,
            syllable_counts,
            complex_word_indices,
            complex_words,
            num_words,
            num_sentences,
            num_syllables,
            num_complex_words,
            words_per_sentence,
            syllables_per_word,
            complex_word_ratio,
            complex_words_per_sentence,
            reading_ease: score::reading_ease(words_per_sentence, syllables_per_word),
            grade_level: score::grade_level(words_per_sentence, syllables_per_word),
            fog_index: score::fog_index(words_per_sentence, complex_word_ratio),
            smog_index: score::smog_index(complex_words_per_sentence),
        })
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new().expect("Text analyzer should be creatable with default settings")
    }
}
