//! Result types for readability analysis.
//!
//! This module defines the data structures produced by the analysis
//! pipeline:
//!
//! - [`AnalysisResult`] - metrics for one passage (or one sentence)
//! - [`DeepAnalysisResult`] - whole-passage metrics plus every sentence
//!   analyzed independently and ranked by difficulty
//!
//! Results are plain immutable data: a pure function of the input text and
//! the fixed heuristic rules, with no external resources behind them.
//! Derived ratios are unguarded floating-point divisions, so analyzing a
//! passage with zero words or zero sentences produces NaN or infinity in
//! the ratio fields rather than an error.
//!
//! # Examples
//!
//! ```
//! use prosemeter::analysis::analyzer::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new().unwrap();
//! let result = analyzer.analyze("The cat sat on the mat.").unwrap();
//!
//! assert_eq!(result.num_words, 6);
//! assert_eq!(result.num_sentences, 1);
//! assert_eq!(result.words.len(), result.syllable_counts.len());
//! ```

use serde::{Deserialize, Serialize};

/// Minimum estimated syllable count for a word to be considered complex.
pub const COMPLEX_SYLLABLES: usize = 3;

/// Readability metrics for a single passage of text.
///
/// Produced by [`TextAnalyzer::analyze`](crate::analysis::analyzer::TextAnalyzer::analyze),
/// either for a whole passage or for a single sentence during deep
/// analysis. Immutable once constructed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The original text that was analyzed.
    pub source: String,

    /// Sentence substrings of `source`, in order, retaining terminal
    /// punctuation.
    pub sentences: Vec<String>,

    /// Word tokens of `source`, in order. Every token contains at least one
    /// ASCII letter.
    pub words: Vec<String>,

    /// Estimated syllable count per word, same length and order as `words`.
    pub syllable_counts: Vec<usize>,

    /// Indices into `words` of complex words (>= 3 estimated syllables),
    /// strictly increasing.
    pub complex_word_indices: Vec<usize>,

    /// The words at `complex_word_indices`, in order.
    pub complex_words: Vec<String>,

    /// Total number of word tokens.
    pub num_words: usize,

    /// Total number of sentences.
    pub num_sentences: usize,

    /// Sum of all estimated syllable counts.
    pub num_syllables: usize,

    /// Number of complex words.
    pub num_complex_words: usize,

    /// Average words per sentence (NaN for an empty passage).
    pub words_per_sentence: f64,

    /// Average syllables per word (NaN for a wordless passage).
    pub syllables_per_word: f64,

    /// Fraction of words that are complex (NaN for a wordless passage).
    pub complex_word_ratio: f64,

    /// Complex words per sentence (NaN for an empty passage).
    pub complex_words_per_sentence: f64,

    /// Flesch-Kincaid Reading Ease; higher is easier.
    pub reading_ease: f64,

    /// Flesch-Kincaid Grade Level; lower is easier.
    pub grade_level: f64,

    /// Gunning Fog Index; lower is easier.
    pub fog_index: f64,

    /// SMOG Index; lower is easier.
    pub smog_index: f64,
}

impl AnalysisResult {
    /// Composite "reading age" estimate: the arithmetic mean of the Grade
    /// Level, Fog Index, and SMOG Index.
    pub fn reading_age(&self) -> f64 {
        (self.grade_level + self.fog_index + self.smog_index) / 3.0
    }
}

/// Whole-document analysis with a ranked per-sentence breakdown.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeepAnalysisResult {
    /// The analysis of the complete passage.
    pub passage: AnalysisResult,

    /// One analysis per sentence of the passage, sorted by descending
    /// grade level. Ties keep their original sentence order.
    pub sentence_results: Vec<AnalysisResult>,
}

impl DeepAnalysisResult {
    /// The `n` most difficult sentences, hardest first.
    ///
    /// Returns fewer than `n` results when the passage has fewer sentences.
    pub fn top_sentences(&self, n: usize) -> &[AnalysisResult] {
        &self.sentence_results[..n.min(self.sentence_results.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_scores(grade_level: f64, fog_index: f64, smog_index: f64) -> AnalysisResult {
        AnalysisResult {
            source: String::new(),
            sentences: Vec::new(),
            words: Vec::new(),
            syllable_counts: Vec::new(),
            complex_word_indices: Vec::new(),
            complex_words: Vec::new(),
            num_words: 0,
            num_sentences: 0,
            num_syllables: 0,
            num_complex_words: 0,
            words_per_sentence: f64::NAN,
            syllables_per_word: f64::NAN,
            complex_word_ratio: f64::NAN,
            complex_words_per_sentence: f64::NAN,
            reading_ease: 0.0,
            grade_level,
            fog_index,
            smog_index,
        }
    }

    #[test]
    fn test_reading_age() {
        let result = result_with_scores(9.0, 12.0, 6.0);
        assert!((result.reading_age() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_sentences_clamps() {
        let deep = DeepAnalysisResult {
            passage: result_with_scores(1.0, 1.0, 1.0),
            sentence_results: vec![
                result_with_scores(5.0, 1.0, 1.0),
                result_with_scores(2.0, 1.0, 1.0),
            ],
        };

        assert_eq!(deep.top_sentences(5).len(), 2);
        assert_eq!(deep.top_sentences(1).len(), 1);
        assert!((deep.top_sentences(1)[0].grade_level - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut result = result_with_scores(9.5, 11.0, 7.25);
        result.words_per_sentence = 12.0;
        result.syllables_per_word = 1.5;
        result.complex_word_ratio = 0.25;
        result.complex_words_per_sentence = 3.0;

        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();

        assert_eq!(back.grade_level, 9.5);
        assert_eq!(back.words_per_sentence, 12.0);
    }

    #[test]
    fn test_nan_ratios_serialize_as_null() {
        let result = result_with_scores(9.5, 11.0, 7.25);
        let value = serde_json::to_value(&result).unwrap();

        assert!(value["words_per_sentence"].is_null());
        assert_eq!(value["grade_level"], 9.5);
    }
}
