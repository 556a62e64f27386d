//! Readability index formulas.
//!
//! Pure functions computing the four standard readability indices from
//! pre-aggregated passage statistics. These are the only place the formula
//! constants live; the analyzer feeds them its unguarded ratio divisions, so
//! degenerate inputs (zero words or sentences) flow through as NaN or
//! infinity rather than being special-cased here.
//!
//! Higher Reading Ease means easier text; for the other three indices lower
//! means easier.

/// Flesch-Kincaid Reading Ease.
///
/// `206.835 - 1.015 * (words/sentence) - 84.6 * (syllables/word)`
pub fn reading_ease(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

/// Flesch-Kincaid Grade Level.
///
/// `0.39 * (words/sentence) + 11.8 * (syllables/word) - 15.59`
pub fn grade_level(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59
}

/// Gunning Fog Index.
///
/// `0.4 * [(words/sentence) + 100 * (complexWords/words)]`
pub fn fog_index(words_per_sentence: f64, complex_word_ratio: f64) -> f64 {
    0.4 * (words_per_sentence + 100.0 * complex_word_ratio)
}

/// SMOG Index.
///
/// `1.0430 * sqrt(30 * (complexWords/sentence)) + 3.1291`
pub fn smog_index(complex_words_per_sentence: f64) -> f64 {
    1.0430 * (30.0 * complex_words_per_sentence).sqrt() + 3.1291
}
