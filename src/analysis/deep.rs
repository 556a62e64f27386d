//! Deep analysis: per-sentence decomposition and difficulty ranking.

use crate::analysis::analyzer::TextAnalyzer;
use crate::analysis::result::DeepAnalysisResult;
use crate::error::{ProsemeterError, Result};

/// Runs whole-passage analysis plus an independent analysis of every
/// sentence, ranked hardest-first.
///
/// Unlike the word-level tolerance inside [`TextAnalyzer::analyze`], a
/// failed per-sentence analysis is fatal to the whole deep analysis and is
/// reported with the index and content of the failing sentence.
#[derive(Clone, Debug)]
pub struct DeepAnalyzer {
    inner: TextAnalyzer,
}

impl DeepAnalyzer {
    /// Create a new deep analyzer with the standard heuristic rules.
    pub fn new() -> Result<Self> {
        Ok(DeepAnalyzer {
            inner: TextAnalyzer::new()?,
        })
    }

    /// Create a deep analyzer around an existing text analyzer.
    pub fn with_analyzer(inner: TextAnalyzer) -> Self {
        DeepAnalyzer { inner }
    }

    /// Get the inner text analyzer.
    pub fn inner(&self) -> &TextAnalyzer {
        &self.inner
    }

    /// Analyze a whole passage and each of its sentences.
    ///
    /// Sentence results are sorted by descending grade level with a stable
    /// sort, so equally-difficult sentences keep their original order.
    pub fn deep_analyze(&self, text: &str) -> Result<DeepAnalysisResult> {
        let passage = self.inner.analyze(text)?;

        let mut sentence_results = Vec::with_capacity(passage.sentences.len());
        for (index, sentence) in passage.sentences.iter().enumerate() {
            let result = self
                .inner
                .analyze(sentence)
                .map_err(|e| ProsemeterError::sentence(index, sentence.clone(), e))?;
            sentence_results.push(result);
        }

        // sort_by is stable. NaN grade levels (wordless "sentences") rank
        // last; the sign of a NaN from 0.0/0.0 varies by platform, so
        // total_cmp alone would not order them deterministically.
        sentence_results.sort_by(|a, b| rank_key(b.grade_level).total_cmp(&rank_key(a.grade_level)));

        Ok(DeepAnalysisResult {
            passage,
            sentence_results,
        })
    }
}

/// Sort key for difficulty ranking: NaN collapses below every finite score.
fn rank_key(grade_level: f64) -> f64 {
    if grade_level.is_nan() {
        f64::NEG_INFINITY
    } else {
        grade_level
    }
}

impl Default for DeepAnalyzer {
    fn default() -> Self {
        Self::new().expect("Deep analyzer should be creatable with default settings")
    }
}
