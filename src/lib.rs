//! # Prosemeter
//!
//! A rule-based readability analysis library for Rust.
//!
//! ## Features
//!
//! - Regex-driven word and sentence tokenization
//! - Heuristic English syllable estimation
//! - Flesch-Kincaid Reading Ease and Grade Level, Gunning Fog Index, and
//!   SMOG Index
//! - Deep analysis: every sentence scored independently and ranked by
//!   difficulty
//!
//! ## Quick start
//!
//! ```
//! use prosemeter::prelude::*;
//!
//! let analyzer = DeepAnalyzer::new().unwrap();
//! let result = analyzer
//!     .deep_analyze("Short words read easily. Polysyllabic vocabulary complicates comprehension.")
//!     .unwrap();
//!
//! // The hardest sentence comes first.
//! assert!(result.sentence_results[0].source.contains("Polysyllabic"));
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod score;

pub mod prelude {
    //! Convenience re-exports of the main entry points.
    pub use crate::analysis::analyzer::TextAnalyzer;
    pub use crate::analysis::deep::DeepAnalyzer;
    pub use crate::analysis::result::{AnalysisResult, DeepAnalysisResult};
    pub use crate::error::{ProsemeterError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
