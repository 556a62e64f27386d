//! Output formatting for CLI commands.
//!
//! Rendering is display-only: numeric fields are rounded here and nowhere
//! else, and JSON output serializes the library's result structs verbatim.

use std::io::Write;

use crate::analysis::result::{AnalysisResult, DeepAnalysisResult};
use crate::cli::args::{OutputFormat, ProsemeterArgs};
use crate::error::Result;

/// Output a passage analysis in the selected format.
pub fn output_analysis<W: Write>(
    writer: &mut W,
    result: &AnalysisResult,
    args: &ProsemeterArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_analysis_human(writer, result),
        OutputFormat::Json => output_json(writer, result, args),
    }
}

/// Output a deep analysis in the selected format.
pub fn output_deep<W: Write>(
    writer: &mut W,
    result: &DeepAnalysisResult,
    top: usize,
    args: &ProsemeterArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_deep_human(writer, result, top),
        OutputFormat::Json => output_json(writer, result, args),
    }
}

fn output_json<W: Write, T: serde::Serialize>(
    writer: &mut W,
    result: &T,
    args: &ProsemeterArgs,
) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(writer, "{json}")?;
    Ok(())
}

fn output_analysis_human<W: Write>(writer: &mut W, result: &AnalysisResult) -> Result<()> {
    writeln!(writer, "Passage Metrics:")?;
    writeln!(writer, "════════════════")?;
    writeln!(writer, "Sentences:              {}", result.num_sentences)?;
    writeln!(writer, "Words:                  {}", result.num_words)?;
    writeln!(writer, "Syllables:              {}", result.num_syllables)?;
    writeln!(writer, "Complex words:          {}", result.num_complex_words)?;
    writeln!(
        writer,
        "Words per sentence:     {:.2}",
        result.words_per_sentence
    )?;
    writeln!(
        writer,
        "Syllables per word:     {:.2}",
        result.syllables_per_word
    )?;
    writeln!(writer)?;
    writeln!(writer, "Readability:")?;
    writeln!(writer, "────────────")?;
    writeln!(writer, "Reading ease:           {:.2}", result.reading_ease)?;
    writeln!(writer, "Grade level:            {:.2}", result.grade_level)?;
    writeln!(writer, "Fog index:              {:.2}", result.fog_index)?;
    writeln!(writer, "SMOG index:             {:.2}", result.smog_index)?;
    writeln!(writer, "Reading age:            {:.2}", result.reading_age())?;
    Ok(())
}

fn output_deep_human<W: Write>(
    writer: &mut W,
    result: &DeepAnalysisResult,
    top: usize,
) -> Result<()> {
    output_analysis_human(writer, &result.passage)?;

    let ranked = result.top_sentences(top);
    if !ranked.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "Hardest Sentences:")?;
        writeln!(writer, "──────────────────")?;
        for (rank, sentence) in ranked.iter().enumerate() {
            writeln!(
                writer,
                "{}. (grade {:.2}) {}",
                rank + 1,
                sentence.grade_level,
                sentence.source.trim()
            )?;
        }
    }
    Ok(())
}
