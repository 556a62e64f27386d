//! Command implementations for the Prosemeter CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::analysis::analyzer::TextAnalyzer;
use crate::analysis::deep::DeepAnalyzer;
use crate::cli::args::{AnalyzeArgs, Command, DeepArgs, ProsemeterArgs};
use crate::cli::output::{output_analysis, output_deep};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: ProsemeterArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::Deep(deep_args) => deep(deep_args.clone(), &args),
    }
}

/// Read input text from a file, or from stdin when the path is "-".
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Analyze a single passage.
fn analyze(args: AnalyzeArgs, cli_args: &ProsemeterArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Analyzing: {}", args.input.display());
    }

    let text = read_input(&args.input)?;
    let analyzer = TextAnalyzer::new()?;
    let result = analyzer.analyze(&text)?;

    output_analysis(&mut io::stdout().lock(), &result, cli_args)
}

/// Deep-analyze a document with ranked sentences.
fn deep(args: DeepArgs, cli_args: &ProsemeterArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Deep-analyzing: {}", args.input.display());
    }

    let text = read_input(&args.input)?;
    let analyzer = DeepAnalyzer::new()?;
    let result = analyzer.deep_analyze(&text)?;

    output_deep(&mut io::stdout().lock(), &result, args.top, cli_args)
}
