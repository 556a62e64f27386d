//! Command line argument parsing for the Prosemeter CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Prosemeter - rule-based readability analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "prosemeter")]
#[command(about = "Readability metrics and sentence-difficulty ranking for plain text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ProsemeterArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ProsemeterArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute readability metrics for a passage
    #[command(name = "analyze")]
    Analyze(AnalyzeArgs),

    /// Compute whole-document metrics plus a ranked sentence breakdown
    #[command(name = "deep")]
    Deep(DeepArgs),
}

/// Arguments for the analyze command
#[derive(clap::Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Input file to analyze ("-" reads from stdin)
    pub input: PathBuf,
}

/// Arguments for the deep command
#[derive(clap::Args, Debug, Clone)]
pub struct DeepArgs {
    /// Input file to analyze ("-" reads from stdin)
    pub input: PathBuf,

    /// How many of the hardest sentences to list
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
