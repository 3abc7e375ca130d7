//! Command line argument parsing for the pinyin-fts CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// pinyin-fts - compile mixed Latin/Chinese input into FTS5 match clauses
#[derive(Parser, Debug, Clone)]
#[command(name = "pinyin-fts")]
#[command(about = "Compile mixed Latin/Chinese search input into pinyin-aware FTS5 match clauses")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PinyinFtsArgs {
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

    /// Compiler configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "PINYIN_FTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PinyinFtsArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compile a query into a match clause
    Compile(CompileArgs),

    /// Show how a token splits into script runs
    Segment(SegmentArgs),

    /// Show the pinyin readings of Latin text
    Analyze(AnalyzeArgs),

    /// Compile one query per line from a file
    Batch(BatchArgs),
}

/// Arguments for compiling a query
#[derive(Parser, Debug, Clone)]
pub struct CompileArgs {
    /// Query words (joined with single spaces)
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Columns to render a MATCH predicate for (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Disable phonetic expansion
    #[arg(long)]
    pub literal: bool,
}

/// Arguments for segmenting a token
#[derive(Parser, Debug, Clone)]
pub struct SegmentArgs {
    /// Token to segment
    #[arg(value_name = "TOKEN")]
    pub token: String,
}

/// Arguments for analyzing Latin text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Latin text to read as pinyin
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for batch compilation
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Input file with one query per line ("-" for stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Compile lines in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Disable phonetic expansion
    #[arg(long)]
    pub literal: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
