//! Command line argument parsing for the Diarist CLI using clap.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Diarist - text cleanup and light analytics for journal entries
#[derive(Parser, Debug, Clone)]
#[command(name = "diarist")]
#[command(about = "Text cleanup and light analytics for journal entries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DiaristArgs {
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

    /// Analysis configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "DIARIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DiaristArgs {
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
    /// Split a raw entry into sentences and count its words
    Segment(SegmentArgs),

    /// Lemmatize the sentences of a raw entry
    Lemmatize(NormalizeArgs),

    /// Stem the sentences of a raw entry
    Stem(NormalizeArgs),

    /// Turn raw entries (date, text) into sentences, word counts and languages
    Prepare(PrepareArgs),

    /// Count the n-grams of a prepared journal
    #[command(name = "ngrams")]
    NGrams(NGramsArgs),

    /// Rank the most used words of a prepared journal
    #[command(name = "top-words")]
    TopWords(TopWordsArgs),

    /// Filter a prepared journal by language and date
    Filter(FilterArgs),
}

/// Arguments for sentence segmentation
#[derive(Parser, Debug, Clone)]
pub struct SegmentArgs {
    /// Raw entry text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for lemmatization and stemming
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Raw entry text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for entry preparation
#[derive(Parser, Debug, Clone)]
pub struct PrepareArgs {
    /// Raw journal file (JSONL with `date` and `text`)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Prepared journal file to write (JSONL)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Minimum detection confidence; lower scores are recorded as `und`
    #[arg(long, default_value = "0.0")]
    pub min_confidence: f64,
}

/// Arguments for n-gram counting
#[derive(Parser, Debug, Clone)]
pub struct NGramsArgs {
    /// Prepared journal file (JSONL)
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Sentence list column (default: from config)
    #[arg(short, long)]
    pub column: Option<String>,

    /// N-gram size (default: from config)
    #[arg(short)]
    pub n: Option<usize>,

    /// Maximum number of n-grams to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for most-used-word ranking
#[derive(Parser, Debug, Clone)]
pub struct TopWordsArgs {
    /// Prepared journal file (JSONL)
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Sentence list column (default: from config)
    #[arg(short, long)]
    pub column: Option<String>,

    /// Ask to keep stopwords (only honoured with the `honor_flag` policy)
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Maximum number of words to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for filtering
#[derive(Parser, Debug, Clone)]
pub struct FilterArgs {
    /// Prepared journal file (JSONL)
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Filtered journal file to write (JSONL)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Target language code (repeatable)
    #[arg(short, long = "language", value_name = "CODE")]
    pub languages: Vec<String>,

    /// Language match mode: `any` or `all`; anything else keeps every entry
    #[arg(short, long, default_value = "any")]
    pub mode: String,

    /// Earliest date to keep (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Latest date to keep (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
