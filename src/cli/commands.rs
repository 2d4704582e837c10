//! Command implementations for the Diarist CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::journal::filter::{
    LanguageFilterMode, filter_entries_by_date, filter_entries_by_languages_with,
};
use crate::journal::prepare::{EntryPreparer, WhatlangDetector};
use crate::journal::table::JournalTable;
use crate::text::frequency::{SentenceValue, WordRanker, n_grams};
use crate::text::normalize::{lemmatize_sentences_with, stem_sentences_with};
use crate::text::segment::{split_sentences, word_count};

/// Execute a CLI command.
pub fn execute_command(args: DiaristArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Segment(segment_args) => segment(segment_args, &args),
        Command::Lemmatize(normalize_args) => lemmatize(normalize_args, &config, &args),
        Command::Stem(normalize_args) => stem(normalize_args, &config, &args),
        Command::Prepare(prepare_args) => prepare(prepare_args, &config, &args),
        Command::NGrams(ngram_args) => count_ngrams(ngram_args, &config, &args),
        Command::TopWords(top_args) => top_words(top_args, &config, &args),
        Command::Filter(filter_args) => filter(filter_args, &config, &args),
    }
}

fn load_config(args: &DiaristArgs) -> Result<AnalysisConfig> {
    match &args.config {
        Some(path) => AnalysisConfig::from_file(path),
        None => Ok(AnalysisConfig::default()),
    }
}

fn read_entry(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    let sentences = split_sentences(&text);
    debug!("{} holds {} sentences", path.display(), sentences.len());
    Ok(sentences)
}

/// Print the sentences of a raw entry.
fn segment(args: &SegmentArgs, cli_args: &DiaristArgs) -> Result<()> {
    let sentences = read_entry(&args.file)?;
    let word_count = word_count(&sentences);

    output_result(
        &format!("Sentences of {}", args.file.display()),
        &SegmentResult {
            sentences,
            word_count,
        },
        cli_args,
    )
}

/// Print the lemmas of every sentence of a raw entry.
fn lemmatize(args: &NormalizeArgs, config: &AnalysisConfig, cli_args: &DiaristArgs) -> Result<()> {
    let sentences = read_entry(&args.file)?;
    let tokens = lemmatize_sentences_with(&sentences, Arc::new(config.load_lemmatizer()?))?;

    output_result(
        &format!("Lemmas of {}", args.file.display()),
        &TokensResult { tokens },
        cli_args,
    )
}

/// Print the stems of every sentence of a raw entry.
fn stem(args: &NormalizeArgs, config: &AnalysisConfig, cli_args: &DiaristArgs) -> Result<()> {
    let sentences = read_entry(&args.file)?;
    let tokens = stem_sentences_with(&sentences, Box::new(config.stemmer()))?;

    output_result(
        &format!("Stems of {}", args.file.display()),
        &TokensResult { tokens },
        cli_args,
    )
}

/// Prepare a raw journal and write it out.
fn prepare(args: &PrepareArgs, config: &AnalysisConfig, cli_args: &DiaristArgs) -> Result<()> {
    let raw = JournalTable::from_jsonl(&args.input)?;

    let detector = WhatlangDetector::new().with_min_confidence(args.min_confidence);
    let prepared = EntryPreparer::new(&detector, config.sentence_column.as_str()).prepare(&raw)?;
    let written = prepared.write_jsonl(&args.output)?;

    output_result(
        "Journal prepared",
        &JournalWriteResult {
            input_entries: raw.len(),
            output_entries: written,
            output: args.output.display().to_string(),
        },
        cli_args,
    )
}

/// Print the n-gram counts of a prepared journal.
fn count_ngrams(args: &NGramsArgs, config: &AnalysisConfig, cli_args: &DiaristArgs) -> Result<()> {
    let table = JournalTable::from_jsonl(&args.table)?;
    let column = args.column.as_deref().unwrap_or(&config.sentence_column);
    let n = args.n.unwrap_or(config.ngram_size);

    let mut grams = n_grams(&table, column, n)?;
    if let Some(limit) = args.limit {
        grams.truncate(limit);
    }

    output_frequencies(
        &format!("{n}-grams of column '{column}'"),
        &grams,
        cli_args,
    )
}

/// Print the most used words of a prepared journal.
fn top_words(args: &TopWordsArgs, config: &AnalysisConfig, cli_args: &DiaristArgs) -> Result<()> {
    let table = JournalTable::from_jsonl(&args.table)?;
    let column = args.column.as_deref().unwrap_or(&config.sentence_column);

    let values = table
        .iter()
        .map(|row| SentenceValue::from_column(row, column))
        .collect::<Result<Vec<_>>>()?;

    let ranker = WordRanker::new(config.load_stop_words()?).with_policy(config.stopword_policy);
    let mut words = ranker.rank(&values, !args.keep_stopwords)?;
    if let Some(limit) = args.limit {
        words.truncate(limit);
    }

    output_frequencies(
        &format!("Most used words of column '{column}'"),
        &words,
        cli_args,
    )
}

/// Filter a prepared journal by language and date and write it out.
fn filter(args: &FilterArgs, config: &AnalysisConfig, cli_args: &DiaristArgs) -> Result<()> {
    let table = JournalTable::from_jsonl(&args.table)?;

    // Without target languages only the date bounds apply.
    let by_language = if args.languages.is_empty() {
        table.clone()
    } else {
        filter_entries_by_languages_with(
            &table,
            &args.languages,
            LanguageFilterMode::parse(&args.mode),
            config.any_match_threshold,
        )?
    };
    let filtered = filter_entries_by_date(&by_language, args.start, args.end)?;

    info!(
        "Kept {} of {} entries after filtering",
        filtered.len(),
        table.len()
    );
    let written = filtered.write_jsonl(&args.output)?;

    output_result(
        "Journal filtered",
        &JournalWriteResult {
            input_entries: table.len(),
            output_entries: written,
            output: args.output.display().to_string(),
        },
        cli_args,
    )
}
