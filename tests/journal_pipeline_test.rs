use std::fs;
use std::sync::Arc;

use chrono::NaiveDate;
use diarist::analysis::stopwords::StopWords;
use diarist::config::AnalysisConfig;
use diarist::error::DiaristError;
use diarist::journal::JournalTable;
use diarist::journal::filter::{
    AnyMatchThreshold, LanguageFilterMode, filter_entries_by_date, filter_entries_by_languages,
    filter_entries_by_languages_with,
};
use diarist::journal::prepare::{EntryPreparer, LanguageDetector};
use diarist::text::frequency::{SentenceValue, StopwordPolicy, WordRanker, n_grams};
use tempfile::tempdir;

const RAW_JOURNAL: &str = r#"{"date": "2022-12-30", "text": "The cat sat.\n\nThe cat slept."}
{"date": "2023-05-01", "text": "The cat sat on the mat.\\- Le chat dort."}

{"date": "2023-08-15", "text": "Walked the dog.\nThe dog sat."}
{"date": null, "text": "Undated thoughts about the cat."}
"#;

/// Tags sentences starting with "Le" as French and everything else as English.
struct PrefixDetector;

impl LanguageDetector for PrefixDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let text = text.trim_start_matches("\\-").trim_start();
        if text.starts_with("Le ") {
            Some("fra".to_string())
        } else {
            Some("eng".to_string())
        }
    }

    fn name(&self) -> &'static str {
        "prefix"
    }
}

fn prepared_journal() -> JournalTable {
    let dir = tempdir().unwrap();
    let raw_path = dir.path().join("raw.jsonl");
    let prepared_path = dir.path().join("prepared.jsonl");
    fs::write(&raw_path, RAW_JOURNAL).unwrap();

    let raw = JournalTable::from_jsonl(&raw_path).unwrap();
    assert_eq!(raw.len(), 4);

    let prepared = EntryPreparer::new(&PrefixDetector, "sentences")
        .prepare(&raw)
        .unwrap();
    prepared.write_jsonl(&prepared_path).unwrap();

    JournalTable::from_jsonl(&prepared_path).unwrap()
}

fn date(s: &str) -> Option<NaiveDate> {
    Some(s.parse().unwrap())
}

#[test]
fn test_prepared_rows_survive_a_round_trip() {
    let journal = prepared_journal();

    let second = &journal.rows()[1];
    assert_eq!(
        JournalTable::text_list(second, "sentences").unwrap(),
        ["The cat sat on the mat.", "\\- Le chat dort."]
    );
    assert_eq!(
        JournalTable::text_list(second, "languages").unwrap(),
        ["eng", "fra"]
    );
    assert_eq!(JournalTable::date(second).unwrap(), date("2023-05-01"));
    assert_eq!(JournalTable::date(&journal.rows()[3]).unwrap(), None);
}

#[test]
fn test_ngrams_over_prepared_journal() {
    let journal = prepared_journal();
    let grams = n_grams(&journal, "sentences", 2).unwrap();

    assert_eq!(grams.label, "2_grams");
    assert_eq!(grams.entries[0].term, " the cat");
    assert_eq!(grams.get(" the cat"), Some(4));
    assert_eq!(grams.get(" cat sat"), Some(2));
    assert_eq!(grams.get(" le chat"), Some(1));
    // Words never pair across sentence boundaries.
    assert_eq!(grams.get(" sat the"), None);
}

#[test]
fn test_language_filters() {
    let journal = prepared_journal();

    let english_only = filter_entries_by_languages(&journal, &["eng"], LanguageFilterMode::All).unwrap();
    assert_eq!(english_only.len(), 3);

    // Every entry shares exactly one code with a single-language target.
    let any_english = filter_entries_by_languages(&journal, &["eng"], LanguageFilterMode::Any).unwrap();
    assert_eq!(any_english.len(), 4);

    // The bilingual entry shares two codes and is left out.
    let literal = filter_entries_by_languages(&journal, &["eng", "fra"], LanguageFilterMode::Any).unwrap();
    assert_eq!(literal.len(), 3);

    let inclusive = filter_entries_by_languages_with(
        &journal,
        &["eng", "fra"],
        LanguageFilterMode::Any,
        AnyMatchThreshold::AtLeastOne,
    )
    .unwrap();
    assert_eq!(inclusive.len(), 4);

    let unchanged = filter_entries_by_languages(
        &journal,
        &["eng"],
        LanguageFilterMode::parse("some"),
    )
    .unwrap();
    assert_eq!(unchanged, journal);
}

#[test]
fn test_date_filter_over_prepared_journal() {
    let journal = prepared_journal();

    let in_2023 = filter_entries_by_date(&journal, date("2023-01-01"), date("2023-12-31")).unwrap();
    assert_eq!(in_2023.len(), 2);

    let from_may = filter_entries_by_date(&journal, date("2023-05-01"), None).unwrap();
    assert_eq!(from_may.len(), 2);

    let until_may = filter_entries_by_date(&journal, None, date("2023-05-01")).unwrap();
    assert_eq!(until_may.len(), 2);
}

#[test]
fn test_most_used_words_over_prepared_journal() {
    let journal = prepared_journal();
    let values: Vec<SentenceValue> = journal
        .iter()
        .map(|row| SentenceValue::Nested(vec![JournalTable::text_list(row, "sentences").unwrap().to_vec()]))
        .collect();

    let stop_words = Arc::new(StopWords::from_words(["the", "on", "le"]));
    let words = WordRanker::new(Arc::clone(&stop_words)).rank(&values, false).unwrap();

    // Stopwords go even though the caller asked to keep them.
    assert_eq!(words.get("The"), None);
    assert_eq!(words.get("Le"), None);
    assert_eq!(words.entries[0].term, "cat");
    assert_eq!(words.get("cat"), Some(4));
    assert_eq!(words.get("sat"), Some(3));

    let honoured = WordRanker::new(stop_words)
        .with_policy(StopwordPolicy::HonorFlag)
        .rank(&values, false)
        .unwrap();
    assert_eq!(honoured.get("The"), Some(4));
}

#[test]
fn test_filters_fail_on_missing_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("raw.jsonl");
    fs::write(&path, RAW_JOURNAL).unwrap();
    let raw = JournalTable::from_jsonl(&path).unwrap();

    let err = filter_entries_by_languages(&raw, &["eng"], LanguageFilterMode::Any).unwrap_err();
    assert!(matches!(err, DiaristError::Column(_)));

    let err = n_grams(&raw, "sentences", 2).unwrap_err();
    assert!(matches!(err, DiaristError::Column(_)));
}

#[test]
fn test_config_drives_threshold() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("diarist.json");
    fs::write(
        &config_path,
        r#"{"any_match_threshold": "at_least_one", "stopword_policy": "honor_flag"}"#,
    )
    .unwrap();

    let config = AnalysisConfig::from_file(&config_path).unwrap();
    let journal = prepared_journal();

    let filtered = filter_entries_by_languages_with(
        &journal,
        &["eng", "fra"],
        LanguageFilterMode::Any,
        config.any_match_threshold,
    )
    .unwrap();
    assert_eq!(filtered.len(), 4);
    assert!(config.stopword_policy.should_remove(true));
    assert!(!config.stopword_policy.should_remove(false));
}

#[test]
fn test_malformed_journal_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.jsonl");
    fs::write(&path, "{\"date\": \"2023-01-01\"}\n{not json}\n").unwrap();

    let err = JournalTable::from_jsonl(&path).unwrap_err();
    assert!(matches!(err, DiaristError::Parse(_)));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_date_like_text_prepares_as_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("raw.jsonl");
    fs::write(&path, r#"{"date": "2023-05-01", "text": "2023-05-02"}"#).unwrap();

    let raw = JournalTable::from_jsonl(&path).unwrap();
    let prepared = EntryPreparer::new(&PrefixDetector, "sentences")
        .prepare(&raw)
        .unwrap();

    let row = &prepared.rows()[0];
    assert_eq!(JournalTable::text_list(row, "sentences").unwrap(), ["2023-05-02"]);
    assert_eq!(JournalTable::date(row).unwrap(), date("2023-05-01"));
}

#[test]
fn test_most_used_words_over_lemma_lists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lemmas.jsonl");
    fs::write(
        &path,
        concat!(
            r#"{"date": "2023-05-01", "lemmas": [["cat", "nap"], ["cat"]]}"#,
            "\n",
            r#"{"date": "2023-05-02", "lemmas": [["the", "nap"]]}"#,
            "\n",
        ),
    )
    .unwrap();

    let journal = JournalTable::from_jsonl(&path).unwrap();
    let values = journal
        .iter()
        .map(|row| SentenceValue::from_column(row, "lemmas"))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let words = WordRanker::new(Arc::new(StopWords::from_words(["the"])))
        .rank(&values, true)
        .unwrap();
    assert_eq!(words.terms(), vec!["cat", "nap"]);
    assert_eq!(words.get("cat"), Some(2));
    assert_eq!(words.get("nap"), Some(2));
}
