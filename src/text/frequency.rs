//! Frequency analysis: n-gram counts and most-used words.

use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::char_filter::PatternReplaceCharFilter;
use crate::analysis::stopwords::StopWords;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::WordTokenizer;
use crate::document::{Document, FieldValue};
use crate::error::{DiaristError, Result};
use crate::journal::table::JournalTable;

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub term: String,
    pub count: usize,
}

/// Terms with their occurrence counts, sorted by descending count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Name of the counted column, e.g. `2_grams` or `words`.
    pub label: String,
    pub entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Build a table from counts. Equal counts keep their input order.
    pub fn from_counts<S: Into<String>>(label: S, counts: Vec<(String, usize)>) -> Self {
        let mut entries: Vec<FrequencyEntry> = counts
            .into_iter()
            .map(|(term, count)| FrequencyEntry { term, count })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        FrequencyTable {
            label: label.into(),
            entries,
        }
    }

    /// Count of a term, if present.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.term == term)
            .map(|entry| entry.count)
    }

    /// Terms in table order.
    pub fn terms(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.term.as_str()).collect()
    }

    /// Keep only the `limit` most frequent terms.
    pub fn truncate(&mut self, limit: usize) {
        self.entries.truncate(limit);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count the n-grams of every sentence in `column` across the table.
///
/// Sentences lose every character that is neither a word character nor
/// whitespace, are lowercased and tokenized, then a window of `n` tokens
/// slides over them. Each n-gram is rendered with a space before every
/// token, so `"the cat"` becomes `" the cat"`. Equal counts are ordered by
/// n-gram text. `n == 0` yields an empty table.
///
/// # Examples
///
/// ```
/// use diarist::document::Document;
/// use diarist::document::FieldValue;
/// use diarist::journal::JournalTable;
/// use diarist::text::frequency::n_grams;
///
/// let mut row = Document::new();
/// row.add_field("sentences", FieldValue::TextList(vec!["The cat sat.".to_string()]));
/// let table = JournalTable::from_documents(vec![row]);
///
/// let grams = n_grams(&table, "sentences", 2).unwrap();
/// assert_eq!(grams.label, "2_grams");
/// assert_eq!(grams.get(" the cat"), Some(1));
/// assert_eq!(grams.get(" cat sat"), Some(1));
/// ```
pub fn n_grams(table: &JournalTable, column: &str, n: usize) -> Result<FrequencyTable> {
    let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
        .add_char_filter(Arc::new(PatternReplaceCharFilter::special_characters()?))
        .add_filter(Arc::new(LowercaseFilter::new()))
        .with_name("n_grams");

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut sentence_count = 0;

    for row in table.iter() {
        for sentence in JournalTable::text_list(row, column)? {
            sentence_count += 1;
            if n == 0 {
                continue;
            }

            let tokens = analyzer.analyze_to_strings(sentence)?;
            for window in tokens.windows(n) {
                let gram = window.iter().fold(String::new(), |mut gram, token| {
                    gram.push(' ');
                    gram.push_str(token);
                    gram
                });
                *counts.entry(gram).or_insert(0) += 1;
            }
        }
    }

    debug!(
        "Counted {} distinct {n}-grams over {sentence_count} sentences",
        counts.len()
    );
    Ok(FrequencyTable::from_counts(
        format!("{n}_grams"),
        counts.into_iter().collect(),
    ))
}

/// One element of the series fed to most-used-word ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentenceValue {
    /// Plain text.
    Scalar(String),
    /// Token sequences, e.g. the output of lemmatization.
    Nested(Vec<Vec<String>>),
}

impl SentenceValue {
    /// Flatten one level and join everything with single spaces.
    pub fn to_text(&self) -> String {
        match self {
            SentenceValue::Scalar(text) => text.clone(),
            SentenceValue::Nested(sequences) => sequences
                .iter()
                .flatten()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Read one row's column as a ranking input.
    ///
    /// Text is taken as is, a text list becomes a single token sequence and
    /// a nested text list keeps its sequences. Anything else is a column
    /// error.
    pub fn from_column(row: &Document, column: &str) -> Result<Self> {
        match row.require_field(column)? {
            FieldValue::Text(text) => Ok(SentenceValue::Scalar(text.clone())),
            FieldValue::TextList(list) => Ok(SentenceValue::Nested(vec![list.clone()])),
            FieldValue::NestedTextList(lists) => Ok(SentenceValue::Nested(lists.clone())),
            other => Err(DiaristError::column(format!(
                "column '{column}' holds a {}, expected text or token lists",
                other.type_name()
            ))),
        }
    }
}

impl From<&str> for SentenceValue {
    fn from(text: &str) -> Self {
        SentenceValue::Scalar(text.to_string())
    }
}

impl From<String> for SentenceValue {
    fn from(text: String) -> Self {
        SentenceValue::Scalar(text)
    }
}

impl From<Vec<Vec<String>>> for SentenceValue {
    fn from(sequences: Vec<Vec<String>>) -> Self {
        SentenceValue::Nested(sequences)
    }
}

/// When most-used-word ranking strips stopwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StopwordPolicy {
    /// Stopwords are always removed, whatever the caller's flag says.
    #[default]
    Always,
    /// Stopwords are removed only when the caller asks for it.
    HonorFlag,
}

impl StopwordPolicy {
    /// Resolve the caller's flag against this policy.
    pub fn should_remove(self, remove_stopwords: bool) -> bool {
        match self {
            StopwordPolicy::Always => true,
            StopwordPolicy::HonorFlag => remove_stopwords,
        }
    }
}

/// Ranks the words of a series of sentences by frequency.
#[derive(Debug, Clone)]
pub struct WordRanker {
    stop_words: Arc<StopWords>,
    policy: StopwordPolicy,
}

impl WordRanker {
    /// Create a ranker with the [`StopwordPolicy::Always`] policy.
    pub fn new(stop_words: Arc<StopWords>) -> Self {
        WordRanker {
            stop_words,
            policy: StopwordPolicy::Always,
        }
    }

    /// Set the stopword policy.
    pub fn with_policy(mut self, policy: StopwordPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Rank the words of every value by descending count.
    ///
    /// All values are joined with spaces, ASCII punctuation is stripped, the
    /// text is tokenized and, depending on the policy, tokens whose lowercase
    /// form is a stopword are dropped. Equal counts keep first-appearance
    /// order.
    pub fn rank(&self, values: &[SentenceValue], remove_stopwords: bool) -> Result<FrequencyTable> {
        let text = values
            .iter()
            .map(SentenceValue::to_text)
            .collect::<Vec<_>>()
            .join(" ");

        let remove = self.policy.should_remove(remove_stopwords);
        let words = self.tokenize(text.trim(), remove)?;

        let mut index: AHashMap<String, usize> = AHashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();
        for word in words {
            match index.get(&word) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(word.clone(), counts.len());
                    counts.push((word, 1));
                }
            }
        }

        debug!(
            "Ranked {} distinct words (stopwords removed: {remove})",
            counts.len()
        );
        Ok(FrequencyTable::from_counts("words", counts))
    }

    /// Strip ASCII punctuation, tokenize, and drop stopwords.
    pub fn remove_stop_words(&self, text: &str) -> Result<Vec<String>> {
        self.tokenize(text, true)
    }

    fn tokenize(&self, text: &str, remove_stopwords: bool) -> Result<Vec<String>> {
        let mut analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::ascii_punctuation()?))
            .with_name("most_used_words");
        if remove_stopwords {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::new(Arc::clone(&self.stop_words))));
        }
        analyzer.analyze_to_strings(text)
    }
}

/// Rank words with stopwords removed, using the literal policy.
pub fn most_used_words(values: &[SentenceValue], stop_words: Arc<StopWords>) -> Result<FrequencyTable> {
    WordRanker::new(stop_words).rank(values, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> JournalTable {
        JournalTable::from_documents(
            rows.iter()
                .map(|sentences| {
                    let mut doc = Document::new();
                    doc.add_field(
                        "sentences",
                        FieldValue::TextList(sentences.iter().map(|s| s.to_string()).collect()),
                    );
                    doc
                })
                .collect(),
        )
    }

    fn stop_words() -> Arc<StopWords> {
        Arc::new(StopWords::from_words(["the", "a", "and", "i"]))
    }

    #[test]
    fn test_bigrams_single_sentence() {
        let grams = n_grams(&table(&[&["the cat sat"]]), "sentences", 2).unwrap();

        assert_eq!(grams.label, "2_grams");
        assert_eq!(grams.len(), 2);
        assert_eq!(grams.get(" the cat"), Some(1));
        assert_eq!(grams.get(" cat sat"), Some(1));
    }

    #[test]
    fn test_ngrams_strip_punctuation_and_case() {
        let grams = n_grams(
            &table(&[&["The cat, sat!", "the CAT sat"], &["Dogs bark."]]),
            "sentences",
            2,
        )
        .unwrap();

        assert_eq!(grams.entries[0].term, " cat sat");
        assert_eq!(grams.entries[0].count, 2);
        assert_eq!(grams.get(" the cat"), Some(2));
        assert_eq!(grams.get(" dogs bark"), Some(1));
        assert_eq!(grams.len(), 3);
    }

    #[test]
    fn test_ngram_ties_are_lexicographic() {
        let grams = n_grams(&table(&[&["b c a"]]), "sentences", 1).unwrap();
        assert_eq!(grams.terms(), vec![" a", " b", " c"]);
    }

    #[test]
    fn test_trigrams_and_short_sentences() {
        let grams = n_grams(&table(&[&["one two", "one two three four"]]), "sentences", 3).unwrap();

        assert_eq!(grams.label, "3_grams");
        assert_eq!(grams.terms(), vec![" one two three", " two three four"]);
    }

    #[test]
    fn test_zero_window() {
        let grams = n_grams(&table(&[&["the cat sat"]]), "sentences", 0).unwrap();
        assert!(grams.is_empty());
    }

    #[test]
    fn test_missing_column() {
        let err = n_grams(&table(&[&["x"]]), "lemmas", 2).unwrap_err();
        assert!(matches!(err, crate::error::DiaristError::Column(_)));
    }

    #[test]
    fn test_most_used_words() {
        let values = vec![
            SentenceValue::from("The garden and the rain."),
            SentenceValue::from("Rain again, rain!"),
        ];

        let words = most_used_words(&values, stop_words()).unwrap();

        assert_eq!(words.label, "words");
        assert_eq!(words.entries[0].term, "rain");
        assert_eq!(words.entries[0].count, 2);
        assert_eq!(words.get("Rain"), Some(1));
        assert_eq!(words.get("the"), None);
        assert_eq!(words.get("The"), None);
        assert_eq!(words.terms(), vec!["rain", "garden", "Rain", "again"]);
    }

    #[test]
    fn test_nested_values_flatten_one_level() {
        let values = vec![
            SentenceValue::from(vec![
                vec!["cat".to_string(), "nap".to_string()],
                vec!["cat".to_string()],
            ]),
            SentenceValue::from("nap"),
        ];

        let words = most_used_words(&values, stop_words()).unwrap();
        assert_eq!(words.get("cat"), Some(2));
        assert_eq!(words.get("nap"), Some(2));
    }

    #[test]
    fn test_from_column_keeps_token_lists() {
        let row = Document::builder()
            .add_field(
                "lemmas",
                FieldValue::NestedTextList(vec![
                    vec!["cat".to_string(), "nap".to_string()],
                    vec!["cat".to_string()],
                ]),
            )
            .add_text_list("sentences", ["The cat napped."])
            .add_field("word_count", FieldValue::Integer(3))
            .build();

        let lemmas = SentenceValue::from_column(&row, "lemmas").unwrap();
        let words = most_used_words(&[lemmas], stop_words()).unwrap();
        assert_eq!(words.get("cat"), Some(2));
        assert_eq!(words.get("nap"), Some(1));

        assert_eq!(
            SentenceValue::from_column(&row, "sentences").unwrap(),
            SentenceValue::Nested(vec![vec!["The cat napped.".to_string()]])
        );
        let err = SentenceValue::from_column(&row, "word_count").unwrap_err();
        assert!(matches!(err, DiaristError::Column(_)));
    }

    #[test]
    fn test_flag_ignored_by_default_policy() {
        let values = vec![SentenceValue::from("the cat and the hat")];
        let ranker = WordRanker::new(stop_words());

        let words = ranker.rank(&values, false).unwrap();
        assert_eq!(words.get("the"), None);
    }

    #[test]
    fn test_flag_honored_when_configured() {
        let values = vec![SentenceValue::from("the cat and the hat")];
        let ranker = WordRanker::new(stop_words()).with_policy(StopwordPolicy::HonorFlag);

        let kept = ranker.rank(&values, false).unwrap();
        assert_eq!(kept.get("the"), Some(2));

        let removed = ranker.rank(&values, true).unwrap();
        assert_eq!(removed.get("the"), None);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let values = vec![SentenceValue::from("I walked the dog and the dog slept")];
        let first = most_used_words(&values, stop_words()).unwrap();

        let again = vec![SentenceValue::from(first.terms().join(" "))];
        let second = most_used_words(&again, stop_words()).unwrap();

        assert_eq!(first.terms(), second.terms());
        assert!(second.terms().iter().all(|t| !stop_words().is_stop_word(t)));
    }

    #[test]
    fn test_remove_stop_words() {
        let ranker = WordRanker::new(stop_words());
        let words = ranker.remove_stop_words("I think, therefore I am.").unwrap();
        assert_eq!(words, vec!["think", "therefore", "am"]);
    }
}
