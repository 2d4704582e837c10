//! Turn raw journal entries into analysis-ready rows.
//!
//! A raw row carries a `date` and the entry `text`. A prepared row replaces
//! the text with its `sentences`, their `word_count`, and one detected
//! language code per sentence in `languages`.

use log::{debug, info};

use crate::config::DEFAULT_SENTENCE_COLUMN;
use crate::document::{Document, FieldValue};
use crate::error::{DiaristError, Result};
use crate::journal::table::{JournalTable, LANGUAGES_COLUMN, TEXT_COLUMN, WORD_COUNT_COLUMN};
use crate::text::segment::{split_sentences, word_count};

/// Code recorded for a sentence whose language could not be determined.
pub const UNDETERMINED_LANGUAGE: &str = "und";

/// Detects the language of a piece of text.
pub trait LanguageDetector: Send + Sync {
    /// ISO 639-3 code of the language, or `None` when unsure.
    fn detect(&self, text: &str) -> Option<String>;

    /// Get the name of this detector.
    fn name(&self) -> &'static str;
}

/// Language detection backed by `whatlang`.
#[derive(Clone, Debug, Default)]
pub struct WhatlangDetector {
    min_confidence: f64,
}

impl WhatlangDetector {
    /// Accept every detection whatlang makes.
    pub fn new() -> Self {
        WhatlangDetector { min_confidence: 0.0 }
    }

    /// Reject detections below `min_confidence` (0.0 to 1.0).
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        whatlang::detect(text)
            .filter(|info| info.confidence() >= self.min_confidence)
            .map(|info| info.lang().code().to_string())
    }

    fn name(&self) -> &'static str {
        "whatlang"
    }
}

/// Prepares raw entries with a given language detector.
pub struct EntryPreparer<'a> {
    detector: &'a dyn LanguageDetector,
    sentence_column: String,
}

impl<'a> EntryPreparer<'a> {
    pub fn new(detector: &'a dyn LanguageDetector, sentence_column: impl Into<String>) -> Self {
        EntryPreparer {
            detector,
            sentence_column: sentence_column.into(),
        }
    }

    /// Prepare one raw row. Columns other than `text` are carried over.
    pub fn prepare_entry(&self, row: &Document) -> Result<Document> {
        let value = row.require_field(TEXT_COLUMN)?;
        let text = match value {
            FieldValue::Text(text) => text.as_str(),
            FieldValue::Null => "",
            other => {
                return Err(DiaristError::column(format!(
                    "column '{TEXT_COLUMN}' holds a {}, expected text",
                    other.type_name()
                )));
            }
        };

        let sentences = split_sentences(text);
        let languages: Vec<String> = sentences
            .iter()
            .map(|sentence| {
                self.detector
                    .detect(sentence)
                    .unwrap_or_else(|| UNDETERMINED_LANGUAGE.to_string())
            })
            .collect();
        let words = word_count(&sentences);

        let mut prepared = row.clone();
        prepared.remove_field(TEXT_COLUMN);
        prepared.add_field(WORD_COUNT_COLUMN, FieldValue::Integer(words as i64));
        prepared.add_field(LANGUAGES_COLUMN, FieldValue::TextList(languages));
        prepared.add_field(self.sentence_column.as_str(), FieldValue::TextList(sentences));
        Ok(prepared)
    }

    /// Prepare every row of a raw table.
    pub fn prepare(&self, table: &JournalTable) -> Result<JournalTable> {
        let prepared = table
            .iter()
            .map(|row| self.prepare_entry(row))
            .collect::<Result<JournalTable>>()?;

        info!(
            "Prepared {} entries using the {} detector",
            prepared.len(),
            self.detector.name()
        );
        debug!(
            "Prepared entries hold {} sentences",
            prepared
                .iter()
                .filter_map(|row| row.get_field(&self.sentence_column))
                .filter_map(FieldValue::as_text_list)
                .map(<[String]>::len)
                .sum::<usize>()
        );
        Ok(prepared)
    }
}

/// Prepare raw entries into the `sentences` column with whatlang detection.
pub fn prepare_entries(table: &JournalTable) -> Result<JournalTable> {
    let detector = WhatlangDetector::new();
    EntryPreparer::new(&detector, DEFAULT_SENTENCE_COLUMN).prepare(table)
}
