//! In-memory journal table.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::document::converter::DocumentConverter;
use crate::document::converter::jsonl::{JsonlDocumentConverter, write_documents};
use crate::document::{Document, FieldValue};
use crate::error::{DiaristError, Result};

/// Column holding the entry date.
pub const DATE_COLUMN: &str = "date";
/// Column holding the raw entry text.
pub const TEXT_COLUMN: &str = "text";
/// Column holding the per-sentence language codes.
pub const LANGUAGES_COLUMN: &str = "languages";
/// Column holding the entry word count.
pub const WORD_COUNT_COLUMN: &str = "word_count";

/// An ordered collection of journal entries, one [`Document`] per row.
///
/// Filters never mutate a table; they build a new one holding clones of the
/// retained rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalTable {
    rows: Vec<Document>,
}

impl JournalTable {
    pub fn new() -> Self {
        JournalTable { rows: Vec::new() }
    }

    pub fn from_documents(rows: Vec<Document>) -> Self {
        JournalTable { rows }
    }

    /// Load a table from a JSON Lines file.
    pub fn from_jsonl<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let rows = JsonlDocumentConverter::new()
            .with_date_field(DATE_COLUMN)
            .convert(path)?
            .collect::<Result<Vec<_>>>()?;

        info!("Loaded {} journal entries from {}", rows.len(), path.display());
        Ok(JournalTable { rows })
    }

    /// Write the table as JSON Lines, returning the number of rows written.
    pub fn write_jsonl<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        let written = write_documents(&mut writer, &self.rows)?;

        info!("Wrote {written} journal entries to {}", path.display());
        Ok(written)
    }

    pub fn push(&mut self, row: Document) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Document] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.rows.iter()
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.rows
    }

    /// Build a new table from the rows for which `predicate` returns `Ok(true)`.
    ///
    /// The first error aborts the filter.
    pub fn try_filter<F>(&self, mut predicate: F) -> Result<JournalTable>
    where
        F: FnMut(&Document) -> Result<bool>,
    {
        let mut rows = Vec::new();
        for row in &self.rows {
            if predicate(row)? {
                rows.push(row.clone());
            }
        }

        debug!("Filter kept {} of {} rows", rows.len(), self.rows.len());
        Ok(JournalTable { rows })
    }

    /// Read a list-of-strings column from a row.
    ///
    /// Fails with a column error when the column is missing or holds a
    /// value that is not a list.
    pub fn text_list<'a>(row: &'a Document, column: &str) -> Result<&'a [String]> {
        let value = row.require_field(column)?;
        value.as_text_list().ok_or_else(|| {
            DiaristError::column(format!(
                "column '{column}' holds a {}, expected a text list",
                value.type_name()
            ))
        })
    }

    /// Read the date column from a row. `Null` yields `None`.
    pub fn date(row: &Document) -> Result<Option<NaiveDate>> {
        let value = row.require_field(DATE_COLUMN)?;
        if value.is_null() {
            return Ok(None);
        }
        value.as_date().map(Some).ok_or_else(|| {
            DiaristError::column(format!(
                "column '{DATE_COLUMN}' holds a {}, expected a date",
                value.type_name()
            ))
        })
    }
}

impl From<Vec<Document>> for JournalTable {
    fn from(rows: Vec<Document>) -> Self {
        JournalTable::from_documents(rows)
    }
}

impl FromIterator<Document> for JournalTable {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        JournalTable {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a JournalTable {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for JournalTable {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
