//! Row filters over a [`JournalTable`]: by detected language and by date.

use std::collections::HashSet;

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::journal::table::{JournalTable, LANGUAGES_COLUMN};

/// How a row's languages are compared with the target languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LanguageFilterMode {
    /// Keep rows whose language set intersects the targets.
    #[default]
    Any,
    /// Keep rows whose every language is a target.
    All,
    /// Keep every row.
    Passthrough,
}

impl LanguageFilterMode {
    /// Parse a mode name. Unknown names fall back to [`Passthrough`].
    ///
    /// [`Passthrough`]: LanguageFilterMode::Passthrough
    pub fn parse(mode: &str) -> Self {
        match mode {
            "any" => LanguageFilterMode::Any,
            "all" => LanguageFilterMode::All,
            other => {
                warn!("Unknown language filter mode '{other}', rows are not filtered");
                LanguageFilterMode::Passthrough
            }
        }
    }
}

/// Intersection size required by [`LanguageFilterMode::Any`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnyMatchThreshold {
    /// The row shares exactly one language with the targets.
    #[default]
    ExactlyOne,
    /// The row shares at least one language with the targets.
    AtLeastOne,
}

impl AnyMatchThreshold {
    pub fn accepts(&self, shared: usize) -> bool {
        match self {
            AnyMatchThreshold::ExactlyOne => shared == 1,
            AnyMatchThreshold::AtLeastOne => shared >= 1,
        }
    }
}

/// Filter rows by their `languages` column with the default threshold.
///
/// # Examples
///
/// ```
/// use diarist::document::Document;
/// use diarist::journal::JournalTable;
/// use diarist::journal::filter::{LanguageFilterMode, filter_entries_by_languages};
///
/// let table = JournalTable::from_documents(vec![
///     Document::builder().add_text_list("languages", ["eng", "eng"]).build(),
///     Document::builder().add_text_list("languages", ["eng", "fra"]).build(),
/// ]);
///
/// let english = filter_entries_by_languages(&table, &["eng"], LanguageFilterMode::All).unwrap();
/// assert_eq!(english.len(), 1);
/// ```
pub fn filter_entries_by_languages<S: AsRef<str>>(
    table: &JournalTable,
    languages: &[S],
    mode: LanguageFilterMode,
) -> Result<JournalTable> {
    filter_entries_by_languages_with(table, languages, mode, AnyMatchThreshold::default())
}

/// Filter rows by their `languages` column.
///
/// Every row must carry a `languages` list unless `mode` is
/// [`LanguageFilterMode::Passthrough`], which returns the table unchanged.
pub fn filter_entries_by_languages_with<S: AsRef<str>>(
    table: &JournalTable,
    languages: &[S],
    mode: LanguageFilterMode,
    threshold: AnyMatchThreshold,
) -> Result<JournalTable> {
    let targets: HashSet<&str> = languages.iter().map(|lang| lang.as_ref()).collect();

    let filtered = match mode {
        LanguageFilterMode::Passthrough => return Ok(table.clone()),
        LanguageFilterMode::Any => table.try_filter(|row| {
            let row_languages: HashSet<&str> = JournalTable::text_list(row, LANGUAGES_COLUMN)?
                .iter()
                .map(String::as_str)
                .collect();
            let shared = row_languages.intersection(&targets).count();
            Ok(threshold.accepts(shared))
        })?,
        LanguageFilterMode::All => table.try_filter(|row| {
            Ok(JournalTable::text_list(row, LANGUAGES_COLUMN)?
                .iter()
                .all(|lang| targets.contains(lang.as_str())))
        })?,
    };

    debug!(
        "Language filter {mode:?} on {targets:?} kept {} of {} entries",
        filtered.len(),
        table.len()
    );
    Ok(filtered)
}

/// Keep rows whose `date` lies within the inclusive `[start, end]` range.
///
/// An absent bound is unconstrained. With no bound at all the table is
/// returned unchanged. Otherwise rows with a `Null` date are dropped and a
/// missing or non-date `date` column is an error.
pub fn filter_entries_by_date(
    table: &JournalTable,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<JournalTable> {
    if start.is_none() && end.is_none() {
        return Ok(table.clone());
    }

    let filtered = table.try_filter(|row| {
        Ok(JournalTable::date(row)?.is_some_and(|date| {
            start.is_none_or(|start| date >= start) && end.is_none_or(|end| date <= end)
        }))
    })?;

    debug!(
        "Date filter {start:?}..={end:?} kept {} of {} entries",
        filtered.len(),
        table.len()
    );
    Ok(filtered)
}
