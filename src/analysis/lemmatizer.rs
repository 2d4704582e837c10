//! Lemmatization capability.
//!
//! Nouns are reduced the way WordNet's morphy does it. A form listed in the
//! exception table (`resources/lemmas_en.tsv`) maps straight to its lemma.
//! Any other form is run through the noun suffix rules, and a candidate is
//! accepted only if it appears in the base-form list
//! (`resources/nouns_en.txt`). Words that match nothing come back unchanged.
//! Lookups are case-sensitive, so `Friends` is left alone.
//!
//! # Examples
//!
//! ```
//! use diarist::analysis::lemmatizer::{DictionaryLemmatizer, Lemmatizer};
//!
//! let lemmatizer = DictionaryLemmatizer::english().unwrap();
//! assert_eq!(lemmatizer.lemmatize("children"), "child");
//! assert_eq!(lemmatizer.lemmatize("gardens"), "garden");
//! assert_eq!(lemmatizer.lemmatize("journaling"), "journaling");
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{DiaristError, Result};

const ENGLISH_EXCEPTIONS: &str = include_str!("../../resources/lemmas_en.tsv");
const ENGLISH_NOUNS: &str = include_str!("../../resources/nouns_en.txt");

/// Noun detachment rules: (suffix, replacement), in WordNet order.
const NOUN_RULES: [(&str, &str); 9] = [
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Trait for lemmatizers that map a word to its dictionary base form.
pub trait Lemmatizer: Send + Sync {
    /// Return the base form of a word, or the word itself if unknown.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

/// A lemmatizer backed by an exception table and a set of known base forms.
#[derive(Clone, Debug, Default)]
pub struct DictionaryLemmatizer {
    exceptions: HashMap<String, String>,
    base_forms: HashSet<String>,
}

impl DictionaryLemmatizer {
    /// Create a lemmatizer with no exceptions and no base forms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lemmatizer over the embedded English resources.
    pub fn english() -> Result<Self> {
        let mut lemmatizer = Self::from_tsv(ENGLISH_EXCEPTIONS)?;
        lemmatizer.extend_base_forms(ENGLISH_NOUNS.lines());
        Ok(lemmatizer)
    }

    /// Parse an exception table of `form<TAB>lemma` lines. Blank lines and
    /// lines starting with `#` are ignored.
    pub fn from_tsv(content: &str) -> Result<Self> {
        let mut lemmatizer = Self::new();
        lemmatizer.extend_from_tsv(content)?;
        Ok(lemmatizer)
    }

    /// Add the entries of a `form<TAB>lemma` file, overriding existing forms.
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DiaristError::resource(format!(
                "Failed to read lemma dictionary {}: {e}",
                path.display()
            ))
        })?;
        self.extend_from_tsv(&content)?;
        debug!(
            "Loaded lemma dictionary {} ({} exceptions total)",
            path.display(),
            self.len()
        );
        Ok(())
    }

    /// Add the entries of a `form<TAB>lemma` string, overriding existing forms.
    pub fn extend_from_tsv(&mut self, content: &str) -> Result<()> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (form, lemma) = line.split_once('\t').ok_or_else(|| {
                DiaristError::parse(format!(
                    "Lemma dictionary line {} is not tab-separated: {line}",
                    line_num + 1
                ))
            })?;
            self.insert(form.trim(), lemma.trim());
        }
        Ok(())
    }

    /// Register words the suffix rules may reduce to. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn extend_base_forms<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() && !word.starts_with('#') {
                self.base_forms.insert(word.to_string());
            }
        }
    }

    /// Add a single exception.
    pub fn insert<F: Into<String>, L: Into<String>>(&mut self, form: F, lemma: L) {
        self.exceptions.insert(form.into(), lemma.into());
    }

    /// Number of exceptions.
    pub fn len(&self) -> usize {
        self.exceptions.len()
    }

    /// Check if the exception table is empty.
    pub fn is_empty(&self) -> bool {
        self.exceptions.is_empty()
    }

    /// Number of known base forms.
    pub fn base_form_count(&self) -> usize {
        self.base_forms.len()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }

        let mut best: Option<String> = self
            .base_forms
            .contains(word)
            .then(|| word.to_string());
        for (suffix, replacement) in NOUN_RULES {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            let candidate = format!("{stem}{replacement}");
            if candidate.is_empty() || !self.base_forms.contains(&candidate) {
                continue;
            }
            if best.as_ref().is_none_or(|current| candidate.len() < current.len()) {
                best = Some(candidate);
            }
        }

        best.unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
