//! Stopword provisioning.
//!
//! [`StopWords::english`] unions two independently maintained English lists:
//! the default list of the Spark ML pipeline and the NLTK corpus list. The
//! resulting set is built once at start-up and then shared read-only
//! (usually behind an `Arc`) by every operation that removes stopwords.
//!
//! # Examples
//!
//! ```
//! use diarist::analysis::stopwords::StopWords;
//!
//! let stop_words = StopWords::english().unwrap();
//! assert!(stop_words.is_stop_word("The"));
//! assert!(!stop_words.is_stop_word("journal"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};
use stopwords::{Language, NLTK, Spark, Stopwords};

use crate::error::{DiaristError, Result};

/// An immutable set of lowercase stopwords.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build the English stopword set from the pipeline and corpus lists.
    ///
    /// Fails if either list is unavailable; there is no fallback to a
    /// single source.
    pub fn english() -> Result<Self> {
        let pipeline = Spark::stopwords(Language::English).ok_or_else(|| {
            DiaristError::resource("Spark pipeline English stopword list is unavailable")
        })?;
        let corpus = NLTK::stopwords(Language::English).ok_or_else(|| {
            DiaristError::resource("NLTK corpus English stopword list is unavailable")
        })?;

        debug!(
            "Loaded {} pipeline and {} corpus stopwords",
            pipeline.len(),
            corpus.len()
        );

        let stop_words = Self::from_words(pipeline.iter().chain(corpus.iter()).copied());
        info!("Built stopword set with {} words", stop_words.len());
        Ok(stop_words)
    }

    /// Build a stopword set from arbitrary words. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopWords {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Read one stopword per line from a file. Blank lines and lines starting
    /// with `#` are ignored.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DiaristError::resource(format!(
                "Failed to read stopword file {}: {e}",
                path.display()
            ))
        })?;

        Ok(Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        ))
    }

    /// Return a new set containing the words of both sets.
    pub fn union(mut self, other: StopWords) -> Self {
        self.words.extend(other.words);
        self
    }

    /// Check whether an already lowercased word is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Check whether a word is a stopword, ignoring case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Iterate over the stopwords in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
