//! Stemming capability.
//!
//! Stemming itself is delegated to the Snowball algorithms shipped by
//! `rust-stemmers`; this module only adapts them to the [`Stemmer`] trait
//! used by [`crate::analysis::token_filter::stem::StemFilter`].

use std::fmt;
use std::str::FromStr;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

use crate::error::{DiaristError, Result};

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Languages with a Snowball stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StemmerLanguage {
    #[default]
    English,
    French,
    German,
    Italian,
    Portuguese,
    Spanish,
    Dutch,
    Swedish,
}

impl StemmerLanguage {
    fn algorithm(self) -> Algorithm {
        match self {
            StemmerLanguage::English => Algorithm::English,
            StemmerLanguage::French => Algorithm::French,
            StemmerLanguage::German => Algorithm::German,
            StemmerLanguage::Italian => Algorithm::Italian,
            StemmerLanguage::Portuguese => Algorithm::Portuguese,
            StemmerLanguage::Spanish => Algorithm::Spanish,
            StemmerLanguage::Dutch => Algorithm::Dutch,
            StemmerLanguage::Swedish => Algorithm::Swedish,
        }
    }
}

impl FromStr for StemmerLanguage {
    type Err = DiaristError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(StemmerLanguage::English),
            "fr" | "french" => Ok(StemmerLanguage::French),
            "de" | "german" => Ok(StemmerLanguage::German),
            "it" | "italian" => Ok(StemmerLanguage::Italian),
            "pt" | "portuguese" => Ok(StemmerLanguage::Portuguese),
            "es" | "spanish" => Ok(StemmerLanguage::Spanish),
            "nl" | "dutch" => Ok(StemmerLanguage::Dutch),
            "sv" | "swedish" => Ok(StemmerLanguage::Swedish),
            other => Err(DiaristError::invalid_argument(format!(
                "Unsupported stemmer language: {other}"
            ))),
        }
    }
}

/// Suffix-stripping stemmer backed by a Snowball algorithm.
///
/// Words are lowercased before stemming.
pub struct SnowballStemmer {
    language: StemmerLanguage,
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    /// Create a stemmer for the given language.
    pub fn new(language: StemmerLanguage) -> Self {
        SnowballStemmer {
            language,
            inner: rust_stemmers::Stemmer::create(language.algorithm()),
        }
    }

    /// Create an English stemmer.
    pub fn english() -> Self {
        Self::new(StemmerLanguage::English)
    }

    /// The language this stemmer was built for.
    pub fn language(&self) -> StemmerLanguage {
        self.language
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stemmer() {
        let stemmer = SnowballStemmer::english();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("Running"), "run");
    }

    #[test]
    fn test_punctuation_passes_through() {
        let stemmer = SnowballStemmer::english();
        assert_eq!(stemmer.stem("."), ".");
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("en".parse::<StemmerLanguage>().unwrap(), StemmerLanguage::English);
        assert_eq!("German".parse::<StemmerLanguage>().unwrap(), StemmerLanguage::German);
        assert!("klingon".parse::<StemmerLanguage>().is_err());
    }

    #[test]
    fn test_stemmer_name() {
        assert_eq!(SnowballStemmer::default().name(), "snowball");
    }
}
