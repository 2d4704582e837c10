//! Configuration for journal analysis.
//!
//! [`AnalysisConfig`] can be built in code or loaded from a JSON file; every
//! field has a default, so a config file only needs the keys it overrides:
//!
//! ```json
//! { "ngram_size": 3, "any_match_threshold": "at_least_one" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::lemmatizer::DictionaryLemmatizer;
use crate::analysis::stemmer::{SnowballStemmer, StemmerLanguage};
use crate::analysis::stopwords::StopWords;
use crate::error::{DiaristError, Result};
use crate::journal::filter::AnyMatchThreshold;
use crate::text::frequency::StopwordPolicy;

/// Default name of the per-entry sentence list column.
pub const DEFAULT_SENTENCE_COLUMN: &str = "sentences";

/// Default n-gram window size.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Configuration for the text operations and journal filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Column holding each entry's list of sentences.
    pub sentence_column: String,

    /// Window size used by n-gram extraction.
    pub ngram_size: usize,

    /// Language of the Snowball stemmer.
    pub stemmer_language: StemmerLanguage,

    /// Extra stopwords, one per line, added to the built-in English set.
    pub extra_stopwords_file: Option<PathBuf>,

    /// Extra `form<TAB>lemma` exceptions added to the built-in English ones.
    pub lemma_dictionary_file: Option<PathBuf>,

    /// How many target languages an entry must share in `any` mode.
    pub any_match_threshold: AnyMatchThreshold,

    /// Whether most-used-word ranking honours its `remove_stopwords` flag.
    pub stopword_policy: StopwordPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sentence_column: DEFAULT_SENTENCE_COLUMN.to_string(),
            ngram_size: DEFAULT_NGRAM_SIZE,
            stemmer_language: StemmerLanguage::English,
            extra_stopwords_file: None,
            lemma_dictionary_file: None,
            any_match_threshold: AnyMatchThreshold::ExactlyOne,
            stopword_policy: StopwordPolicy::Always,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&content).map_err(|e| {
            DiaristError::parse(format!("Invalid config file {}: {e}", path.display()))
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Build the shared stopword set: the English lists plus any extra file.
    pub fn load_stop_words(&self) -> Result<Arc<StopWords>> {
        let mut stop_words = StopWords::english()?;
        if let Some(path) = &self.extra_stopwords_file {
            let extra = StopWords::from_file(path)?;
            info!(
                "Added {} stopwords from {}",
                extra.len(),
                path.display()
            );
            stop_words = stop_words.union(extra);
        }
        Ok(Arc::new(stop_words))
    }

    /// Build the lemmatizer: the English dictionary plus any extra file.
    pub fn load_lemmatizer(&self) -> Result<DictionaryLemmatizer> {
        let mut lemmatizer = DictionaryLemmatizer::english()?;
        if let Some(path) = &self.lemma_dictionary_file {
            lemmatizer.extend_from_file(path)?;
        }
        Ok(lemmatizer)
    }

    /// Build the configured stemmer.
    pub fn stemmer(&self) -> SnowballStemmer {
        SnowballStemmer::new(self.stemmer_language)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.sentence_column, "sentences");
        assert_eq!(config.ngram_size, 2);
        assert_eq!(config.any_match_threshold, AnyMatchThreshold::ExactlyOne);
        assert_eq!(config.stopword_policy, StopwordPolicy::Always);
    }

    #[test]
    fn test_partial_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"ngram_size": 3, "any_match_threshold": "at_least_one", "stemmer_language": "german"}}"#
        )
        .unwrap();

        let config = AnalysisConfig::from_file(file.path()).unwrap();
        assert_eq!(config.ngram_size, 3);
        assert_eq!(config.any_match_threshold, AnyMatchThreshold::AtLeastOne);
        assert_eq!(config.stemmer_language, StemmerLanguage::German);
        assert_eq!(config.sentence_column, "sentences");
        assert_eq!(config.stopword_policy, StopwordPolicy::Always);
    }

    #[test]
    fn test_invalid_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"ngram_size": "two"}}"#).unwrap();

        let err = AnalysisConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, DiaristError::Parse(_)));
    }

    #[test]
    fn test_extra_stopwords() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "basically").unwrap();

        let config = AnalysisConfig {
            extra_stopwords_file: Some(file.path().to_path_buf()),
            ..AnalysisConfig::default()
        };
        let stop_words = config.load_stop_words().unwrap();

        assert!(stop_words.contains("basically"));
        assert!(stop_words.contains("the"));
    }
}
