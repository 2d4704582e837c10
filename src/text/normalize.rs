//! Token-level normalization: lemmatization and stemming of sentences.
//!
//! Both operations tokenize every sentence with [`WordTokenizer`] (punctuation
//! survives as its own token) and map each token through the capability.
//! The result keeps one token sequence per sentence, in order.

use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::lemmatizer::{DictionaryLemmatizer, Lemmatizer};
use crate::analysis::stemmer::{SnowballStemmer, Stemmer};
use crate::analysis::token_filter::{LemmaFilter, StemFilter};
use crate::analysis::tokenizer::WordTokenizer;
use crate::error::Result;

/// Lemmatize every sentence with a freshly built English dictionary lemmatizer.
///
/// # Examples
///
/// ```
/// use diarist::text::normalize::lemmatize_sentences;
///
/// let lemmas = lemmatize_sentences(&["The cats met friends."]).unwrap();
/// assert_eq!(lemmas, vec![vec!["The", "cat", "met", "friend", "."]]);
/// ```
pub fn lemmatize_sentences<S: AsRef<str>>(sentences: &[S]) -> Result<Vec<Vec<String>>> {
    lemmatize_sentences_with(sentences, Arc::new(DictionaryLemmatizer::english()?))
}

/// Lemmatize every sentence with the given lemmatizer.
pub fn lemmatize_sentences_with<S: AsRef<str>>(
    sentences: &[S],
    lemmatizer: Arc<dyn Lemmatizer>,
) -> Result<Vec<Vec<String>>> {
    let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
        .add_filter(Arc::new(LemmaFilter::new(lemmatizer)))
        .with_name("lemmatize");

    analyze_each(&analyzer, sentences)
}

/// Stem every sentence with a freshly built English Snowball stemmer.
///
/// # Examples
///
/// ```
/// use diarist::text::normalize::stem_sentences;
///
/// let stems = stem_sentences(&["Running cats"]).unwrap();
/// assert_eq!(stems, vec![vec!["run", "cat"]]);
/// ```
pub fn stem_sentences<S: AsRef<str>>(sentences: &[S]) -> Result<Vec<Vec<String>>> {
    stem_sentences_with(sentences, Box::new(SnowballStemmer::english()))
}

/// Stem every sentence with the given stemmer.
pub fn stem_sentences_with<S: AsRef<str>>(
    sentences: &[S],
    stemmer: Box<dyn Stemmer>,
) -> Result<Vec<Vec<String>>> {
    let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
        .add_filter(Arc::new(StemFilter::with_stemmer(stemmer)))
        .with_name("stem");

    analyze_each(&analyzer, sentences)
}

fn analyze_each<S: AsRef<str>>(
    analyzer: &PipelineAnalyzer,
    sentences: &[S],
) -> Result<Vec<Vec<String>>> {
    let token_sequences = sentences
        .iter()
        .map(|sentence| analyzer.analyze_to_strings(sentence.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "{:?} produced {} token sequences",
        analyzer,
        token_sequences.len()
    );
    Ok(token_sequences)
}
