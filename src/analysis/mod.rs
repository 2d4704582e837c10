//! Text analysis building blocks.
//!
//! Char filters, tokenizers and token filters are chained by a
//! [`PipelineAnalyzer`]. Stemming, lemmatization and stopword lists are
//! external capabilities wrapped behind small traits and types.

pub mod analyzer;
pub mod char_filter;
pub mod lemmatizer;
pub mod stemmer;
pub mod stopwords;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use lemmatizer::{DictionaryLemmatizer, Lemmatizer};
pub use stemmer::{SnowballStemmer, Stemmer, StemmerLanguage};
pub use stopwords::StopWords;
pub use token::{Token, TokenStream};
