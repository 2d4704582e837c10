//! Text cleanup: segmentation, normalization and frequency analysis.

pub mod frequency;
pub mod normalize;
pub mod segment;

pub use frequency::{
    FrequencyEntry, FrequencyTable, SentenceValue, StopwordPolicy, WordRanker, most_used_words,
    n_grams,
};
pub use normalize::{lemmatize_sentences, stem_sentences};
pub use segment::{split_sentences, word_count};
