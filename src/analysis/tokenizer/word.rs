//! Word tokenizer implementation.
//!
//! Splits text on Unicode word boundaries (UAX #29) and keeps every
//! non-whitespace segment, so punctuation marks come out as their own tokens
//! the way a treebank-style word tokenizer emits them.
//!
//! # Examples
//!
//! ```
//! use diarist::analysis::tokenizer::Tokenizer;
//! use diarist::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().map(|t| t.text).collect();
//! assert_eq!(tokens, vec!["Hello", ",", "world", "!"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries, dropping whitespace.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, segment)| !segment.chars().all(char::is_whitespace))
            .enumerate()
            .map(|(position, (offset, segment))| {
                Token::with_offsets(segment, position, offset, offset + segment.len())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
