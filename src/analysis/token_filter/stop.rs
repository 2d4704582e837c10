//! Stop filter implementation.
//!
//! Removes tokens whose lowercase form is in a shared [`StopWords`] set.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use diarist::analysis::stopwords::StopWords;
//! use diarist::analysis::token::Token;
//! use diarist::analysis::token_filter::Filter;
//! use diarist::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new(Arc::new(StopWords::from_words(["the"])));
//! let tokens = vec![Token::new("The", 0), Token::new("quick", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "quick");
//! ```

use std::sync::Arc;

use crate::analysis::stopwords::StopWords;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
///
/// Matching is case-insensitive: the token text is lowercased before the
/// lookup, but the surviving tokens keep their original casing.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The shared set of stop words
    stop_words: Arc<StopWords>,
}

impl StopFilter {
    /// Create a new stop filter over a shared stopword set.
    pub fn new(stop_words: Arc<StopWords>) -> Self {
        StopFilter { stop_words }
    }

    /// Check if a word is a stop word, ignoring case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.is_stop_word(word)
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> StopFilter {
        StopFilter::new(Arc::new(StopWords::from_words(["the", "and", "or"])))
    }

    #[test]
    fn test_stop_filter() {
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("The", 1),
            Token::new("world", 2),
            Token::new("AND", 3),
            Token::new("test", 4),
        ];

        let result: Vec<Token> = filter().filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_stop_filter_keeps_positions() {
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
        ];

        let result: Vec<Token> = filter().filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].position, 0);
        assert_eq!(result[1].position, 2);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(filter().name(), "stop");
    }
}
