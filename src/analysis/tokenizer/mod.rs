//! Tokenizer implementations for text analysis.
//!
//! - [`word::WordTokenizer`] - Unicode word boundaries, punctuation kept as tokens

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod word;

pub use word::WordTokenizer;
