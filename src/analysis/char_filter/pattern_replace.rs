use regex::Regex;

use super::CharFilter;
use crate::error::{DiaristError, Result};

/// Anything that is neither a word character nor whitespace.
pub const SPECIAL_CHARACTERS_PATTERN: &str = r"[^\w\s]";

/// The ASCII punctuation set `!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`.
pub const ASCII_PUNCTUATION_PATTERN: &str = r"[[:punct:]]";

/// A char filter that replaces characters matching a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| DiaristError::analysis(format!("Invalid regex pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }

    /// Remove every character that is neither a word character nor whitespace.
    pub fn special_characters() -> Result<Self> {
        Self::new(SPECIAL_CHARACTERS_PATTERN, "")
    }

    /// Remove ASCII punctuation, leaving non-ASCII symbols untouched.
    pub fn ascii_punctuation() -> Result<Self> {
        Self::new(ASCII_PUNCTUATION_PATTERN, "")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
