//! Tokenization for text preprocessing.
//!
//! Two strategies:
//! - `WordTokenizer` extracts alphanumeric word runs and drops one-character
//!   tokens; punctuation separates words. This is the default for TF-IDF.
//! - `WhitespaceTokenizer` splits on Unicode whitespace and keeps
//!   punctuation attached to words.

use crate::error::Result;
use crate::text::Tokenizer;

/// Word tokenizer that extracts runs of alphanumeric characters.
///
/// Any non-alphanumeric character is a separator, so `"sci-fi"` becomes
/// `["sci", "fi"]`. Tokens shorter than two characters are dropped; single
/// letters and stray digits carry no ranking signal.
///
/// # Examples
///
/// ```
/// use recomendar::text::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Hello, world!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Hello", "world"]);
///
/// // One-character tokens are dropped
/// let tokens = tokenizer.tokenize("a space odyssey").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["space", "odyssey"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.chars().count() >= 2)
            .map(ToString::to_string)
            .collect();

        Ok(tokens)
    }
}

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// Preserves punctuation attached to words, which makes it mostly useful
/// for pre-cleaned corpora and for tests where exact token boundaries
/// matter.
///
/// # Examples
///
/// ```
/// use recomendar::text::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
///
/// let tokens = tokenizer.tokenize("foo   bar\nbaz").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["foo", "bar", "baz"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text.split_whitespace().map(ToString::to_string).collect();

        Ok(tokens)
    }
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
