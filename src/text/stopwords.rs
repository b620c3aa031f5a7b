//! Stop word filtering for text preprocessing.
//!
//! Stop words are common function words ("the", "is", "at") that carry
//! little ranking signal; removing them keeps the TF-IDF vocabulary spent
//! on content-bearing terms.
//!
//! # Examples
//!
//! ```
//! use recomendar::text::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//!
//! let tokens = vec!["the", "quick", "brown", "fox"];
//! let filtered = filter.filter(&tokens);
//! assert_eq!(filtered, vec!["quick", "brown", "fox"]);
//! ```

use std::collections::HashSet;

/// Stop words filter backed by a `HashSet` for O(1) membership checks.
///
/// Matching is case-insensitive; filtered output preserves original case.
///
/// # Examples
///
/// ```
/// use recomendar::text::StopWordsFilter;
///
/// let filter = StopWordsFilter::english();
/// assert!(filter.is_stop_word("The"));
/// assert!(!filter.is_stop_word("robots"));
///
/// let custom = StopWordsFilter::new(vec!["foo", "bar"]);
/// assert!(custom.is_stop_word("FOO"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Stored lowercase for case-insensitive matching
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from custom stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::new(vec!["custom", "words"]);
    /// assert_eq!(filter.len(), 2);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the default English stop words.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Filter stop words from a list of tokens, preserving order and case.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// let tokens = vec!["The", "Matrix", "is", "a", "film"];
    /// assert_eq!(filter.filter(&tokens), vec!["Matrix", "film"]);
    /// ```
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref().to_string())
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }

    /// Check whether a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the filter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Default English stop words.
///
/// A compact list of English function words: articles, pronouns,
/// prepositions, conjunctions, auxiliary verbs, and a handful of common
/// adverbs. Content-bearing words never appear here.
///
/// # Examples
///
/// ```
/// use recomendar::text::ENGLISH_STOP_WORDS;
///
/// assert!(ENGLISH_STOP_WORDS.contains(&"the"));
/// assert!(!ENGLISH_STOP_WORDS.contains(&"robot"));
/// ```
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "back", "be", "because", "been", "before", "behind", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
    "each", "even", "ever", "every", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "itself", "just", "may", "me", "might", "more", "most",
    "much", "must", "my", "myself", "near", "no", "none", "nor", "not", "now", "of", "off", "on",
    "once", "only", "onto", "or", "other", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shall", "she", "should", "since", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "upon", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "whom", "whose", "why", "will", "with", "within",
    "without", "would", "you", "your", "yours", "yourself", "yourselves",
];

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
