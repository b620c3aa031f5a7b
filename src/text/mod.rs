//! Text processing for content-based recommendation.
//!
//! This module provides the stages of the text pipeline:
//! - Tokenization (splitting documents into candidate terms)
//! - Stop word filtering
//! - TF-IDF vectorization over a bounded vocabulary
//! - Cosine similarity between document vectors
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::TfidfVectorizer;
//!
//! let docs = vec!["space war robots", "romantic comedy wedding"];
//!
//! let mut vectorizer = TfidfVectorizer::new();
//! let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
//! assert_eq!(matrix.n_rows(), 2);
//! ```

pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

use crate::error::Result;

/// Tokenization seam: splits raw text into candidate terms.
///
/// Implementations decide word boundaries only; case folding and stop word
/// removal belong to the vectorizer configuration.
pub trait Tokenizer {
    /// Split `text` into tokens, in document order.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

pub use similarity::{cosine_similarity, pairwise_cosine_similarity};
pub use stopwords::{StopWordsFilter, ENGLISH_STOP_WORDS};
pub use tokenize::{WhitespaceTokenizer, WordTokenizer};
pub use vectorize::{CountVectorizer, TfidfVectorizer};
