//! TF-IDF vectorization over a bounded vocabulary.
//!
//! Two layers, fitted in sequence:
//! - [`CountVectorizer`] learns the vocabulary and produces raw term counts.
//! - [`TfidfVectorizer`] scales those counts by inverse document frequency.

use std::collections::{HashMap, HashSet};

use crate::error::{RecomendarError, Result};
use crate::primitives::Matrix;
use crate::text::{StopWordsFilter, Tokenizer, WordTokenizer};

/// Count vectorizer: learns a vocabulary and maps documents to term counts.
///
/// Configuration follows the builder pattern. Defaults: [`WordTokenizer`],
/// lowercasing on, no stop words, no document-frequency threshold, unbounded
/// vocabulary.
///
/// # Examples
///
/// ```
/// use recomendar::text::CountVectorizer;
///
/// let docs = vec!["cat dog", "dog bird", "cat bird bird"];
///
/// let mut vectorizer = CountVectorizer::new();
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
///
/// assert_eq!(matrix.n_rows(), 3);
/// assert_eq!(matrix.n_cols(), 3); // cat, dog, bird
/// ```
#[allow(missing_debug_implementations)]
pub struct CountVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    /// Term -> column index, learned by `fit`
    vocabulary: HashMap<String, usize>,
    lowercase: bool,
    max_features: Option<usize>,
    min_df: usize,
    stop_words: Option<StopWordsFilter>,
}

impl CountVectorizer {
    /// Create a new `CountVectorizer` with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer::new()),
            vocabulary: HashMap::new(),
            lowercase: true,
            max_features: None,
            min_df: 1,
            stop_words: None,
        }
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether tokens are lowercased before vocabulary lookup.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Use the default English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Use custom stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words));
        self
    }

    /// Set the minimum document frequency.
    ///
    /// Terms appearing in fewer than `min_df` documents are excluded from
    /// the vocabulary.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Cap the vocabulary size.
    ///
    /// When the corpus has more qualifying terms than `max_features`, the
    /// terms with the highest aggregate corpus frequency are retained;
    /// frequency ties break lexicographically, so the selection is
    /// deterministic for a given corpus and cap.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Learn vocabulary from documents and transform them to a count matrix.
    ///
    /// # Errors
    ///
    /// See [`CountVectorizer::fit`] and [`CountVectorizer::transform`].
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Learn the vocabulary from documents.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if the vocabulary cap is zero (checked
    /// before any document is read), or an error for an empty document
    /// collection.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if self.max_features == Some(0) {
            return Err(RecomendarError::InvalidHyperparameter {
                param: "max_features".to_string(),
                value: "0".to_string(),
                constraint: "must be positive".to_string(),
            });
        }

        if documents.is_empty() {
            return Err("cannot fit on an empty document collection".into());
        }

        let mut corpus_freq: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = self.terms_of(doc.as_ref())?;

            let mut seen: HashSet<String> = HashSet::new();
            for term in terms {
                *corpus_freq.entry(term.clone()).or_insert(0) += 1;
                seen.insert(term);
            }
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut qualifying: Vec<(String, usize)> = corpus_freq
            .into_iter()
            .filter(|(term, _)| doc_freq.get(term).copied().unwrap_or(0) >= self.min_df)
            .collect();

        // Highest aggregate frequency first; lexicographic tie-break keeps
        // the cap deterministic.
        qualifying.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        if let Some(cap) = self.max_features {
            qualifying.truncate(cap);
        }

        self.vocabulary = qualifying
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();

        Ok(())
    }

    /// Transform documents to a count matrix using the learned vocabulary.
    ///
    /// Terms outside the vocabulary are ignored; a document with no
    /// vocabulary terms yields an all-zero row. A corpus whose vocabulary
    /// came out empty yields a zero-width matrix, which is valid, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty document collection or a tokenizer
    /// failure.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        if documents.is_empty() {
            return Err("cannot transform an empty document collection".into());
        }

        let n_docs = documents.len();
        let vocab_size = self.vocabulary.len();
        let mut data = vec![0.0; n_docs * vocab_size];

        for (doc_idx, doc) in documents.iter().enumerate() {
            for term in self.terms_of(doc.as_ref())? {
                if let Some(&col) = self.vocabulary.get(&term) {
                    data[doc_idx * vocab_size + col] += 1.0;
                }
            }
        }

        Matrix::from_vec(n_docs, vocab_size, data).map_err(|e: &str| e.into())
    }

    /// Tokenize, case-fold, and drop stop words, in that order.
    ///
    /// `fit` and `transform` must agree on this processing, so both go
    /// through here.
    fn terms_of(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;

        Ok(tokens
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .filter(|t| {
                self.stop_words
                    .as_ref()
                    .map_or(true, |sw| !sw.is_stop_word(t))
            })
            .collect())
    }

    /// Get the learned vocabulary (term -> column index).
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// TF-IDF vectorizer: term counts scaled by inverse document frequency.
///
/// **Formula:**
/// ```text
/// tfidf(t, d) = tf(t, d) × idf(t)
/// tf(t, d)    = count of term t in document d
/// idf(t)      = ln((1 + N) / (1 + df(t))) + 1
/// where N = total documents, df(t) = documents containing term t
/// ```
///
/// The smoothed idf keeps weights finite and positive; terms present in
/// every document still contribute, just minimally.
///
/// # Examples
///
/// ```
/// use recomendar::text::TfidfVectorizer;
///
/// let docs = vec![
///     "the cat sat on the mat",
///     "the dog sat on the log",
/// ];
///
/// let mut vectorizer = TfidfVectorizer::new();
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
/// assert_eq!(matrix.n_rows(), 2);
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    /// Count vectorizer for term frequencies
    counts: CountVectorizer,
    /// Inverse document frequency per vocabulary column; `None` until fitted
    idf: Option<Vec<f64>>,
}

impl TfidfVectorizer {
    /// Create a new `TfidfVectorizer` with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: CountVectorizer::new(),
            idf: None,
        }
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.counts = self.counts.with_tokenizer(tokenizer);
        self
    }

    /// Set whether tokens are lowercased before vocabulary lookup.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.counts = self.counts.with_lowercase(lowercase);
        self
    }

    /// Use the default English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.counts = self.counts.with_stop_words_english();
        self
    }

    /// Use custom stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.counts = self.counts.with_stop_words(words);
        self
    }

    /// Set the minimum document frequency.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.counts = self.counts.with_min_df(min_df);
        self
    }

    /// Cap the vocabulary size.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.counts = self.counts.with_max_features(max_features);
        self
    }

    /// Learn vocabulary and transform documents in one pass.
    ///
    /// # Errors
    ///
    /// See [`TfidfVectorizer::fit`].
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Learn the vocabulary and per-term inverse document frequencies.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidHyperparameter` for a zero vocabulary cap and the
    /// count layer's empty-collection error.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        self.counts.fit(documents)?;

        let counts = self.counts.transform(documents)?;
        let (n_docs, vocab_size) = counts.shape();

        let mut idf = vec![0.0; vocab_size];
        for (col, weight) in idf.iter_mut().enumerate() {
            let df = (0..n_docs).filter(|&row| counts.get(row, col) > 0.0).count();
            *weight = ((n_docs + 1) as f64 / (df + 1) as f64).ln() + 1.0;
        }

        self.idf = Some(idf);
        Ok(())
    }

    /// Transform documents to a TF-IDF matrix using the fitted model.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has not completed successfully.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        let idf = self.idf.as_ref().ok_or(RecomendarError::NotFitted)?;

        let mut matrix = self.counts.transform(documents)?;
        for row in 0..matrix.n_rows() {
            for (col, &weight) in idf.iter().enumerate() {
                let tf = matrix.get(row, col);
                if tf > 0.0 {
                    matrix.set(row, col, tf * weight);
                }
            }
        }

        Ok(matrix)
    }

    /// Get the learned vocabulary (term -> column index).
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        self.counts.vocabulary()
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.counts.vocabulary_size()
    }

    /// Per-column inverse document frequencies; empty until fitted.
    #[must_use]
    pub fn idf_values(&self) -> &[f64] {
        self.idf.as_deref().unwrap_or(&[])
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
