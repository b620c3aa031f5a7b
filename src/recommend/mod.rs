//! Content-based recommendation over a text catalog.
//!
//! [`ContentRecommender`] turns a catalog of titled items into an all-pairs
//! cosine similarity model: one TF-IDF document per item (its text fields
//! concatenated), a dense N x N similarity matrix, and a case-insensitive
//! title index for lookups. Fitting costs O(N² · V) time and O(N²) memory;
//! every pair is paid for up front so queries are a row scan.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::data::TextFrame;
//! use recomendar::recommend::ContentRecommender;
//!
//! let catalog = TextFrame::new(vec![
//!     ("title".to_string(), vec![
//!         "Alpha".to_string(),
//!         "Beta".to_string(),
//!         "Gamma".to_string(),
//!     ]),
//!     ("overview".to_string(), vec![
//!         "space war robots".to_string(),
//!         "space war robots".to_string(),
//!         "romantic comedy wedding".to_string(),
//!     ]),
//! ]).expect("catalog columns have equal lengths");
//!
//! let mut recommender = ContentRecommender::new();
//! recommender.fit(&catalog).expect("fit should succeed");
//!
//! let recs = recommender.recommend("alpha", 2).expect("title exists");
//! assert_eq!(recs[0].0, "Beta"); // identical overview ranks first
//! ```

use std::collections::HashMap;

use crate::data::TextFrame;
use crate::error::{RecomendarError, Result};
use crate::primitives::Matrix;
use crate::text::{pairwise_cosine_similarity, TfidfVectorizer};

/// Catalog column holding the display title and lookup key.
const TITLE_COLUMN: &str = "title";

/// Text columns that must be present in the catalog.
const REQUIRED_TEXT_COLUMNS: &[&str] = &["overview"];

/// Text columns folded into the document when present.
const OPTIONAL_TEXT_COLUMNS: &[&str] = &["genres", "keywords"];

/// Default vocabulary cap for the TF-IDF model.
const DEFAULT_MAX_FEATURES: usize = 5000;

/// Everything `fit` produces; present only after a fully successful fit.
struct FittedModel {
    features: Matrix<f64>,
    similarity: Matrix<f64>,
    /// Normalized title -> row index; duplicate titles keep the last row
    title_index: HashMap<String, usize>,
    /// Display titles in row order
    titles: Vec<String>,
}

/// Item-to-item recommender over TF-IDF cosine similarity.
///
/// `fit` is all-or-nothing: on any failure the recommender stays unfitted
/// and `recommend` keeps refusing with `NotFitted`. A fitted recommender is
/// immutable; concurrent reads through `&self` are safe.
pub struct ContentRecommender {
    max_features: usize,
    fitted: Option<FittedModel>,
}

impl ContentRecommender {
    /// Create an unfitted recommender with the default vocabulary cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            fitted: None,
        }
    }

    /// Cap the TF-IDF vocabulary size (default 5000).
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Build the similarity model from a catalog.
    ///
    /// Pipeline: validate the schema, concatenate each row's text fields
    /// into one document, fit TF-IDF, compute the pairwise similarity
    /// matrix, index titles. The catalog must have `title` and `overview`
    /// columns; `genres` and `keywords` are folded in when present and
    /// treated as empty otherwise.
    ///
    /// Duplicate normalized titles keep the last-seen row in the index;
    /// the earlier rows stay in the corpus and can still appear in results.
    ///
    /// # Errors
    ///
    /// - `InvalidHyperparameter` if the vocabulary cap is zero (checked
    ///   before any catalog data is read).
    /// - `MissingColumn` naming the first absent required column.
    /// - The vectorizer's error for an empty (zero-row) catalog.
    pub fn fit(&mut self, catalog: &TextFrame) -> Result<()> {
        if self.max_features == 0 {
            return Err(RecomendarError::InvalidHyperparameter {
                param: "max_features".to_string(),
                value: "0".to_string(),
                constraint: "must be positive".to_string(),
            });
        }

        let titles = catalog.column(TITLE_COLUMN)?;

        let mut fields: Vec<&[String]> = Vec::new();
        for &required in REQUIRED_TEXT_COLUMNS {
            fields.push(catalog.column(required)?);
        }
        for &optional in OPTIONAL_TEXT_COLUMNS {
            if let Ok(column) = catalog.column(optional) {
                fields.push(column);
            }
        }

        let documents: Vec<String> = (0..catalog.n_rows())
            .map(|row| {
                fields
                    .iter()
                    .map(|column| column[row].trim())
                    .filter(|text| !text.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        let mut vectorizer = TfidfVectorizer::new()
            .with_stop_words_english()
            .with_max_features(self.max_features);
        let features = vectorizer.fit_transform(&documents)?;

        let similarity = pairwise_cosine_similarity(&features)?;

        let mut title_index = HashMap::with_capacity(titles.len());
        for (row, title) in titles.iter().enumerate() {
            title_index.insert(normalize_title(title), row);
        }

        self.fitted = Some(FittedModel {
            features,
            similarity,
            title_index,
            titles: titles.to_vec(),
        });
        Ok(())
    }

    /// Return up to `top_n` items most similar to `title`, best first.
    ///
    /// The query is matched case-insensitively (trimmed and lowercased).
    /// The query item itself is excluded from the candidates. Ranking is
    /// score-descending with ties broken by row order, so repeated calls
    /// return identical lists. Fewer than `top_n` results simply means the
    /// catalog ran out of candidates.
    ///
    /// # Errors
    ///
    /// - `NotFitted` if called before a successful [`ContentRecommender::fit`].
    /// - `TitleNotFound` carrying the query when no title matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::data::TextFrame;
    /// use recomendar::recommend::ContentRecommender;
    ///
    /// let catalog = TextFrame::new(vec![
    ///     ("title".to_string(), vec!["Solo".to_string()]),
    ///     ("overview".to_string(), vec!["space heist".to_string()]),
    /// ]).expect("catalog columns have equal lengths");
    ///
    /// let mut recommender = ContentRecommender::new();
    /// recommender.fit(&catalog).expect("fit should succeed");
    ///
    /// // A one-item catalog has no candidates besides the query
    /// let recs = recommender.recommend("Solo", 5).expect("title exists");
    /// assert!(recs.is_empty());
    /// ```
    pub fn recommend(&self, title: &str, top_n: usize) -> Result<Vec<(String, f64)>> {
        let model = self.fitted.as_ref().ok_or(RecomendarError::NotFitted)?;

        let key = normalize_title(title);
        let &query_row =
            model
                .title_index
                .get(&key)
                .ok_or_else(|| RecomendarError::TitleNotFound {
                    title: title.to_string(),
                })?;

        let scores = model.similarity.row_slice(query_row);

        let mut candidates: Vec<(usize, f64)> = scores
            .iter()
            .enumerate()
            .filter(|&(row, _)| row != query_row)
            .map(|(row, &score)| (row, score))
            .collect();

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        candidates.truncate(top_n);

        Ok(candidates
            .into_iter()
            .map(|(row, score)| (model.titles[row].clone(), score))
            .collect())
    }

    /// True once `fit` has completed successfully.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Number of items in the fitted catalog, if fitted.
    #[must_use]
    pub fn n_items(&self) -> Option<usize> {
        self.fitted.as_ref().map(|m| m.titles.len())
    }

    /// The N x V TF-IDF feature matrix, if fitted.
    #[must_use]
    pub fn feature_matrix(&self) -> Option<&Matrix<f64>> {
        self.fitted.as_ref().map(|m| &m.features)
    }

    /// The N x N similarity matrix, if fitted.
    #[must_use]
    pub fn similarity_matrix(&self) -> Option<&Matrix<f64>> {
        self.fitted.as_ref().map(|m| &m.similarity)
    }
}

impl Default for ContentRecommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Title normalization used for both index keys and query lookups.
fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
