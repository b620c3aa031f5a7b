//! Recomendar: content-based recommendations in pure Rust.
//!
//! Recomendar turns a catalog of titled items with free-text descriptions
//! into an item-to-item recommender: TF-IDF vectorization over a bounded
//! vocabulary, an all-pairs cosine similarity matrix, and deterministic
//! top-N queries by case-insensitive title.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
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
//! assert_eq!(recs[0].0, "Beta");
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`data`]: `TextFrame` string tables and CSV loading
//! - [`text`]: Tokenization, stop words, TF-IDF, cosine similarity
//! - [`recommend`]: The `ContentRecommender` engine
//! - [`error`]: Error types and the crate `Result` alias

pub mod data;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod text;

pub use error::{RecomendarError, Result};
