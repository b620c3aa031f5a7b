//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::data::TextFrame;
pub use crate::error::{RecomendarError, Result};
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::ContentRecommender;
pub use crate::text::{
    cosine_similarity, pairwise_cosine_similarity, CountVectorizer, TfidfVectorizer,
};
