//! Cosine similarity between document vectors.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::cosine_similarity;
//! use recomendar::primitives::Vector;
//!
//! let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
//! let b = Vector::from_slice(&[2.0, 3.0, 4.0]);
//!
//! let sim = cosine_similarity(&a, &b).expect("cosine similarity should succeed");
//! assert!(sim > 0.9);
//! ```

use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Compute cosine similarity between two vectors.
///
/// Measures the angle between the vectors: 1.0 means identical direction,
/// 0.0 orthogonal, -1.0 opposite. Over non-negative TF-IDF weights the
/// result is in [0.0, 1.0].
///
/// # Formula
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// A zero-norm vector (an empty or all-stop-word document) is similar to
/// nothing: the result is 0.0, not an error.
///
/// # Errors
///
/// Returns an error if the vectors have different lengths.
///
/// # Examples
///
/// ```
/// use recomendar::text::cosine_similarity;
/// use recomendar::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0]);
/// let zero = Vector::zeros(2);
/// assert_eq!(cosine_similarity(&v, &zero).expect("same length"), 0.0);
/// ```
pub fn cosine_similarity(a: &Vector<f64>, b: &Vector<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err("vectors must have the same length".into());
    }

    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    // Rounding can push identical vectors a hair past 1.0.
    Ok((a.dot(b) / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

/// Compute pairwise cosine similarities between all rows of a feature matrix.
///
/// Returns an N x N symmetric matrix with the diagonal fixed at 1.0 by
/// construction; only the upper triangle is computed and then mirrored.
///
/// Both this computation (O(N² · V) time) and the returned matrix
/// (O(N²) memory, dense) scale quadratically with the number of rows;
/// large corpora pay for every pair up front.
///
/// # Errors
///
/// Propagates [`cosine_similarity`] failures; with rows of one matrix these
/// cannot occur.
///
/// # Examples
///
/// ```
/// use recomendar::text::pairwise_cosine_similarity;
/// use recomendar::primitives::Matrix;
///
/// let features = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).expect("2*2=4 elements");
/// let sims = pairwise_cosine_similarity(&features).expect("should succeed");
///
/// assert_eq!(sims.shape(), (2, 2));
/// assert_eq!(sims.get(0, 0), 1.0);
/// assert_eq!(sims.get(0, 1), 0.0);
/// ```
pub fn pairwise_cosine_similarity(features: &Matrix<f64>) -> Result<Matrix<f64>> {
    let n = features.n_rows();
    let rows: Vec<Vector<f64>> = (0..n).map(|i| features.row(i)).collect();

    let mut sims = Matrix::zeros(n, n);
    for i in 0..n {
        sims.set(i, i, 1.0);
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let sim = cosine_similarity(&rows[i], &rows[j])?;
            sims.set(i, j, sim);
            sims.set(j, i, sim);
        }
    }

    Ok(sims)
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
