//! Softmax normalization
//!
//! Turns a vector of raw model scores into a probability distribution:
//! each score is exponentiated and divided by the sum of all exponentials,
//! so the results sum to 1.

use ndarray::Array1;

/// Elementwise exponential: `e^x` for each score.
pub fn exp_scores(scores: &Array1<f64>) -> Array1<f64> {
    scores.mapv(f64::exp)
}

/// Divide each element by the sum of all elements.
///
/// Assumes a nonzero sum; with strictly positive inputs (exponentials)
/// this always holds.
pub fn normalize(values: &Array1<f64>) -> Array1<f64> {
    values / values.sum()
}

/// Softmax: exp(x_i) / sum(exp(x_j))
///
/// Scores are shifted by their maximum before exponentiating; the shift
/// cancels in the ratio and keeps the exponentials in range.
pub fn softmax(scores: &Array1<f64>) -> Array1<f64> {
    let max_score = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exp_shifted = scores.mapv(|x| (x - max_score).exp());
    let sum = exp_shifted.sum();
    exp_shifted / sum
}
