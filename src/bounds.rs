//! Chernoff-Hoeffding upper confidence bounds
//!
//! Combines an empirical risk estimate with a concentration term that
//! shrinks with the number of observed samples:
//!
//!   bound = risk + sqrt((ln(1/probability) + ln(1/delta)) / (2 * n))
//!
//! Reference:
//! Hoeffding, W., 1963. Probability inequalities for sums of bounded random
//! variables. Journal of the American Statistical Association, 58(301).

use crate::error::{Error, Result};

/// Chernoff-Hoeffding bound evaluator
///
/// Holds the confidence parameter `delta` and the sample count `n`; the
/// per-model probability and empirical risk are supplied per evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChernoffHoeffding {
    /// Confidence parameter (smaller = wider, more conservative bound)
    delta: f64,
    /// Number of observed samples
    samples: u64,
}

impl ChernoffHoeffding {
    /// Create a new bound evaluator.
    ///
    /// # Arguments
    ///
    /// * `delta` - Confidence parameter in (0, 1]. At exactly 1.0 the
    ///             `ln(1/delta)` term vanishes and only the probability
    ///             term remains.
    /// * `samples` - Number of observed samples, must be positive.
    pub fn new(delta: f64, samples: u64) -> Result<Self> {
        if !(delta > 0.0 && delta <= 1.0) {
            return Err(Error::InvalidConfidence(delta));
        }
        if samples == 0 {
            return Err(Error::ZeroSamples);
        }
        Ok(Self { delta, samples })
    }

    /// Confidence parameter.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Sample count.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Concentration term: sqrt((ln(1/probability) + ln(1/delta)) / (2n)).
    ///
    /// `probability` must lie in (0, 1]; a non-positive value would put the
    /// logarithm outside its domain and is rejected.
    pub fn epsilon(&self, probability: f64) -> Result<f64> {
        if !(probability > 0.0 && probability <= 1.0) {
            return Err(Error::InvalidProbability(probability));
        }
        let numerator = (1.0 / probability).ln() + (1.0 / self.delta).ln();
        Ok((numerator / (2.0 * self.samples as f64)).sqrt())
    }

    /// Upper confidence bound on the true risk: `risk + epsilon(probability)`.
    pub fn bound(&self, risk: f64, probability: f64) -> Result<f64> {
        Ok(risk + self.epsilon(probability)?)
    }
}
