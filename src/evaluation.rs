//! Fixed five-model confidence evaluation
//!
//! Five candidate models carry raw log-scores and empirical accuracies
//! measured over the same validation window. The scores are softmax-
//! normalized into selection probabilities, and each model's empirical risk
//! (1 - accuracy) gets a Chernoff-Hoeffding upper confidence bound with the
//! model's selection probability as the probability term.

use ndarray::Array1;

use crate::bounds::ChernoffHoeffding;
use crate::error::Result;
use crate::softmax::softmax;

/// Raw log-scores of the five candidate models.
pub const MODEL_SCORES: [f64; 5] = [-7.0, -8.0, -9.0, -10.0, -13.0];

/// Empirical accuracy of each model over the validation window.
///
/// An independent measurement; not derived from the scores.
pub const EMPIRICAL_ACCURACY: [f64; 5] = [0.68, 0.82, 0.79, 0.82, 0.83];

/// Confidence parameter for the risk bounds.
pub const CONFIDENCE_DELTA: f64 = 0.05;

/// Number of validation samples behind each accuracy estimate.
pub const SAMPLE_COUNT: u64 = 300;

/// Evaluation result: selection probabilities and per-model risk bounds,
/// both in model order.
#[derive(Debug, Clone)]
pub struct ConfidenceReport {
    /// Softmax selection probability of each model
    pub probabilities: Array1<f64>,
    /// Upper confidence bound on each model's true risk
    pub risk_bounds: Vec<f64>,
}

/// Run the evaluation over the fixed model set.
pub fn evaluate() -> Result<ConfidenceReport> {
    let scores = Array1::from_vec(MODEL_SCORES.to_vec());
    let probabilities = softmax(&scores);

    let chb = ChernoffHoeffding::new(CONFIDENCE_DELTA, SAMPLE_COUNT)?;
    let mut risk_bounds = Vec::with_capacity(EMPIRICAL_ACCURACY.len());
    for (&accuracy, &probability) in EMPIRICAL_ACCURACY.iter().zip(probabilities.iter()) {
        risk_bounds.push(chb.bound(1.0 - accuracy, probability)?);
    }

    Ok(ConfidenceReport {
        probabilities,
        risk_bounds,
    })
}

impl ConfidenceReport {
    /// Render the report: one line with the probabilities rounded to three
    /// decimals, then one rounded bound per model.
    pub fn lines(&self) -> Vec<String> {
        let rounded: Vec<f64> = self.probabilities.iter().map(|&p| round_to(p, 3)).collect();
        let mut lines = Vec::with_capacity(1 + self.risk_bounds.len());
        lines.push(format!("{:?}", rounded));
        for &bound in &self.risk_bounds {
            lines.push(format!("{}", round_to(bound, 3)));
        }
        lines
    }
}

/// Round to a fixed number of decimal places for display.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_probabilities_sum_to_one() {
        let report = evaluate().unwrap();
        assert_relative_eq!(report.probabilities.sum(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_probabilities_strictly_decreasing() {
        // Scores are strictly decreasing, so the probabilities must be too
        let report = evaluate().unwrap();
        let probs = &report.probabilities;
        for i in 1..probs.len() {
            assert!(probs[i] < probs[i - 1]);
        }
        for &p in probs.iter() {
            assert!(p > 0.0 && p < 1.0);
        }
    }

    #[test]
    fn test_reference_probabilities() {
        let report = evaluate().unwrap();
        let expected = [
            0.6428881436318332,
            0.23650533101502477,
            0.0870054490078743,
            0.03200751595988722,
            0.0015935603853804011,
        ];
        for (&p, &e) in report.probabilities.iter().zip(expected.iter()) {
            assert_relative_eq!(p, e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_reference_bounds() {
        let report = evaluate().unwrap();
        let expected = [
            0.395691443853411,
            0.2659991938292491,
            0.3051973109176273,
            0.2835818259764428,
            0.2954160861796209,
        ];
        assert_eq!(report.risk_bounds.len(), expected.len());
        for (&b, &e) in report.risk_bounds.iter().zip(expected.iter()) {
            assert_relative_eq!(b, e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_bounds_exceed_risks() {
        let report = evaluate().unwrap();
        for (&bound, &accuracy) in report.risk_bounds.iter().zip(EMPIRICAL_ACCURACY.iter()) {
            assert!(bound > 1.0 - accuracy);
        }
    }

    #[test]
    fn test_report_lines() {
        let report = evaluate().unwrap();
        let lines = report.lines();
        assert_eq!(
            lines,
            vec![
                "[0.643, 0.237, 0.087, 0.032, 0.002]".to_string(),
                "0.396".to_string(),
                "0.266".to_string(),
                "0.305".to_string(),
                "0.284".to_string(),
                "0.295".to_string(),
            ]
        );
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.23650533101502477, 3), 0.237);
        assert_eq!(round_to(0.0015935603853804011, 3), 0.002);
        assert_eq!(round_to(1.0, 3), 1.0);
        assert_eq!(round_to(-0.0015, 2), -0.0);
    }
}
