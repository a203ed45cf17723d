//! Model Confidence Library
//!
//! Softmax selection probabilities and Chernoff-Hoeffding risk bounds for a
//! fixed set of candidate trading models.
//!
//! # Modules
//!
//! - `softmax` - Softmax normalization of raw model scores
//! - `bounds` - Chernoff-Hoeffding upper confidence bound evaluator
//! - `evaluation` - The fixed five-model scenario and its printed report
//! - `error` - Library error types
//!
//! # Example
//!
//! ```rust
//! use model_confidence::{evaluate, ChernoffHoeffding};
//!
//! // Bound a single model's risk directly
//! let chb = ChernoffHoeffding::new(0.05, 300).unwrap();
//! let bound = chb.bound(0.32, 0.64).unwrap();
//! assert!(bound > 0.32);
//!
//! // Or run the full fixed evaluation
//! let report = evaluate().unwrap();
//! assert_eq!(report.lines().len(), 6);
//! ```

pub mod bounds;
pub mod error;
pub mod evaluation;
pub mod softmax;

// Re-export commonly used types
pub use bounds::ChernoffHoeffding;
pub use error::{Error, Result};
pub use evaluation::{evaluate, ConfidenceReport};
pub use softmax::{exp_scores, normalize, softmax};
