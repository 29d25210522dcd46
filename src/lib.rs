//! Multi-class sentiment evaluation metrics
//!
//! Computes classification performance metrics for the three-class sentiment
//! label set {negative=0, neutral=1, positive=2}: vanilla accuracy,
//! one-vs-rest TP/FP/TN/FN counts per class, precision/recall/specificity,
//! balanced accuracy, macro F-score, and the predicted-versus-true confusion
//! matrix. Everything is a pure function over in-memory label sequences; the
//! crate does no I/O and keeps no state between calls.
//!
//! ## Architecture
//!
//! - `sentiment`: the label set and focus-class dispatch
//! - `correctness`: elementwise correctness and vanilla accuracy
//! - `counts`: one-vs-rest base-metric counts per focus class
//! - `quality`: derived per-class metrics and the macro aggregates
//! - `confusion`: fixed 3x3 predicted-versus-true tally
//! - `report`: the `evaluate_performance` orchestrator and its result record
//!
//! ## Example
//!
//! ```
//! use medir::{evaluate_performance, ConfusionMatrix, Sentiment};
//!
//! let predictions = [2, 1, 0, 2];
//! let ground_truth = [2, 1, 0, 0];
//!
//! let report = evaluate_performance(&predictions, &ground_truth)?;
//! assert_eq!(report.accuracy, 75.0);
//!
//! let matrix = ConfusionMatrix::from_labels(&predictions, &ground_truth)?;
//! assert_eq!(matrix.get(Sentiment::Positive, Sentiment::Negative), 1);
//! # Ok::<(), medir::Error>(())
//! ```

pub mod confusion;
pub mod correctness;
pub mod counts;
pub mod error;
pub mod quality;
pub mod report;
pub mod sentiment;

pub use confusion::ConfusionMatrix;
pub use correctness::{correctness_vector, vanilla_accuracy};
pub use counts::BaseMetrics;
pub use error::{Error, Result};
pub use quality::{balanced_accuracy, macro_f_score, ClassMetrics};
pub use report::{evaluate_performance, PerformanceReport};
pub use sentiment::Sentiment;
