//! Whole-evaluation orchestration and the labeled result record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::correctness::{correctness_vector, vanilla_accuracy};
use crate::counts::BaseMetrics;
use crate::error::Result;
use crate::quality::{balanced_accuracy, macro_f_score, ClassMetrics};
use crate::sentiment::Sentiment;

/// Every metric of one evaluation run.
///
/// The consuming pipeline reads the record by key, so the serialized field
/// names are fixed: `Accuracy`, `Base Positive`, `Base Neutral`,
/// `Base Negative`, `Advanced Positive`, `Advanced Neutral`,
/// `Advanced Negative`, `Balanced Accuracy`, `F_Score`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Percentage of correct predictions, 0-100
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    /// One-vs-rest counts for the positive class
    #[serde(rename = "Base Positive")]
    pub base_positive: BaseMetrics,
    /// One-vs-rest counts for the neutral class
    #[serde(rename = "Base Neutral")]
    pub base_neutral: BaseMetrics,
    /// One-vs-rest counts for the negative class
    #[serde(rename = "Base Negative")]
    pub base_negative: BaseMetrics,
    /// Derived metrics for the positive class
    #[serde(rename = "Advanced Positive")]
    pub advanced_positive: ClassMetrics,
    /// Derived metrics for the neutral class
    #[serde(rename = "Advanced Neutral")]
    pub advanced_neutral: ClassMetrics,
    /// Derived metrics for the negative class
    #[serde(rename = "Advanced Negative")]
    pub advanced_negative: ClassMetrics,
    /// Mean per-class recall, 0-1
    #[serde(rename = "Balanced Accuracy")]
    pub balanced_accuracy: f64,
    /// Macro F-score from mean precision and mean recall, 0-1
    #[serde(rename = "F_Score")]
    pub f_score: f64,
}

/// Run the full evaluation over paired label sequences.
///
/// Sub-steps run in a fixed order: correctness vector, vanilla accuracy,
/// base counts for positive/neutral/negative, derived metrics in the same
/// order, balanced accuracy, macro F-score. The first failing step aborts
/// the whole evaluation; no partial report is produced.
///
/// # Arguments
/// * `y_pred` - Predicted sentiment labels
/// * `y_true` - Ground truth sentiment labels
///
/// # Example
///
/// ```
/// use medir::evaluate_performance;
///
/// let report = evaluate_performance(&[2, 1, 0, 2], &[2, 1, 0, 0])?;
///
/// assert_eq!(report.accuracy, 75.0);
/// assert_eq!(report.base_positive.true_positives, 1);
/// assert_eq!(report.base_positive.false_positives, 1);
/// assert_eq!(report.base_negative.false_negatives, 1);
/// assert_eq!(report.advanced_neutral.precision, 1.0);
/// # Ok::<(), medir::Error>(())
/// ```
pub fn evaluate_performance(y_pred: &[usize], y_true: &[usize]) -> Result<PerformanceReport> {
    let correct = correctness_vector(y_pred, y_true)?;
    let accuracy = vanilla_accuracy(&correct)?;

    let base_positive = BaseMetrics::count(y_pred, y_true, Sentiment::Positive)?;
    let base_neutral = BaseMetrics::count(y_pred, y_true, Sentiment::Neutral)?;
    let base_negative = BaseMetrics::count(y_pred, y_true, Sentiment::Negative)?;

    let advanced_positive = ClassMetrics::from_counts(&base_positive, Sentiment::Positive)?;
    let advanced_neutral = ClassMetrics::from_counts(&base_neutral, Sentiment::Neutral)?;
    let advanced_negative = ClassMetrics::from_counts(&base_negative, Sentiment::Negative)?;

    let balanced = balanced_accuracy(&advanced_positive, &advanced_neutral, &advanced_negative);
    let f_score = macro_f_score(&advanced_positive, &advanced_neutral, &advanced_negative)?;

    Ok(PerformanceReport {
        accuracy,
        base_positive,
        base_neutral,
        base_negative,
        advanced_positive,
        advanced_neutral,
        advanced_negative,
        balanced_accuracy: balanced,
        f_score,
    })
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accuracy: {:.4}%", self.accuracy)?;
        writeln!(
            f,
            "{:>10} {:>10} {:>10} {:>12}",
            "", "precision", "recall", "specificity"
        )?;

        let rows = [
            ("positive", &self.advanced_positive),
            ("neutral", &self.advanced_neutral),
            ("negative", &self.advanced_negative),
        ];
        for (name, metrics) in rows {
            writeln!(
                f,
                "{:>10} {:>10.4} {:>10.4} {:>12.4}",
                name, metrics.precision, metrics.recall, metrics.specificity
            )?;
        }

        writeln!(f, "Balanced accuracy: {:.4}", self.balanced_accuracy)?;
        writeln!(f, "Macro F-score: {:.4}", self.f_score)
    }
}
