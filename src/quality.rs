//! Derived per-class metrics and macro aggregates.

use serde::{Deserialize, Serialize};

use crate::counts::BaseMetrics;
use crate::error::{Error, Result};
use crate::sentiment::Sentiment;

/// Precision, recall and specificity for one focus class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// TP / (TP + FP)
    #[serde(rename = "Precision")]
    pub precision: f64,
    /// TP / (TP + FN)
    #[serde(rename = "Recall")]
    pub recall: f64,
    /// TN / (FP + TN)
    #[serde(rename = "Specificity")]
    pub specificity: f64,
}

impl ClassMetrics {
    /// Derive precision, recall and specificity from one-vs-rest counts.
    ///
    /// # Errors
    /// A class that never occurs in the predictions or the ground truth
    /// zeroes one of the denominators; that surfaces as
    /// [`Error::DegenerateClass`] naming the class and the metric, never as
    /// a silent zero.
    pub fn from_counts(counts: &BaseMetrics, focus: Sentiment) -> Result<Self> {
        Ok(Self {
            precision: ratio(
                counts.true_positives,
                counts.true_positives + counts.false_positives,
                focus,
                "precision",
            )?,
            recall: ratio(
                counts.true_positives,
                counts.true_positives + counts.false_negatives,
                focus,
                "recall",
            )?,
            specificity: ratio(
                counts.true_negatives,
                counts.false_positives + counts.true_negatives,
                focus,
                "specificity",
            )?,
        })
    }
}

fn ratio(numer: usize, denom: usize, focus: Sentiment, metric: &'static str) -> Result<f64> {
    if denom == 0 {
        return Err(Error::DegenerateClass {
            class: focus,
            metric,
        });
    }
    Ok(numer as f64 / denom as f64)
}

/// Balanced accuracy: the arithmetic mean of the three per-class recalls.
pub fn balanced_accuracy(pos: &ClassMetrics, neu: &ClassMetrics, neg: &ClassMetrics) -> f64 {
    (pos.recall + neu.recall + neg.recall) / 3.0
}

/// Macro F-score from mean precision (MAP) and mean recall (MAR), using the
/// inverse-sum form of Grandini et al.: `2·MAP·MAR / (MAP⁻¹ + MAR⁻¹)`.
///
/// # Errors
/// A zero mean has no reciprocal; that surfaces as
/// [`Error::DegenerateMacro`], never as a silent zero score.
pub fn macro_f_score(pos: &ClassMetrics, neu: &ClassMetrics, neg: &ClassMetrics) -> Result<f64> {
    let mean_precision = (pos.precision + neu.precision + neg.precision) / 3.0;
    let mean_recall = (pos.recall + neu.recall + neg.recall) / 3.0;

    if mean_precision == 0.0 {
        return Err(Error::DegenerateMacro { mean: "precision" });
    }
    if mean_recall == 0.0 {
        return Err(Error::DegenerateMacro { mean: "recall" });
    }

    Ok(2.0 * mean_precision * mean_recall / (mean_precision.recip() + mean_recall.recip()))
}
