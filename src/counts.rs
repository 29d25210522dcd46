//! One-vs-rest base-metric counts.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sentiment::{check_labels, Sentiment};

/// TP/FP/TN/FN tallies for a single focus class.
///
/// Every labelled instance lands in exactly one of the four buckets, so the
/// counts always sum to the number of instances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseMetrics {
    /// Predicted the focus class and the ground truth agrees
    #[serde(rename = "TP")]
    pub true_positives: usize,
    /// Predicted the focus class but the ground truth is another class
    #[serde(rename = "FP")]
    pub false_positives: usize,
    /// Neither predicted nor labelled as the focus class
    #[serde(rename = "TN")]
    pub true_negatives: usize,
    /// Labelled as the focus class but the prediction missed it
    #[serde(rename = "FN")]
    pub false_negatives: usize,
}

impl BaseMetrics {
    /// Count one-vs-rest outcomes for `focus` over paired label sequences.
    ///
    /// Per instance the branches apply in a fixed order: true positive when
    /// both labels equal the focus label, otherwise false negative when the
    /// true label is the focus label, otherwise false positive when the
    /// prediction claimed the focus label, otherwise true negative.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] for unequal sequences and
    /// [`Error::LabelOutOfRange`] when either sequence contains a label
    /// outside the sentiment encoding.
    pub fn count(y_pred: &[usize], y_true: &[usize], focus: Sentiment) -> Result<Self> {
        if y_pred.len() != y_true.len() {
            return Err(Error::LengthMismatch {
                predicted: y_pred.len(),
                actual: y_true.len(),
            });
        }
        check_labels(y_pred)?;
        check_labels(y_true)?;

        let target = focus.label();
        let counts = y_pred.iter().zip(y_true.iter()).fold(
            BaseMetrics::default(),
            |mut counts, (&pred, &actual)| {
                if pred == target && actual == target {
                    counts.true_positives += 1;
                } else if pred != actual && actual == target {
                    counts.false_negatives += 1;
                } else if pred != actual && pred == target {
                    counts.false_positives += 1;
                } else {
                    counts.true_negatives += 1;
                }
                counts
            },
        );

        Ok(counts)
    }

    /// Total number of instances the counts were taken over.
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }
}
