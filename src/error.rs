//! Evaluation error types.

use crate::sentiment::Sentiment;
use thiserror::Error;

/// Evaluation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Predicted and true label sequences differ in length.
    #[error("predictions and ground truth differ in length: {predicted} vs {actual}")]
    LengthMismatch { predicted: usize, actual: usize },

    /// Accuracy requested over zero instances.
    #[error("cannot compute accuracy over an empty label sequence")]
    EmptyInput,

    /// A per-class metric denominator is zero, which happens when the focus
    /// class never occurs in the predictions or the ground truth.
    #[error("{metric} for the {class} class is undefined: denominator is zero")]
    DegenerateClass {
        class: Sentiment,
        metric: &'static str,
    },

    /// Mean precision or mean recall is zero, so the macro F-score has no
    /// finite inverse-sum form.
    #[error("macro F-score is undefined: mean {mean} is zero")]
    DegenerateMacro { mean: &'static str },

    /// A label outside the sentiment encoding was supplied where labels are
    /// interpreted as classes.
    #[error("label {label} at index {index} is outside the sentiment range 0..=2")]
    LabelOutOfRange { index: usize, label: usize },
}

/// Result type for evaluation operations
pub type Result<T> = std::result::Result<T, Error>;
