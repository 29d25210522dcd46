//! Elementwise correctness and vanilla accuracy.

use crate::error::{Error, Result};

/// Build the correctness vector for paired label sequences: 1 where the
/// prediction matches the ground truth at the same position, 0 otherwise.
///
/// # Arguments
/// * `y_pred` - Predicted labels
/// * `y_true` - Ground truth labels
///
/// # Errors
/// Returns [`Error::LengthMismatch`] when the sequences differ in length;
/// nothing is compared in that case.
pub fn correctness_vector(y_pred: &[usize], y_true: &[usize]) -> Result<Vec<u8>> {
    if y_pred.len() != y_true.len() {
        return Err(Error::LengthMismatch {
            predicted: y_pred.len(),
            actual: y_true.len(),
        });
    }

    Ok(y_pred
        .iter()
        .zip(y_true.iter())
        .map(|(pred, actual)| u8::from(pred == actual))
        .collect())
}

/// Percentage of correct predictions, rounded to four decimal places.
///
/// Ties round half away from zero (`f64::round`).
///
/// # Errors
/// Returns [`Error::EmptyInput`] for a zero-length correctness vector, where
/// the percentage would divide by zero.
pub fn vanilla_accuracy(correct: &[u8]) -> Result<f64> {
    if correct.is_empty() {
        return Err(Error::EmptyInput);
    }

    let hits = correct.iter().filter(|&&score| score == 1).count();
    Ok(round4(hits as f64 / correct.len() as f64 * 100.0))
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
