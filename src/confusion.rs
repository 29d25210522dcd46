//! Predicted-versus-true tally matrix.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sentiment::{check_labels, Sentiment};

/// 3x3 tally of predicted-versus-true sentiment labels.
///
/// Cell `[p][t]` counts instances predicted as label `p` whose true label is
/// `t`: rows index the prediction and columns the ground truth. This is the
/// transpose of the usual true-row/predicted-column layout; callers
/// expecting that convention must transpose.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    cells: [[usize; 3]; 3],
}

impl ConfusionMatrix {
    /// Tally paired label sequences into a fresh matrix.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] for unequal sequences and
    /// [`Error::LabelOutOfRange`] when either sequence contains a label
    /// outside the sentiment encoding; no cell is touched in either case.
    pub fn from_labels(y_pred: &[usize], y_true: &[usize]) -> Result<Self> {
        if y_pred.len() != y_true.len() {
            return Err(Error::LengthMismatch {
                predicted: y_pred.len(),
                actual: y_true.len(),
            });
        }
        check_labels(y_pred)?;
        check_labels(y_true)?;

        let mut cells = [[0usize; 3]; 3];
        for (&pred, &actual) in y_pred.iter().zip(y_true.iter()) {
            cells[pred][actual] += 1;
        }

        Ok(Self { cells })
    }

    /// Count of instances predicted as `predicted` whose true label is
    /// `actual`.
    pub fn get(&self, predicted: Sentiment, actual: Sentiment) -> usize {
        self.cells[predicted.label()][actual.label()]
    }

    /// The raw cells, rows indexed by predicted label.
    pub fn cells(&self) -> &[[usize; 3]; 3] {
        &self.cells
    }

    /// Total number of tallied instances.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// How many instances were predicted as `class` (row sum).
    pub fn predicted_count(&self, class: Sentiment) -> usize {
        self.cells[class.label()].iter().sum()
    }

    /// How many instances truly belong to `class` (column sum).
    pub fn actual_count(&self, class: Sentiment) -> usize {
        self.cells.iter().map(|row| row[class.label()]).sum()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        // Header
        write!(f, "      ")?;
        for t in 0..3 {
            write!(f, "True {t} ")?;
        }
        writeln!(f)?;

        // Rows
        for p in 0..3 {
            write!(f, "Pred {p}")?;
            for t in 0..3 {
                write!(f, "{:>6} ", self.cells[p][t])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
