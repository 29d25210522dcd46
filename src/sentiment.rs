//! Sentiment label set and focus-class dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Three-class sentiment label
///
/// The consuming pipeline encodes labels as integers: 0 for negative, 1 for
/// neutral, 2 for positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Encoded as label 0
    Negative,
    /// Encoded as label 1
    Neutral,
    /// Encoded as label 2
    Positive,
}

impl Sentiment {
    /// Integer label for this sentiment in the pipeline encoding.
    pub fn label(self) -> usize {
        match self {
            Sentiment::Negative => 0,
            Sentiment::Neutral => 1,
            Sentiment::Positive => 2,
        }
    }

    /// Sentiment for a raw label, if it is in range.
    pub fn try_from_label(label: usize) -> Option<Self> {
        match label {
            0 => Some(Sentiment::Negative),
            1 => Some(Sentiment::Neutral),
            2 => Some(Sentiment::Positive),
            _ => None,
        }
    }

    /// Resolve a focus-class name as used by the pipeline ("pos", "neu",
    /// "neg"). Unrecognized names fall back to `Negative`, matching the
    /// dispatch the pipeline has always used.
    pub fn from_focus_name(name: &str) -> Self {
        match name {
            "pos" => Sentiment::Positive,
            "neu" => Sentiment::Neutral,
            _ => Sentiment::Negative,
        }
    }

    /// Get sentiment name as string
    pub fn name(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Reject the first label outside the sentiment encoding.
pub(crate) fn check_labels(labels: &[usize]) -> Result<()> {
    match labels
        .iter()
        .position(|&label| Sentiment::try_from_label(label).is_none())
    {
        Some(index) => Err(Error::LabelOutOfRange {
            index,
            label: labels[index],
        }),
        None => Ok(()),
    }
}
