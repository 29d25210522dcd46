//! Property tests for sentiment evaluation metrics
//!
//! Ensures the metrics satisfy their mathematical invariants:
//! - Base counts partition the input for every focus class
//! - Accuracy and derived metrics stay within their bounds
//! - Perfect predictions score 100% with a diagonal confusion matrix
//! - Confusion matrix marginals match per-class prediction/truth counts

use medir::{
    correctness_vector, evaluate_performance, vanilla_accuracy, BaseMetrics, ClassMetrics,
    ConfusionMatrix, Sentiment,
};
use proptest::collection::vec;
use proptest::prelude::*;

const CLASSES: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

/// Generate a vector of sentiment labels
fn labels(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<usize>> {
    vec(0usize..3, len)
}

/// Generate prediction/truth pairs with the same length
fn label_pair(len: std::ops::Range<usize>) -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    len.prop_flat_map(|l| (vec(0usize..3, l), vec(0usize..3, l)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_base_counts_partition_input(
        (y_pred, y_true) in label_pair(1..200)
    ) {
        for class in CLASSES {
            let counts = BaseMetrics::count(&y_pred, &y_true, class).unwrap();
            prop_assert_eq!(
                counts.total(),
                y_pred.len(),
                "counts for {} do not partition the input",
                class
            );
        }
    }

    #[test]
    fn prop_accuracy_bounded(
        (y_pred, y_true) in label_pair(1..200)
    ) {
        let correct = correctness_vector(&y_pred, &y_true).unwrap();
        let acc = vanilla_accuracy(&correct).unwrap();

        prop_assert!(
            (0.0..=100.0).contains(&acc),
            "Accuracy {} not in [0, 100]",
            acc
        );
    }

    #[test]
    fn prop_perfect_predictions(
        y in labels(1..200)
    ) {
        let correct = correctness_vector(&y, &y).unwrap();
        prop_assert_eq!(vanilla_accuracy(&correct).unwrap(), 100.0);

        let cm = ConfusionMatrix::from_labels(&y, &y).unwrap();
        let diagonal: usize = (0..3).map(|i| cm.cells()[i][i]).sum();
        prop_assert_eq!(diagonal, y.len(), "off-diagonal tally for identical labels");
        prop_assert_eq!(cm.total(), y.len());
    }

    #[test]
    fn prop_all_wrong_predictions_have_no_true_positives(
        y_true in labels(1..200)
    ) {
        // Rotate every label so no prediction ever matches the truth.
        let y_pred: Vec<usize> = y_true.iter().map(|&t| (t + 1) % 3).collect();

        for class in CLASSES {
            let counts = BaseMetrics::count(&y_pred, &y_true, class).unwrap();
            prop_assert_eq!(counts.true_positives, 0);
        }
    }

    #[test]
    fn prop_class_metrics_bounded(
        (y_pred, y_true) in label_pair(1..200)
    ) {
        for class in CLASSES {
            let counts = BaseMetrics::count(&y_pred, &y_true, class).unwrap();
            if let Ok(metrics) = ClassMetrics::from_counts(&counts, class) {
                prop_assert!((0.0..=1.0).contains(&metrics.precision));
                prop_assert!((0.0..=1.0).contains(&metrics.recall));
                prop_assert!((0.0..=1.0).contains(&metrics.specificity));
            }
        }
    }

    #[test]
    fn prop_confusion_marginals(
        (y_pred, y_true) in label_pair(1..200)
    ) {
        let cm = ConfusionMatrix::from_labels(&y_pred, &y_true).unwrap();

        for class in CLASSES {
            let label = class.label();
            let predicted = y_pred.iter().filter(|&&p| p == label).count();
            let actual = y_true.iter().filter(|&&t| t == label).count();

            prop_assert_eq!(cm.predicted_count(class), predicted);
            prop_assert_eq!(cm.actual_count(class), actual);
        }
    }

    #[test]
    fn prop_report_metrics_bounded(
        (y_pred, y_true) in label_pair(1..200)
    ) {
        // Degenerate label distributions are rejected with an error; when a
        // report is produced, every aggregate is finite and in range.
        if let Ok(report) = evaluate_performance(&y_pred, &y_true) {
            prop_assert!((0.0..=100.0).contains(&report.accuracy));
            prop_assert!((0.0..=1.0).contains(&report.balanced_accuracy));
            prop_assert!(
                report.f_score.is_finite() && (0.0..=1.0).contains(&report.f_score),
                "F-score {} out of range",
                report.f_score
            );
        }
    }
}
