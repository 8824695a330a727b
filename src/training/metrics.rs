//! Classification metrics: accuracy and a per-class precision/recall/F1
//! breakdown with macro and weighted averages.

use ndarray::Array1;
use std::fmt;

/// Fraction of positions where prediction and truth agree. Returns 0.0 for
/// empty inputs.
pub fn accuracy_score(y_true: &Array1<i64>, y_pred: &Array1<i64>) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    correct as f64 / y_true.len() as f64
}

/// One-vs-rest metrics for a single class label.
#[derive(Debug, Clone, Copy)]
pub struct ClassMetrics {
    pub label: i64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of true instances of this class
    pub support: usize,
}

impl ClassMetrics {
    fn compute(label: i64, y_true: &Array1<i64>, y_pred: &Array1<i64>) -> Self {
        let mut tp = 0usize;
        let mut predicted = 0usize;
        let mut support = 0usize;
        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            if p == label {
                predicted += 1;
            }
            if t == label {
                support += 1;
                if p == label {
                    tp += 1;
                }
            }
        }

        let precision = if predicted > 0 {
            tp as f64 / predicted as f64
        } else {
            0.0
        };
        let recall = if support > 0 {
            tp as f64 / support as f64
        } else {
            0.0
        };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Self {
            label,
            precision,
            recall,
            f1,
            support,
        }
    }
}

/// Per-class breakdown over the union of labels seen in truth or
/// predictions, sorted by label.
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    pub accuracy: f64,
    pub per_class: Vec<ClassMetrics>,
    pub macro_avg: (f64, f64, f64),
    pub weighted_avg: (f64, f64, f64),
    n_samples: usize,
}

impl ClassificationReport {
    pub fn compute(y_true: &Array1<i64>, y_pred: &Array1<i64>) -> Self {
        let mut labels: Vec<i64> = y_true.iter().chain(y_pred.iter()).copied().collect();
        labels.sort_unstable();
        labels.dedup();

        let per_class: Vec<ClassMetrics> = labels
            .into_iter()
            .map(|label| ClassMetrics::compute(label, y_true, y_pred))
            .collect();

        let n_classes = per_class.len().max(1) as f64;
        let macro_avg = (
            per_class.iter().map(|c| c.precision).sum::<f64>() / n_classes,
            per_class.iter().map(|c| c.recall).sum::<f64>() / n_classes,
            per_class.iter().map(|c| c.f1).sum::<f64>() / n_classes,
        );

        let n_samples = y_true.len();
        let total = n_samples.max(1) as f64;
        let weighted_avg = (
            per_class
                .iter()
                .map(|c| c.precision * c.support as f64)
                .sum::<f64>()
                / total,
            per_class
                .iter()
                .map(|c| c.recall * c.support as f64)
                .sum::<f64>()
                / total,
            per_class.iter().map(|c| c.f1 * c.support as f64).sum::<f64>() / total,
        );

        Self {
            accuracy: accuracy_score(y_true, y_pred),
            per_class,
            macro_avg,
            weighted_avg,
            n_samples,
        }
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>14} {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for class in &self.per_class {
            writeln!(
                f,
                "{:>14} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                class.label, class.precision, class.recall, class.f1, class.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>14} {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.n_samples
        )?;
        writeln!(
            f,
            "{:>14} {:>9.2} {:>9.2} {:>9.2} {:>9}",
            "macro avg", self.macro_avg.0, self.macro_avg.1, self.macro_avg.2, self.n_samples
        )?;
        writeln!(
            f,
            "{:>14} {:>9.2} {:>9.2} {:>9.2} {:>9}",
            "weighted avg",
            self.weighted_avg.0,
            self.weighted_avg.1,
            self.weighted_avg.2,
            self.n_samples
        )
    }
}
