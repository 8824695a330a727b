//! End-to-end training and evaluation for a named dataset.

use ndarray::{Array1, Array2, Axis};
use std::time::Instant;
use tracing::info;

use crate::dataset::{self, DatasetName, LoaderConfig};
use crate::error::Result;
use crate::features::TfidfVectorizer;

use super::cross_validation::{CvResults, KFold};
use super::metrics::{accuracy_score, ClassificationReport};
use super::naive_bayes::MultinomialNb;

/// Configuration for one training run.
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    pub dataset: DatasetName,
    pub loader: LoaderConfig,
    /// Vocabulary cap for the document-term space
    pub max_features: usize,
    /// Laplace smoothing for the classifier
    pub alpha: f64,
    pub cv_folds: usize,
    pub cv_seed: u64,
}

impl TrainerConfig {
    pub fn new(dataset: DatasetName) -> Self {
        Self {
            dataset,
            loader: LoaderConfig::default(),
            max_features: 5000,
            alpha: 1.0,
            cv_folds: 5,
            cv_seed: 42,
        }
    }
}

/// Everything a run reports: test-set metrics plus cross-validated
/// accuracy on the training portion.
#[derive(Debug, Clone)]
pub struct EvalReport {
    pub dataset: DatasetName,
    pub accuracy: f64,
    pub report: ClassificationReport,
    pub cv: CvResults,
    pub n_train: usize,
    pub n_test: usize,
    pub vocabulary_len: usize,
    pub elapsed_secs: f64,
}

/// Fit a TF-IDF + Multinomial Naive Bayes pipeline on the named dataset's
/// training split and evaluate on its test split.
pub fn train_and_evaluate(config: &TrainerConfig) -> Result<EvalReport> {
    let start = Instant::now();

    info!(dataset = %config.dataset, "loading dataset");
    let splits = dataset::load(config.dataset, &config.loader)?;
    // The val split arrives with the others but no step below consumes it.

    let mut vectorizer = TfidfVectorizer::new(config.max_features);
    let x_train = vectorizer.fit_transform(&splits.train.texts)?;
    let x_test = vectorizer.transform(&splits.test.texts)?;
    let y_train = Array1::from_vec(splits.train.labels);
    let y_test = Array1::from_vec(splits.test.labels);
    info!(
        n_train = x_train.nrows(),
        n_test = x_test.nrows(),
        vocabulary = vectorizer.vocabulary_len(),
        "vectorized"
    );

    let mut model = MultinomialNb::new(config.alpha);
    model.fit(&x_train, &y_train)?;
    let y_pred = model.predict(&x_test)?;

    let report = ClassificationReport::compute(&y_test, &y_pred);
    let cv = cross_validate(&x_train, &y_train, config)?;

    Ok(EvalReport {
        dataset: config.dataset,
        accuracy: report.accuracy,
        report,
        cv,
        n_train: x_train.nrows(),
        n_test: x_test.nrows(),
        vocabulary_len: vectorizer.vocabulary_len(),
        elapsed_secs: start.elapsed().as_secs_f64(),
    })
}

/// K-Fold accuracy on the training matrix alone; the test split never
/// participates here.
fn cross_validate(x: &Array2<f64>, y: &Array1<i64>, config: &TrainerConfig) -> Result<CvResults> {
    let kfold = KFold::new(config.cv_folds).with_seed(config.cv_seed);
    let mut scores = Vec::with_capacity(config.cv_folds);

    for (train_idx, test_idx) in kfold.split(x.nrows())? {
        let x_fold_train = x.select(Axis(0), &train_idx);
        let x_fold_test = x.select(Axis(0), &test_idx);
        let y_fold_train = Array1::from_iter(train_idx.iter().map(|&i| y[i]));
        let y_fold_test = Array1::from_iter(test_idx.iter().map(|&i| y[i]));

        let mut model = MultinomialNb::new(config.alpha);
        model.fit(&x_fold_train, &y_fold_train)?;
        let predictions = model.predict(&x_fold_test)?;
        scores.push(accuracy_score(&y_fold_test, &predictions));
    }

    Ok(CvResults::from_scores(scores))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_cross_validate_separable() {
        // ten documents over two disjoint vocabularies
        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for i in 0..10 {
            if i % 2 == 0 {
                rows.push([3.0, 2.0, 0.0, 0.0]);
                labels.push(0);
            } else {
                rows.push([0.0, 0.0, 2.0, 3.0]);
                labels.push(1);
            }
        }
        let x = Array2::from_shape_vec((10, 4), rows.concat()).unwrap();
        let y = Array1::from_vec(labels);

        let config = TrainerConfig::new(crate::dataset::DatasetName::Isot);
        let cv = cross_validate(&x, &y, &config).unwrap();
        assert_eq!(cv.scores.len(), 5);
        assert!((cv.mean - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_validate_requires_enough_samples() {
        let x = array![[1.0], [2.0]];
        let y = array![0, 1];
        let config = TrainerConfig::new(crate::dataset::DatasetName::Isot);
        assert!(cross_validate(&x, &y, &config).is_err());
    }
}
