//! Model training: Multinomial Naive Bayes over TF-IDF features, with
//! K-Fold cross-validation and classification metrics.

pub mod cross_validation;
pub mod metrics;
pub mod naive_bayes;
mod trainer;

pub use cross_validation::{CvResults, KFold};
pub use metrics::{accuracy_score, ClassificationReport, ClassMetrics};
pub use naive_bayes::MultinomialNb;
pub use trainer::{train_and_evaluate, EvalReport, TrainerConfig};
