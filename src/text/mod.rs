//! Text normalization: cleaning, token filtering, and reduction to root
//! forms for raw article titles and bodies.

mod lemmatize;
pub mod normalize;
pub mod stopwords;

pub use lemmatize::Lemmatizer;
pub use normalize::{count_punctuation, ReduceStrategy, TextNormalizer};
