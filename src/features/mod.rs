//! Document-term feature extraction.

mod tfidf;

pub use tfidf::{CountVectorizer, TfidfVectorizer, Tokenizer};
