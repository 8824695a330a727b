//! TF-IDF document-term weighting.
//!
//! The vocabulary is fit on training texts only and frozen: transforming
//! held-out texts ignores unseen terms rather than growing the space.
//! Stopword exclusion happens here regardless of whether the texts were
//! normalized upstream — LIAR2 statements arrive raw and still get it.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, VeracityError};
use crate::text::stopwords;

/// Lowercasing, alphanumeric-boundary tokenizer with stopword exclusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tokenizer {
    min_token_length: usize,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            min_token_length: 2,
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.len() >= self.min_token_length)
            .filter(|t| !stopwords::ENGLISH.contains(t))
            .map(|t| t.to_string())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Term-count vectorizer with a capped vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountVectorizer {
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, usize>,
    max_features: usize,
}

impl CountVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            vocabulary: HashMap::new(),
            max_features,
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Fit the vocabulary: the `max_features` highest corpus-frequency
    /// terms, ties broken alphabetically so fits are deterministic.
    pub fn fit(&mut self, documents: &[String]) {
        let mut term_counts: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            for token in self.tokenizer.tokenize(doc) {
                *term_counts.entry(token).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        self.vocabulary.clear();
        for (idx, (term, _)) in ranked.into_iter().enumerate() {
            self.vocabulary.insert(term, idx);
        }
    }

    /// Transform documents into a dense count matrix. Terms outside the
    /// fitted vocabulary are ignored.
    pub fn transform(&self, documents: &[String]) -> Result<Array2<f64>> {
        if self.vocabulary.is_empty() {
            return Err(VeracityError::TrainingError(
                "vectorizer not fitted".to_string(),
            ));
        }

        let mut counts = Array2::zeros((documents.len(), self.vocabulary.len()));
        for (doc_idx, doc) in documents.iter().enumerate() {
            for token in self.tokenizer.tokenize(doc) {
                if let Some(&term_idx) = self.vocabulary.get(&token) {
                    counts[[doc_idx, term_idx]] += 1.0;
                }
            }
        }

        Ok(counts)
    }
}

/// TF-IDF vectorizer: smoothed inverse document frequency over a count
/// vectorizer, with L2-normalized rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    counts: CountVectorizer,
    idf: Option<Array1<f64>>,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            counts: CountVectorizer::new(max_features),
            idf: None,
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.counts.vocabulary_len()
    }

    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.counts.fit(documents);
        let count_matrix = self.counts.transform(documents)?;

        let n_docs = documents.len() as f64;
        let mut idf = Array1::zeros(count_matrix.ncols());
        for (j, column) in count_matrix.columns().into_iter().enumerate() {
            let df = column.iter().filter(|&&v| v > 0.0).count() as f64;
            idf[j] = ((n_docs + 1.0) / (df + 1.0)).ln() + 1.0;
        }

        self.idf = Some(idf);
        Ok(())
    }

    pub fn transform(&self, documents: &[String]) -> Result<Array2<f64>> {
        let idf = self.idf.as_ref().ok_or_else(|| {
            VeracityError::TrainingError("vectorizer not fitted".to_string())
        })?;

        let mut matrix = self.counts.transform(documents)?;
        for mut row in matrix.rows_mut() {
            for (value, &idf_j) in row.iter_mut().zip(idf.iter()) {
                *value *= idf_j;
            }
            let norm: f64 = row.iter().map(|&v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|v| v / norm);
            }
        }

        Ok(matrix)
    }

    pub fn fit_transform(&mut self, documents: &[String]) -> Result<Array2<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }
}
