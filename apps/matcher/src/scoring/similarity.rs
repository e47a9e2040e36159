//! Similarity Scorer — TF-IDF cosine similarity over the two-document corpus {A, B}.
//!
//! Preprocessing: lowercase, drop every non-alphabetic character, split on whitespace,
//! remove stop words (NLTK plus the vectorizer's English list) and single-letter tokens.
//! Terms are unigrams plus adjacent bigrams of the surviving tokens. The vocabulary keeps the `max_features` terms with the
//! highest corpus frequency (ties alphabetical). Weights are raw counts × smoothed idf
//! `ln((1 + n) / (1 + df)) + 1`, L2-normalised per document.

use std::collections::{BTreeMap, HashMap};

use crate::models::matching::{CandidateInput, JobInput};
use crate::scoring::{clamp_percent, round2, Subscore, Subscorer};
use crate::taxonomy::is_stop_word;

pub const DEFAULT_MAX_FEATURES: usize = 1000;

pub fn preprocess(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();
    cleaned
        .split_whitespace()
        .filter(|token| token.len() > 1 && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

fn term_counts(tokens: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    for pair in tokens.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}

/// Highest-frequency terms across both documents, capped at `max_features`.
fn vocabulary(a: &HashMap<String, usize>, b: &HashMap<String, usize>, max_features: usize) -> Vec<String> {
    let mut corpus: BTreeMap<&str, usize> = BTreeMap::new();
    for (term, count) in a.iter().chain(b.iter()) {
        *corpus.entry(term.as_str()).or_insert(0) += count;
    }
    let mut ranked: Vec<(&str, usize)> = corpus.into_iter().collect();
    // Stable sort over alphabetical input keeps ties alphabetical.
    ranked.sort_by(|x, y| y.1.cmp(&x.1));
    let mut terms: Vec<String> = ranked
        .into_iter()
        .take(max_features)
        .map(|(term, _)| term.to_string())
        .collect();
    terms.sort();
    terms
}

fn tfidf_vector(counts: &HashMap<String, usize>, vocab: &[String], idf: &[f64]) -> Vec<f64> {
    let raw: Vec<f64> = vocab
        .iter()
        .zip(idf)
        .map(|(term, idf)| counts.get(term).copied().unwrap_or(0) as f64 * idf)
        .collect();
    let norm = raw.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm == 0.0 {
        return raw;
    }
    raw.into_iter().map(|v| v / norm).collect()
}

/// Cosine similarity of `a` and `b` as a percentage in [0, 100], 2 decimals.
/// Symmetric; 0 when either text is empty after preprocessing.
pub fn text_similarity(a: &str, b: &str, max_features: usize) -> f64 {
    let tokens_a = preprocess(a);
    let tokens_b = preprocess(b);
    if tokens_a.is_empty() || tokens_b.is_empty() || max_features == 0 {
        return 0.0;
    }

    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);
    let vocab = vocabulary(&counts_a, &counts_b, max_features);

    const DOCS: f64 = 2.0;
    let idf: Vec<f64> = vocab
        .iter()
        .map(|term| {
            let df = [&counts_a, &counts_b]
                .iter()
                .filter(|counts| counts.contains_key(term))
                .count() as f64;
            ((1.0 + DOCS) / (1.0 + df)).ln() + 1.0
        })
        .collect();

    let vec_a = tfidf_vector(&counts_a, &vocab, &idf);
    let vec_b = tfidf_vector(&counts_b, &vocab, &idf);
    let cosine: f64 = vec_a.iter().zip(&vec_b).map(|(x, y)| x * y).sum();

    clamp_percent(round2(cosine * 100.0))
}

/// Text subscore: job description vs the candidate's profile text.
pub struct TextSimilarityScorer {
    pub max_features: usize,
}

impl Default for TextSimilarityScorer {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

impl Subscorer for TextSimilarityScorer {
    fn kind(&self) -> Subscore {
        Subscore::Text
    }

    fn score(&self, job: &JobInput, candidate: &CandidateInput) -> f64 {
        text_similarity(&job.description, &candidate.profile_text, self.max_features)
    }
}
