//! Text similarity — lexical TF-IDF + cosine over a two-document corpus.
//!
//! Pure lexical overlap: no stemming, no synonyms, no semantics. Treat the
//! result as a low-confidence signal.
//!
//! Callers hold a `&dyn TextSimilarity`, so a semantic backend can replace
//! `TfIdfCosine` without touching the factor code.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SimilarityError;

/// Runs of two or more word characters; single characters are dropped.
static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Similarity between two free-text documents, in [0, 1].
pub trait TextSimilarity: Send + Sync {
    fn similarity(&self, left: &str, right: &str) -> Result<f64, SimilarityError>;

    /// Short backend label for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// TfIdfCosine — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Fits a TF-IDF vocabulary on exactly the two input documents and returns the
/// cosine similarity of their vectors.
///
/// Algorithm:
/// 1. Tokenize (`\b\w\w+\b`) and count raw term frequencies per document
/// 2. idf(t) = ln((1 + n) / (1 + df(t))) + 1, with n = 2
/// 3. Weight = tf × idf, then L2-normalize each row
/// 4. Cosine = dot product of the normalized rows
///
/// Input is expected to be lower-cased already.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfCosine;

impl TextSimilarity for TfIdfCosine {
    fn similarity(&self, left: &str, right: &str) -> Result<f64, SimilarityError> {
        if left.trim().is_empty() || right.trim().is_empty() {
            return Err(SimilarityError::EmptyDocument);
        }

        let docs = [term_counts(left), term_counts(right)];

        // Sorted vocabulary keeps the float summation order stable across calls.
        let mut doc_freq: BTreeMap<&str, u32> = BTreeMap::new();
        for counts in &docs {
            for term in counts.keys() {
                *doc_freq.entry(*term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(SimilarityError::EmptyVocabulary);
        }

        let n_docs = docs.len() as f64;
        let vectors: Vec<Vec<f64>> = docs
            .iter()
            .map(|counts| {
                let raw: Vec<f64> = doc_freq
                    .iter()
                    .map(|(term, df)| {
                        let tf = counts.get(term).copied().unwrap_or(0) as f64;
                        let idf = ((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0;
                        tf * idf
                    })
                    .collect();
                l2_normalize(raw)
            })
            .collect();

        Ok(cosine(&vectors[0], &vectors[1]).clamp(0.0, 1.0))
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

fn term_counts(text: &str) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for token in RE_TOKEN.find_iter(text) {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Zero vectors stay zero.
fn l2_normalize(mut v: Vec<f64>) -> Vec<f64> {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        v.iter_mut().for_each(|x| *x /= norm);
    }
    v
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let nb = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    dot / (na * nb)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_score_one() {
        let s = TfIdfCosine
            .similarity("python sql statistics", "python sql statistics")
            .unwrap();
        assert!((s - 1.0).abs() < 1e-9, "Score was {s}");
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let s = TfIdfCosine
            .similarity("bachelor of arts history", "forklift certification")
            .unwrap();
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_partial_overlap_matches_smooth_idf() {
        // vocab {go, python, rust}; rust idf = 1, others idf = 1 + ln(1.5)
        // cosine = 1 / (1 + (1 + ln 1.5)^2) ≈ 0.336097
        let s = TfIdfCosine.similarity("rust python", "rust go").unwrap();
        assert!((s - 0.336097).abs() < 1e-4, "Score was {s}");
    }

    #[test]
    fn test_empty_document_is_error() {
        assert_eq!(
            TfIdfCosine.similarity("", "rust"),
            Err(SimilarityError::EmptyDocument)
        );
        assert_eq!(
            TfIdfCosine.similarity("rust", "   "),
            Err(SimilarityError::EmptyDocument)
        );
    }

    #[test]
    fn test_single_char_tokens_leave_empty_vocabulary() {
        assert_eq!(
            TfIdfCosine.similarity("a b c", "x y z"),
            Err(SimilarityError::EmptyVocabulary)
        );
    }

    #[test]
    fn test_one_side_without_tokens_scores_zero() {
        let s = TfIdfCosine.similarity("a", "python developer").unwrap();
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let a = "experience with data analysis in excel and sql";
        let b = "sql excel reporting dashboards";
        let first = TfIdfCosine.similarity(a, b).unwrap();
        let second = TfIdfCosine.similarity(a, b).unwrap();
        assert_eq!(first, second);
        assert!((0.0..=1.0).contains(&first));
    }

    #[test]
    fn test_tokenizer_splits_on_punctuation() {
        let counts = term_counts("sql, sql; python-3");
        assert_eq!(counts.get("sql"), Some(&2));
        assert_eq!(counts.get("python"), Some(&1));
        assert!(!counts.contains_key("3"));
    }
}
