//! Vocabulary and inverse-document-frequency weights.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::tokenize::Tokenizer;
use crate::vector::TermWeightVector;

/// Term-to-index mapping with an IDF weight per term.
///
/// Built once from the catalog's context strings and never extended: terms
/// that were not seen at fit time contribute nothing to later vectors.
/// Indices follow the lexicographic order of the terms, so two fits over the
/// same catalog produce the same model.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyModel {
    tokenizer: Tokenizer,
    index: HashMap<String, usize>,
    terms: Vec<String>,
    document_frequency: Vec<usize>,
    idf: Vec<f64>,
    document_count: usize,
}

/// Per-term statistics, as reported by [`VocabularyModel::stats`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermStats<'a> {
    pub term: &'a str,
    pub index: usize,
    pub document_frequency: usize,
    pub idf: f64,
}

impl VocabularyModel {
    /// Fit the vocabulary to a set of documents.
    pub fn fit<S: AsRef<str>>(tokenizer: Tokenizer, documents: &[S]) -> Self {
        let mut df: BTreeMap<String, usize> = BTreeMap::new();
        for document in documents {
            let distinct: BTreeSet<String> =
                tokenizer.tokenize(document.as_ref()).into_iter().collect();
            for term in distinct {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let document_count = documents.len();
        let n = document_count as f64;
        let mut index = HashMap::with_capacity(df.len());
        let mut terms = Vec::with_capacity(df.len());
        let mut document_frequency = Vec::with_capacity(df.len());
        let mut idf = Vec::with_capacity(df.len());

        for (position, (term, count)) in df.into_iter().enumerate() {
            idf.push(smoothed_idf(n, count as f64));
            document_frequency.push(count);
            index.insert(term.clone(), position);
            terms.push(term);
        }

        Self {
            tokenizer,
            index,
            terms,
            document_frequency,
            idf,
            document_count,
        }
    }

    /// Number of distinct terms, which is also the vector dimension.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of documents the model was fitted on.
    #[must_use]
    pub const fn document_count(&self) -> usize {
        self.document_count
    }

    #[must_use]
    pub const fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    #[must_use]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    #[must_use]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn idf(&self, index: usize) -> Option<f64> {
        self.idf.get(index).copied()
    }

    #[must_use]
    pub fn document_frequency(&self, index: usize) -> Option<usize> {
        self.document_frequency.get(index).copied()
    }

    /// Statistics for every term, in index order.
    pub fn stats(&self) -> impl Iterator<Item = TermStats<'_>> + '_ {
        self.terms.iter().enumerate().map(|(index, term)| TermStats {
            term,
            index,
            document_frequency: self.document_frequency[index],
            idf: self.idf[index],
        })
    }

    /// Project text into the vocabulary's space as a unit-length TF-IDF vector.
    ///
    /// Unknown terms are dropped; text with no known terms gives the zero
    /// vector.
    #[must_use]
    pub fn vectorize(&self, text: &str) -> TermWeightVector {
        self.vectorize_terms(&self.tokenizer.tokenize(text))
    }

    /// Same as [`vectorize`](Self::vectorize) for already tokenized text.
    #[must_use]
    pub fn vectorize_terms(&self, terms: &[String]) -> TermWeightVector {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for term in terms {
            if let Some(index) = self.index_of(term) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }

        let weights = counts
            .into_iter()
            .map(|(index, tf)| (index, tf as f64 * self.idf[index]));
        TermWeightVector::from_weights(self.len(), weights).normalized()
    }
}

/// `ln((1 + n) / (1 + df)) + 1`
fn smoothed_idf(n: f64, df: f64) -> f64 {
    ((1.0 + n) / (1.0 + df)).ln() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn fitted(documents: &[&str]) -> VocabularyModel {
        VocabularyModel::fit(Tokenizer::new(), documents)
    }

    #[test]
    fn test_fit_indices_are_lexicographic() {
        let vocab = fitted(&["sad relaxed", "happy active"]);
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.index_of("active"), Some(0));
        assert_eq!(vocab.index_of("happy"), Some(1));
        assert_eq!(vocab.index_of("relaxed"), Some(2));
        assert_eq!(vocab.index_of("sad"), Some(3));
        assert_eq!(vocab.term(1), Some("happy"));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let docs = ["happy active", "sad relaxed", "happy relaxed"];
        assert_eq!(fitted(&docs), fitted(&docs));
    }

    #[test]
    fn test_document_frequency_counts_documents_not_occurrences() {
        let vocab = fitted(&["happy happy", "happy sad"]);
        let happy = vocab.index_of("happy").unwrap();
        assert_eq!(vocab.document_frequency(happy), Some(2));
    }

    #[test]
    fn test_smoothed_idf_values() {
        let vocab = fitted(&["happy active", "sad relaxed", "happy relaxed"]);
        let happy = vocab.index_of("happy").unwrap();
        let active = vocab.index_of("active").unwrap();

        // df=2 of n=3: ln(4/3) + 1
        assert!((vocab.idf(happy).unwrap() - ((4.0_f64 / 3.0).ln() + 1.0)).abs() < EPS);
        // df=1 of n=3: ln(4/2) + 1
        assert!((vocab.idf(active).unwrap() - (2.0_f64.ln() + 1.0)).abs() < EPS);
    }

    #[test]
    fn test_term_in_every_document_has_idf_one() {
        let vocab = fitted(&["music", "music", "music"]);
        assert!((vocab.idf(0).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_vectorize_tf_times_idf_normalized() {
        let vocab = fitted(&["happy active", "sad relaxed", "happy relaxed"]);
        let v = vocab.vectorize("happy happy active");

        let happy = vocab.index_of("happy").unwrap();
        let active = vocab.index_of("active").unwrap();
        let raw_happy = 2.0 * vocab.idf(happy).unwrap();
        let raw_active = vocab.idf(active).unwrap();
        let norm = raw_happy.hypot(raw_active);

        assert_eq!(v.dimension(), vocab.len());
        assert!((v.get(happy) - raw_happy / norm).abs() < EPS);
        assert!((v.get(active) - raw_active / norm).abs() < EPS);
        assert!((v.norm() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_vectorize_ignores_unknown_terms() {
        let vocab = fitted(&["happy active"]);
        let v = vocab.vectorize("zzqqxx");
        assert!(v.is_zero());
        assert_eq!(v.dimension(), 2);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.index_of("zzqqxx"), None);
    }

    #[test]
    fn test_vectorize_is_case_insensitive() {
        let vocab = fitted(&["happy active", "sad relaxed"]);
        assert_eq!(vocab.vectorize("HAPPY Active"), vocab.vectorize("happy active"));
    }

    #[test]
    fn test_stats_in_index_order() {
        let vocab = fitted(&["happy active", "happy relaxed"]);
        let terms: Vec<&str> = vocab.stats().map(|s| s.term).collect();
        assert_eq!(terms, vec!["active", "happy", "relaxed"]);
        assert_eq!(vocab.stats().nth(1).unwrap().document_frequency, 2);
    }

    #[test]
    fn test_empty_documents_give_empty_vocabulary() {
        let vocab = fitted(&["", "!!"]);
        assert!(vocab.is_empty());
        assert_eq!(vocab.document_count(), 2);
        assert!(vocab.vectorize("anything").is_zero());
    }
}
