//! Fitting the catalog into a TF-IDF vector space.

use cadence_core::model::CatalogEntry;

use crate::error::{RecommendError, Result};
use crate::tokenize::Tokenizer;
use crate::vector::TermWeightVector;
use crate::vocabulary::VocabularyModel;

/// Builds the vocabulary and per-entry vectors for a catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogIndexer {
    tokenizer: Tokenizer,
}

impl CatalogIndexer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Fit the catalog.
    ///
    /// Entries without a context are indexed as empty documents, but at
    /// least one entry must carry one.
    pub fn fit(&self, catalog: &[CatalogEntry]) -> Result<FittedIndex> {
        if catalog.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }
        if catalog.iter().all(|entry| entry.context.is_none()) {
            return Err(RecommendError::Schema { field: "context" });
        }

        let documents: Vec<&str> = catalog.iter().map(CatalogEntry::context_text).collect();
        let vocabulary = VocabularyModel::fit(self.tokenizer, &documents);
        let vectors: Vec<TermWeightVector> = documents
            .iter()
            .map(|document| vocabulary.vectorize(document))
            .collect();

        let unindexed = vectors.iter().filter(|v| v.is_zero()).count();
        if unindexed > 0 {
            log::warn!(
                "{} of {} catalog entries have no indexable context terms",
                unindexed,
                vectors.len()
            );
        }
        log::info!(
            "Indexed {} catalog entries over {} context terms",
            vectors.len(),
            vocabulary.len()
        );

        Ok(FittedIndex {
            vocabulary,
            vectors,
        })
    }
}

/// The fitted vocabulary plus one unit vector per catalog entry, in catalog
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedIndex {
    vocabulary: VocabularyModel,
    vectors: Vec<TermWeightVector>,
}

impl FittedIndex {
    #[must_use]
    pub const fn vocabulary(&self) -> &VocabularyModel {
        &self.vocabulary
    }

    #[must_use]
    pub fn vectors(&self) -> &[TermWeightVector] {
        &self.vectors
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Project a query context into the fitted space.
    #[must_use]
    pub fn query_vector(&self, query: &str) -> TermWeightVector {
        self.vocabulary.vectorize(query)
    }

    /// Cosine similarity of the query with every entry, in catalog order.
    #[must_use]
    pub fn scores(&self, query: &str) -> Vec<f64> {
        let query = self.query_vector(query);
        if query.is_zero() {
            return vec![0.0; self.vectors.len()];
        }
        self.vectors.iter().map(|v| query.cosine(v)).collect()
    }

    /// The `k` best `(position, score)` pairs, highest score first.
    ///
    /// Equal scores keep catalog order, so a query that matches nothing
    /// returns the first `k` entries.
    #[must_use]
    pub fn top_k(&self, query: &str, k: usize) -> Vec<(usize, f64)> {
        rank(&self.scores(query), k)
    }
}

/// Rank scores descending, breaking ties by position, keeping `k`.
///
/// The comparison is a total order over `(score, position)`, so the output
/// does not depend on sort stability.
pub(crate) fn rank(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    let by_score_then_position =
        |a: &(usize, f64), b: &(usize, f64)| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0));

    if k == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    if k < ranked.len() {
        ranked.select_nth_unstable_by(k - 1, by_score_then_position);
        ranked.truncate(k);
    }
    ranked.sort_unstable_by(by_score_then_position);
    ranked
}
