//! Ranking catalog songs against a listener's context.

use std::sync::OnceLock;

use cadence_core::config::DEFAULT_TOP_K;
use cadence_core::model::{CatalogEntry, Recommendation, RecommendationSet};

use crate::error::{RecommendError, Result};
use crate::indexer::{CatalogIndexer, FittedIndex};
use crate::vocabulary::VocabularyModel;

#[derive(Debug)]
struct FittedCatalog {
    entries: Vec<CatalogEntry>,
    index: FittedIndex,
}

/// Recommends catalog songs for a free-text context.
///
/// The matcher is fitted exactly once. After that it is read-only and can be
/// shared between threads (for example behind an `Arc`) without locking.
#[derive(Debug, Default)]
pub struct ContextMatcher {
    indexer: CatalogIndexer,
    fitted: OnceLock<FittedCatalog>,
}

/// A catalog entry with its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntry<'a> {
    /// Position of the entry in the catalog.
    pub position: usize,
    pub entry: &'a CatalogEntry,
    pub score: f64,
}

impl ContextMatcher {
    /// An unfitted matcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indexer(indexer: CatalogIndexer) -> Self {
        Self {
            indexer,
            fitted: OnceLock::new(),
        }
    }

    /// Create a matcher and fit it in one step.
    pub fn fitted(catalog: impl Into<Vec<CatalogEntry>>) -> Result<Self> {
        let matcher = Self::new();
        matcher.fit(catalog)?;
        Ok(matcher)
    }

    /// Index the catalog. Only the first successful fit takes effect.
    pub fn fit(&self, catalog: impl Into<Vec<CatalogEntry>>) -> Result<()> {
        if self.is_fitted() {
            return Err(RecommendError::AlreadyFitted);
        }

        let entries = catalog.into();
        let index = self.indexer.fit(&entries)?;
        self.fitted
            .set(FittedCatalog { entries, index })
            .map_err(|_| RecommendError::AlreadyFitted)
    }

    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted.get().is_some()
    }

    fn state(&self) -> Result<&FittedCatalog> {
        self.fitted.get().ok_or(RecommendError::NotFitted)
    }

    /// The fitted catalog, in catalog order.
    pub fn catalog(&self) -> Result<&[CatalogEntry]> {
        Ok(&self.state()?.entries)
    }

    pub fn vocabulary(&self) -> Result<&VocabularyModel> {
        Ok(self.state()?.index.vocabulary())
    }

    pub fn index(&self) -> Result<&FittedIndex> {
        Ok(&self.state()?.index)
    }

    /// Similarity of the query with every catalog entry, in catalog order.
    pub fn scores(&self, query_context: &str) -> Result<Vec<f64>> {
        Ok(self.state()?.index.scores(query_context))
    }

    /// The `k` most similar entries, most similar first.
    ///
    /// Ties keep catalog order. A query with no known terms scores zero
    /// everywhere and yields the first `k` entries of the catalog.
    pub fn ranked(&self, query_context: &str, k: usize) -> Result<Vec<ScoredEntry<'_>>> {
        let state = self.state()?;
        let ranked = state
            .index
            .top_k(query_context, k)
            .into_iter()
            .map(|(position, score)| ScoredEntry {
                position,
                entry: &state.entries[position],
                score,
            })
            .collect();
        Ok(ranked)
    }

    /// Recommend up to `k` songs for the query context.
    pub fn recommend(&self, query_context: &str, k: usize) -> Result<RecommendationSet> {
        let ranked = self.ranked(query_context, k)?;
        log::debug!(
            "Matched '{}' against catalog: {} results, best score {:.3}",
            query_context,
            ranked.len(),
            ranked.first().map(|r| r.score).unwrap_or(0.0)
        );

        let items = ranked
            .iter()
            .map(|scored| Recommendation::from_entry(scored.entry, scored.score))
            .collect();
        Ok(RecommendationSet::new(query_context, k, items))
    }

    /// Recommend the default number of songs.
    pub fn recommend_default(&self, query_context: &str) -> Result<RecommendationSet> {
        self.recommend(query_context, DEFAULT_TOP_K)
    }
}
