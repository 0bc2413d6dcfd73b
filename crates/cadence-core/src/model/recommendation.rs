use serde::{Deserialize, Serialize};

use crate::model::song::CatalogEntry;

/// One ranked song, carrying only what a caller needs to display it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub artist: String,
    pub image_url: String,
    pub preview_url: String,
    pub external_id: String,

    /// Cosine similarity with the query context, 0.0-1.0.
    pub score: f64,
}

impl Recommendation {
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry, score: f64) -> Self {
        Self {
            name: entry.name.clone(),
            artist: entry.artist.clone(),
            image_url: entry.image_url.clone(),
            preview_url: entry.preview_url.clone(),
            external_id: entry.external_id.clone(),
            score,
        }
    }
}

/// The result of a single recommendation request, most similar first.
///
/// This is a plain value owned by the request. Callers that want to show it
/// again later keep it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// The context string that was matched.
    pub query: String,

    /// The number of results that was asked for.
    pub requested: usize,

    pub items: Vec<Recommendation>,
}

impl RecommendationSet {
    #[must_use]
    pub fn new(query: impl Into<String>, requested: usize, items: Vec<Recommendation>) -> Self {
        Self {
            query: query.into(),
            requested,
            items,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` when no recommended song shares a term with the query.
    #[must_use]
    pub fn is_unmatched(&self) -> bool {
        self.items.iter().all(|item| item.score <= 0.0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a RecommendationSet {
    type Item = &'a Recommendation;
    type IntoIter = std::slice::Iter<'a, Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> CatalogEntry {
        CatalogEntry::new("7", "Levitating", "Dua Lipa")
            .with_context("happy active")
            .with_media("https://img/7", "https://preview/7", "463CkQjx2Zk1yXoBuierM9")
    }

    #[test]
    fn test_recommendation_from_entry() {
        let rec = Recommendation::from_entry(&sample_entry(), 0.75);
        assert_eq!(rec.name, "Levitating");
        assert_eq!(rec.artist, "Dua Lipa");
        assert_eq!(rec.preview_url, "https://preview/7");
        assert!((rec.score - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_recommendation_set_unmatched() {
        let entry = sample_entry();
        let set = RecommendationSet::new(
            "zzqqxx",
            2,
            vec![
                Recommendation::from_entry(&entry, 0.0),
                Recommendation::from_entry(&entry, 0.0),
            ],
        );
        assert_eq!(set.len(), 2);
        assert!(set.is_unmatched());
    }

    #[test]
    fn test_recommendation_set_json_shape() {
        let set = RecommendationSet::new(
            "Happy Working Morning",
            1,
            vec![Recommendation::from_entry(&sample_entry(), 1.0)],
        );
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["query"], "Happy Working Morning");
        assert_eq!(json["items"][0]["external_id"], "463CkQjx2Zk1yXoBuierM9");
        // Context is internal to matching and not carried in results
        assert!(json["items"][0].get("context").is_none());
    }
}
