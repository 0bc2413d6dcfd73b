pub mod ids;
pub mod recommendation;
pub mod song;

pub use ids::SongId;
pub use recommendation::{Recommendation, RecommendationSet};
pub use song::CatalogEntry;
