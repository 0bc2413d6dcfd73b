use serde::{Deserialize, Serialize};

use crate::model::ids::SongId;
use crate::taxonomy::derive_context;

/// A song in the recommendation catalog.
///
/// Entries are read-only once the catalog has been indexed; the only
/// mutation is filling in a derived context beforehand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: SongId,
    pub name: String,
    pub artist: String,

    /// Cover art URL.
    #[serde(default)]
    pub image_url: String,

    /// Audio preview URL.
    #[serde(default)]
    pub preview_url: String,

    /// Identifier in the streaming service the catalog was exported from.
    #[serde(default)]
    pub external_id: String,

    /// Free-text mood/activity description, e.g. "happy active".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    // --- Audio features (used to derive a context when none is given) ---
    /// Musical positiveness, 0.0-1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valence: Option<f64>,

    /// Suitability for dancing, 0.0-1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danceability: Option<f64>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(id: impl Into<SongId>, name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artist: artist.into(),
            image_url: String::new(),
            preview_url: String::new(),
            external_id: String::new(),
            context: None,
            valence: None,
            danceability: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_audio_features(mut self, valence: f64, danceability: f64) -> Self {
        self.valence = Some(valence);
        self.danceability = Some(danceability);
        self
    }

    #[must_use]
    pub fn with_media(
        mut self,
        image_url: impl Into<String>,
        preview_url: impl Into<String>,
        external_id: impl Into<String>,
    ) -> Self {
        self.image_url = image_url.into();
        self.preview_url = preview_url.into();
        self.external_id = external_id.into();
        self
    }

    /// The context text to index; entries without one index as empty.
    #[must_use]
    pub fn context_text(&self) -> &str {
        self.context.as_deref().unwrap_or("")
    }

    /// Fill in `context` from the audio features when it is missing.
    ///
    /// Returns `true` if a context was derived.
    pub fn derive_missing_context(&mut self) -> bool {
        if self.context.is_some() {
            return false;
        }
        match (self.valence, self.danceability) {
            (Some(valence), Some(danceability)) => {
                self.context = Some(derive_context(valence, danceability));
                true
            }
            _ => false,
        }
    }
}
