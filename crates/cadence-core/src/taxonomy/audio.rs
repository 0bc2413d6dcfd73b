//! Catalog-side context labels derived from audio features.

/// Valence/danceability above this value count as "high".
const THRESHOLD: f64 = 0.5;

/// Build a catalog context string such as `"happy active"` from a song's
/// valence and danceability.
#[must_use]
pub fn derive_context(valence: f64, danceability: f64) -> String {
    let mood = if valence > THRESHOLD { "happy" } else { "sad" };
    let activity = if danceability > THRESHOLD {
        "active"
    } else {
        "relaxed"
    };
    format!("{mood} {activity}")
}
