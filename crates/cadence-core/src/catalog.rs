//! Loading the song catalog from a JSON or CSV export.
//!
//! A JSON export is an array of records; a CSV export has one row per song
//! under a header row. Column names used by the streaming-service dataset
//! (`img`, `preview`, `spotify_id`) are accepted alongside the canonical field
//! names, unknown columns are ignored, and ids may be strings or numbers.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{CatalogEntry, SongId};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Integer(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(default)]
    id: Option<RecordId>,
    name: String,
    artist: String,
    #[serde(default, alias = "img")]
    image_url: String,
    #[serde(default, alias = "preview")]
    preview_url: String,
    #[serde(default, alias = "spotify_id")]
    external_id: String,
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    valence: Option<f64>,
    #[serde(default)]
    danceability: Option<f64>,
}

impl CatalogRecord {
    fn into_entry(self, position: usize) -> CatalogEntry {
        let id = match self.id {
            Some(RecordId::Integer(n)) => SongId::new(n.to_string()),
            Some(RecordId::Text(s)) if !s.trim().is_empty() => SongId::new(s),
            _ => SongId::from_position(position),
        };

        CatalogEntry {
            id,
            name: self.name,
            artist: self.artist,
            image_url: self.image_url,
            preview_url: self.preview_url,
            external_id: self.external_id,
            context: self.context,
            valence: self.valence,
            danceability: self.danceability,
        }
    }
}

/// On-disk catalog formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
}

impl CatalogFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(Error::InvalidData(format!(
                "unsupported catalog format for {} (expected .json or .csv)",
                path.display()
            ))),
        }
    }
}

/// The full set of songs available for recommendation, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parse a catalog from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Parse a catalog from CSV with a header row.
    pub fn from_csv(reader: impl Read) -> Result<Self> {
        let records = csv::Reader::from_reader(reader)
            .deserialize()
            .collect::<std::result::Result<Vec<CatalogRecord>, csv::Error>>()?;
        Ok(Self::from_records(records))
    }

    fn from_records(records: Vec<CatalogRecord>) -> Self {
        let entries = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_entry(position))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` if at least one entry carries a context.
    #[must_use]
    pub fn has_context_field(&self) -> bool {
        self.entries.iter().any(|entry| entry.context.is_some())
    }

    /// Number of entries that carry a context.
    #[must_use]
    pub fn context_count(&self) -> usize {
        self.entries.iter().filter(|e| e.context.is_some()).count()
    }

    /// Derive a context from audio features for every entry that lacks one.
    ///
    /// Returns how many entries were filled in.
    pub fn derive_missing_contexts(&mut self) -> usize {
        let derived = self
            .entries
            .iter_mut()
            .map(CatalogEntry::derive_missing_context)
            .filter(|&derived| derived)
            .count();
        if derived > 0 {
            log::info!("Derived context for {} catalog entries from audio features", derived);
        }
        derived
    }
}

impl From<Vec<CatalogEntry>> for Catalog {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        Self::new(entries)
    }
}

/// Load a catalog from a `.json` or `.csv` file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let catalog = match CatalogFormat::from_path(path)? {
        CatalogFormat::Json => Catalog::from_json(&std::fs::read_to_string(path)?)?,
        CatalogFormat::Csv => Catalog::from_csv(std::fs::File::open(path)?)?,
    };
    log::info!(
        "Loaded {} catalog entries from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const SAMPLE: &str = r#"[
        {"id": 1, "name": "Happy", "artist": "Pharrell Williams", "context": "happy active",
         "img": "https://img/1", "preview": "https://preview/1", "spotify_id": "60nZcImufyMA1MKQY3dcCH"},
        {"id": "b2", "name": "Hurt", "artist": "Johnny Cash", "valence": 0.1, "danceability": 0.3},
        {"name": "Weightless", "artist": "Marconi Union"}
    ]"#;

    #[test]
    fn test_from_json_accepts_dataset_columns() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);

        let first = &catalog.entries()[0];
        assert_eq!(first.id.as_str(), "1");
        assert_eq!(first.image_url, "https://img/1");
        assert_eq!(first.preview_url, "https://preview/1");
        assert_eq!(first.external_id, "60nZcImufyMA1MKQY3dcCH");
    }

    #[test]
    fn test_from_json_fills_missing_ids() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.entries()[1].id.as_str(), "b2");
        assert_eq!(catalog.entries()[2].id.as_str(), "2");
    }

    #[test]
    fn test_from_json_rejects_object_id() {
        let result = Catalog::from_json(r#"[{"id": {"x": 1}, "name": "a", "artist": "b"}]"#);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = Catalog::from_json("{not json");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_derive_missing_contexts() {
        let mut catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.context_count(), 1);

        let derived = catalog.derive_missing_contexts();
        assert_eq!(derived, 1);
        assert_eq!(catalog.entries()[1].context.as_deref(), Some("sad relaxed"));
        // No audio features, nothing to derive from
        assert!(catalog.entries()[2].context.is_none());
    }

    #[test]
    fn test_has_context_field() {
        let catalog = Catalog::from_json(r#"[{"name": "a", "artist": "b"}]"#).unwrap();
        assert!(!catalog.has_context_field());
        assert!(Catalog::from_json(SAMPLE).unwrap().has_context_field());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let file = catalog_file(".json", SAMPLE);
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    // Shaped like the Music.csv export: extra audio columns, no context column
    const MUSIC_CSV: &str = "\
id,name,artist,img,preview,spotify_id,valence,danceability,energy
7,Happy,Pharrell Williams,https://img/7,https://preview/7,60nZcImufyMA1MKQY3dcCH,0.96,0.65,0.82
,Hurt,Johnny Cash,https://img/8,,2ptBtDQiYdmF3dWI4U9xkH,0.12,0.31,0.2
b9,Weightless,Marconi Union,,,,,,
";

    #[test]
    fn test_from_csv_reads_dataset_columns() {
        let catalog = Catalog::from_csv(MUSIC_CSV.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);

        let first = &catalog.entries()[0];
        assert_eq!(first.id.as_str(), "7");
        assert_eq!(first.image_url, "https://img/7");
        assert_eq!(first.preview_url, "https://preview/7");
        assert_eq!(first.external_id, "60nZcImufyMA1MKQY3dcCH");
        assert_eq!(first.valence, Some(0.96));
        assert!(first.context.is_none());

        assert_eq!(catalog.entries()[1].id.as_str(), "1");
        assert_eq!(catalog.entries()[1].preview_url, "");
        assert_eq!(catalog.entries()[2].id.as_str(), "b9");
        assert!(catalog.entries()[2].valence.is_none());
    }

    #[test]
    fn test_load_csv_catalog_and_derive_contexts() {
        let file = catalog_file(".csv", MUSIC_CSV);
        let mut catalog = load_catalog(file.path()).unwrap();
        assert!(!catalog.has_context_field());

        assert_eq!(catalog.derive_missing_contexts(), 2);
        assert_eq!(catalog.entries()[0].context.as_deref(), Some("happy active"));
        assert_eq!(catalog.entries()[1].context.as_deref(), Some("sad relaxed"));
        assert!(catalog.entries()[2].context.is_none());
    }

    #[test]
    fn test_from_csv_with_context_column() {
        let csv = "name,artist,context\nHappy,Pharrell Williams,happy active\n";
        let catalog = Catalog::from_csv(csv.as_bytes()).unwrap();
        assert_eq!(catalog.entries()[0].context.as_deref(), Some("happy active"));
    }

    #[test]
    fn test_from_csv_rejects_bad_number() {
        let csv = "name,artist,valence\nHappy,Pharrell Williams,loud\n";
        let result = Catalog::from_csv(csv.as_bytes());
        assert!(matches!(result, Err(Error::Csv(_))));
    }

    #[test]
    fn test_load_catalog_unknown_extension() {
        let file = catalog_file(".xlsx", "");
        let result = load_catalog(file.path());
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_catalog_format_from_path() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("Music.CSV")).unwrap(),
            CatalogFormat::Csv
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("catalog.json")).unwrap(),
            CatalogFormat::Json
        );
        assert!(CatalogFormat::from_path(Path::new("catalog")).is_err());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog("/nonexistent/cadence/catalog.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
