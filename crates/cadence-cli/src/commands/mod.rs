pub mod config;
pub mod recommend;
pub mod stats;

pub use recommend::{build_query, run_recommend};
pub use stats::show_stats;

use anyhow::{Context, Result};
use cadence_core::{load_catalog, Catalog, Config};

/// Load the configured catalog and derive missing contexts.
fn prepare_catalog(config: &Config) -> Result<Catalog> {
    let mut catalog = load_catalog(&config.catalog_path).with_context(|| {
        format!(
            "Failed to load catalog from {}",
            config.catalog_path.display()
        )
    })?;
    catalog.derive_missing_contexts();
    Ok(catalog)
}
