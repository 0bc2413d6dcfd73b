use anyhow::{Context, Result};
use cadence_core::Config;
use cadence_search::CatalogIndexer;

use super::prepare_catalog;

/// Show catalog and vocabulary statistics.
pub fn show_stats(config: &Config, list_terms: bool) -> Result<()> {
    let catalog = prepare_catalog(config)?;
    let index = CatalogIndexer::new()
        .fit(catalog.entries())
        .context("Failed to index catalog")?;
    let vocabulary = index.vocabulary();
    let unindexed = index.vectors().iter().filter(|v| v.is_zero()).count();

    println!("\n📊 Cadence Catalog\n");
    println!("  Catalog: {}", config.catalog_path.display());
    println!("  Songs: {}", catalog.len());
    println!("  Songs with context: {}", catalog.context_count());
    println!("  Songs without indexable terms: {}", unindexed);
    println!("  Vocabulary terms: {}", vocabulary.len());

    if list_terms {
        println!("\n  {:<24} {:>6} {:>8}", "term", "df", "idf");
        for stats in vocabulary.stats() {
            println!(
                "  {:<24} {:>6} {:>8.4}",
                stats.term, stats.document_frequency, stats.idf
            );
        }
    } else if !vocabulary.is_empty() {
        println!("\n  Run `cadence stats --terms` to list the vocabulary");
    }

    Ok(())
}
