use anyhow::{Context, Result};
use cadence_core::model::RecommendationSet;
use cadence_core::taxonomy::{Activity, Mood, TimeOfDay, UserContext};
use cadence_core::Config;
use cadence_search::ContextMatcher;

use super::prepare_catalog;

/// Build the query string from either a free-text context or a mood and
/// activity pair.
pub fn build_query(
    context: Option<String>,
    mood: Option<Mood>,
    activity: Option<Activity>,
    time_of_day: Option<TimeOfDay>,
) -> Result<String> {
    if let Some(context) = context {
        return Ok(context);
    }

    match (mood, activity) {
        (Some(mood), Some(activity)) => {
            let time_of_day = time_of_day.unwrap_or_else(TimeOfDay::now);
            Ok(UserContext::new(mood, activity, time_of_day).to_query())
        }
        _ => anyhow::bail!(
            "Either --context or both --mood and --activity are required\n\n\
             Example: cadence recommend --mood happy --activity driving"
        ),
    }
}

/// Fit the catalog and print recommendations for the query.
pub fn run_recommend(config: &Config, query: &str, json: bool) -> Result<()> {
    let catalog = prepare_catalog(config)?;
    let matcher =
        ContextMatcher::fitted(catalog.into_entries()).context("Failed to index catalog")?;

    log::info!("Recommending {} songs for '{}'", config.top_k, query);
    let set = matcher
        .recommend(query, config.top_k)
        .context("Failed to generate recommendations")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&set)?);
    } else {
        print_recommendations(&set);
    }

    Ok(())
}

fn print_recommendations(set: &RecommendationSet) {
    println!("\n🎵 Recommendations for \"{}\"\n", set.query);

    if set.is_empty() {
        println!("  No songs requested.");
        return;
    }

    for (rank, item) in set.iter().enumerate() {
        println!(
            "  {:>2}. {} - {}  (score {:.3})",
            rank + 1,
            item.name,
            item.artist,
            item.score
        );
        if !item.preview_url.is_empty() {
            println!("      preview: {}", item.preview_url);
        }
    }

    if set.is_unmatched() {
        println!("\n  Nothing in the catalog matches this context; showing catalog order.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_from_context() {
        let query = build_query(Some("rainy sunday".to_string()), None, None, None).unwrap();
        assert_eq!(query, "rainy sunday");
    }

    #[test]
    fn test_build_query_from_mood_and_activity() {
        let query = build_query(
            None,
            Some(Mood::Sad),
            Some(Activity::Studying),
            Some(TimeOfDay::Night),
        )
        .unwrap();
        assert_eq!(query, "Sad Studying Night");
    }

    #[test]
    fn test_build_query_uses_clock_when_time_missing() {
        let query = build_query(None, Some(Mood::Happy), Some(Activity::Driving), None).unwrap();
        assert!(query.starts_with("Happy Driving "));
    }

    #[test]
    fn test_build_query_requires_activity() {
        assert!(build_query(None, Some(Mood::Happy), None, None).is_err());
    }
}
