use anyhow::Result;
use cadence_core::taxonomy::{Activity, Mood, TimeOfDay};
use cadence_core::config::DEFAULT_LOG_LEVEL;
use cadence_core::Config;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cadence", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the song catalog, .json or .csv (default: ~/.local/share/cadence/catalog.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Recommend songs for a mood, activity and time of day
    ///
    /// Loads the catalog, derives a context for songs that only carry audio
    /// features (valence, danceability), fits the TF-IDF model and ranks every
    /// song by cosine similarity with your context.
    ///
    /// The context is either built from --mood and --activity (plus the
    /// current time of day unless --time-of-day is given), or passed verbatim
    /// with --context.
    ///
    /// Songs with equal scores are listed in catalog order. If nothing in your
    /// context matches the catalog, the first songs of the catalog are shown
    /// with a score of 0.
    Recommend {
        /// Happy, Sad, Relaxed or Energetic
        #[arg(long)]
        mood: Option<Mood>,

        /// Working, Exercising, Driving or Studying
        #[arg(long)]
        activity: Option<Activity>,

        /// Morning, Afternoon, Evening or Night (default: from the local clock)
        #[arg(long)]
        time_of_day: Option<TimeOfDay>,

        /// Free-text context, used instead of mood/activity/time of day
        #[arg(long, conflicts_with_all = ["mood", "activity", "time_of_day"])]
        context: Option<String>,

        /// Number of songs to recommend (default: top_k from the config)
        #[arg(short, long)]
        k: Option<usize>,

        /// Print the recommendation set as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show catalog and vocabulary statistics
    Stats {
        /// Also list every vocabulary term with its document frequency and IDF
        #[arg(long)]
        terms: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print one config value, or the config file if no key is given
    Get {
        key: Option<String>,
    },
    /// Create the config file with defaults if it does not exist
    Init,
}

/// The configured log filter, or the default when the config did not load.
fn log_level_for(loaded: &Result<Config>) -> String {
    loaded
        .as_ref()
        .map(|config| config.log_level.clone())
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load();

    let log_level = log_level_for(&loaded);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &loaded {
        Ok(config) => log::debug!("Loaded configuration: {:?}", config),
        Err(e) => log::warn!("Configuration could not be loaded: {:#}", e),
    }

    match cli.command {
        Commands::Recommend {
            mood,
            activity,
            time_of_day,
            context,
            k,
            json,
        } => {
            let config = loaded?.with_overrides(cli.catalog, k);
            let query = commands::build_query(context, mood, activity, time_of_day)?;
            commands::run_recommend(&config, &query, json)?;
        }
        Commands::Stats { terms } => {
            let config = loaded?.with_overrides(cli.catalog, None);
            commands::show_stats(&config, terms)?;
        }
        // Printing and creating the file must work even when it does not parse
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&loaded?)?,
            ConfigAction::Get { key: None } => commands::config::print_config_file()?,
            ConfigAction::Get { key: Some(key) } => {
                commands::config::get_config(&loaded?, &key)?;
            }
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
