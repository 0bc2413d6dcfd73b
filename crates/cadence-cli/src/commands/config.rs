use anyhow::{Context, Result};
use cadence_core::config;
use cadence_core::Config;

const KEYS: &str = "catalog_path, top_k, log_level";

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    let config_path = config::config_file_path();
    println!("Config file: {}", config_path.display());
    println!(
        "File exists: {}\n",
        if config_path.exists() { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  catalog_path: {}", config.catalog_path.display());
    println!("  top_k: {}", config.top_k);
    println!("  log_level: {}", config.log_level);

    println!("\nPriority: CLI args > ENV vars (CADENCE_*) > Config file > Defaults");

    Ok(())
}

/// Print the config file as written, without parsing it.
pub fn print_config_file() -> Result<()> {
    let config_path = config::config_file_path();
    if config_path.exists() {
        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        print!("{}", contents);
    } else {
        println!("Config file does not exist: {}", config_path.display());
        println!("\nRun 'cadence config init' to create it.");
    }
    Ok(())
}

/// Get a specific config value.
pub fn get_config(config: &Config, key: &str) -> Result<()> {
    match key {
        "catalog_path" => println!("{}", config.catalog_path.display()),
        "top_k" => println!("{}", config.top_k),
        "log_level" => println!("{}", config.log_level),
        _ => anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, KEYS),
    }

    Ok(())
}

/// Create the config file with defaults.
pub fn init_config() -> Result<()> {
    let config_path = config::config_file_path();
    if config::ensure_config_file()? {
        println!("Created config file: {}", config_path.display());
    } else {
        println!("Config file already exists: {}", config_path.display());
    }
    Ok(())
}
