mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Load configuration from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!("Config file not found at {}", path.display());
    }

    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    debug!("loaded config from {}", path.display());

    if let Some(ref scoring) = config.scoring {
        if scoring.mastery.is_none() && scoring.engagement.is_none() {
            warn!(
                "scoring section in {} is empty, built-in thresholds stay active",
                path.display()
            );
        }
    }

    Ok(config)
}
