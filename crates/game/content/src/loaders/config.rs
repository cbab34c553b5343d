//! Game configuration loader.

use std::path::Path;

use hourglass_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate config TOML.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        validate(&config)?;
        Ok(config)
    }
}

fn validate(config: &GameConfig) -> LoadResult<()> {
    if config.time_stop_power_divisor == 0 {
        return Err(anyhow::anyhow!("time_stop_power_divisor must be positive"));
    }
    // A base of one or less would send every launch the full distance.
    if !(config.knockback_log_base > 1.0) {
        return Err(anyhow::anyhow!(
            "knockback_log_base must be greater than 1, got {}",
            config.knockback_log_base
        ));
    }
    if !config.velocity_scale.is_finite() {
        return Err(anyhow::anyhow!("velocity_scale must be finite"));
    }
    if config.exhaustion_base_turns < 0 || config.exhaustion_variance < 0 {
        return Err(anyhow::anyhow!("exhaustion turns must not be negative"));
    }
    Ok(())
}
