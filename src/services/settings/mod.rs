//! Grid configuration loading.
//!
//! Reads `config.toml` from the platform config directory. A missing file
//! means defaults; a malformed or invalid file also falls back to defaults
//! with a logged warning, so a bad edit can never break rendering.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::services::layout::time_grid::GridConfig;

const CONFIG_FILE: &str = "config.toml";

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "booking-calendar").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

fn parse_config(contents: &str) -> Result<GridConfig> {
    let config: GridConfig = toml::from_str(contents).context("Failed to parse grid config")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid grid config: {}", e))?;
    Ok(config)
}

/// Load the grid configuration, falling back to defaults when the file is
/// missing or unusable.
pub fn load_grid_config() -> GridConfig {
    let Some(path) = config_path() else {
        return GridConfig::default();
    };
    let Ok(contents) = fs::read_to_string(&path) else {
        log::debug!("no grid config at {}, using defaults", path.display());
        return GridConfig::default();
    };
    match parse_config(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!(
                "ignoring grid config at {}: {err:#}",
                path.display()
            );
            GridConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            "business_start_hour = 8\n\
             business_end_hour = 20\n\
             snap_minutes = 30\n\
             pixels_per_hour = 48.0\n",
        )
        .unwrap();
        assert_eq!(config.business_start_hour, 8);
        assert_eq!(config.business_end_hour, 20);
        assert_eq!(config.snap_minutes, 30);
        assert_eq!(config.pixels_per_hour, 48.0);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("snap_minutes = 5\n").unwrap();
        assert_eq!(config.snap_minutes, 5);
        assert_eq!(config.business_start_hour, 7);
        assert_eq!(config.business_end_hour, 23);
        assert_eq!(config.pixels_per_hour, 64.0);
    }

    #[test]
    fn test_malformed_config_rejected() {
        assert!(parse_config("snap_minutes = \"often\"").is_err());
    }

    #[test]
    fn test_invalid_hours_rejected() {
        let result = parse_config("business_start_hour = 23\nbusiness_end_hour = 7\n");
        assert!(result.is_err());
    }
}
