//! Waymark configuration.
//!
//! Loaded from `~/.waymark/config.toml`. The start position decides where
//! the map opens; without a valid one the map never renders.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::Coords;

fn default_zoom() -> i32 {
    13
}

/// Waymark configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Latitude the map opens centered on.
    pub start_latitude: f64,

    /// Longitude the map opens centered on.
    pub start_longitude: f64,

    /// Initial zoom level.
    #[serde(default = "default_zoom")]
    pub zoom: i32,
}

impl Config {
    /// Load config from `~/.waymark/config.toml`.
    /// Returns an error if the file is missing or invalid.
    pub fn load() -> Result<Self, String> {
        let path = Self::path().ok_or("could not determine home directory")?;

        if !path.exists() {
            return Err(format!(
                "no config file found at {}\n\
                 Create one with at minimum:\n\n\
                 start-latitude = 51.505\n\
                 start-longitude = -0.09",
                path.display()
            ));
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        config.validate(&path)?;

        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), String> {
        if !(-90.0..=90.0).contains(&self.start_latitude) {
            return Err(format!(
                "start-latitude must be between -90 and 90 in {}",
                path.display()
            ));
        }
        if !(-180.0..=180.0).contains(&self.start_longitude) {
            return Err(format!(
                "start-longitude must be between -180 and 180 in {}",
                path.display()
            ));
        }
        if !(1..=18).contains(&self.zoom) {
            return Err(format!("zoom must be between 1 and 18 in {}", path.display()));
        }
        Ok(())
    }

    /// The position the map opens centered on.
    pub fn start_coords(&self) -> Coords {
        Coords {
            lat: self.start_latitude,
            lon: self.start_longitude,
        }
    }

    /// The config file path: `~/.waymark/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".waymark").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Config {
        toml::from_str(contents).unwrap()
    }

    #[test]
    fn zoom_defaults_to_thirteen() {
        let config = parse("start-latitude = 51.5\nstart-longitude = -0.1\n");
        assert_eq!(config.zoom, 13);
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let config = parse("start-latitude = 120.0\nstart-longitude = -0.1\n");
        assert!(config.validate(Path::new("config.toml")).is_err());
    }

    #[test]
    fn valid_config_passes() {
        let config = parse("start-latitude = 51.5\nstart-longitude = -0.1\nzoom = 10\n");
        assert!(config.validate(Path::new("config.toml")).is_ok());
        assert_eq!(config.start_coords(), Coords { lat: 51.5, lon: -0.1 });
    }
}
