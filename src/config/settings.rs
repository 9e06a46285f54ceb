//! Configuration settings for the Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub playback: PlaybackConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Milliseconds between timed steps while playing.
    pub interval_ms: u64,
    /// Upper bound on generations for headless runs; animation stops
    /// here too.
    pub max_generations: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
    pub show_coords: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 50,
                height: 50,
            },
            playback: PlaybackConfig {
                interval_ms: 100,
                max_generations: 200,
            },
            display: DisplayConfig {
                alive_glyph: '█',
                dead_glyph: '·',
                show_coords: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        if self.playback.interval_ms == 0 {
            anyhow::bail!("Playback interval must be positive");
        }

        if self.playback.max_generations == 0 {
            anyhow::bail!("Maximum generations must be positive");
        }

        if self.display.alive_glyph == self.display.dead_glyph {
            anyhow::bail!("Alive and dead glyphs must differ");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.playback.interval_ms = interval_ms;
        }
        if let Some(generations) = cli_overrides.generations {
            self.playback.max_generations = generations;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub interval_ms: Option<u64>,
    pub generations: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.grid.width, 50);
        assert_eq!(settings.grid.height, 50);
        assert_eq!(settings.playback.interval_ms, 100);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let mut settings = Settings::default();
        settings.grid.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.grid.height = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut settings = Settings::default();
        settings.playback.interval_ms = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.grid.width = 32;
        settings.display.show_coords = true;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.grid.width, 32);
        assert_eq!(loaded.grid.height, 50);
        assert!(loaded.display.show_coords);
        assert_eq!(loaded.display.alive_glyph, '█');
    }

    #[test]
    fn test_invalid_file_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        std::fs::write(&path, "grid: not-a-mapping\n").unwrap();
        assert!(Settings::from_file(&path).is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            width: Some(20),
            height: None,
            interval_ms: Some(50),
            generations: Some(10),
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.grid.width, 20);
        assert_eq!(settings.grid.height, 50);
        assert_eq!(settings.playback.interval_ms, 50);
        assert_eq!(settings.playback.max_generations, 10);
    }
}
