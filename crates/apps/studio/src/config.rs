//! Studio configuration management
//!
//! Handles loading and saving the studio configuration:
//! - Projects directory location
//! - Default grid settings for new projects
//! - Default color

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Studio configuration stored in a config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Where project files live; defaults to the platform data directory
    pub projects_dir: Option<PathBuf>,
    /// Grid extent for new projects (voxels per side)
    pub grid_size: i32,
    /// Grid line density for new projects
    pub grid_density: f32,
    /// Default color for new projects, as a hex string
    pub default_color: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            projects_dir: None,
            grid_size: 16,
            grid_density: 1.0,
            default_color: "#4a90d9".to_string(),
        }
    }
}

impl StudioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("voxelsmith").join("studio.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save config to file
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the projects directory, falling back to the data directory
    pub fn projects_dir(&self) -> PathBuf {
        if let Some(dir) = &self.projects_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("voxelsmith")
            .join("projects")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudioConfig::default();
        assert!(config.projects_dir.is_none());
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.default_color, "#4a90d9");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = StudioConfig::default();
        config.projects_dir = Some(PathBuf::from("/tmp/projects"));
        let text = toml::to_string_pretty(&config).unwrap();
        let back: StudioConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.projects_dir, config.projects_dir);
        assert_eq!(back.grid_size, config.grid_size);
    }
}
