//! Configuration management for avtopark
//!
//! Config stored at: ~/.config/avtopark/config.json

use std::path::{Path, PathBuf};

use avtopark_types::{ConfigError, OutputFormat, Result, VehicleKind};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Type name used when `create` is called without an argument
    /// (stand-in for a value obtained from I/O, DB, file, etc.)
    #[serde(default = "default_vehicle_type")]
    pub default_vehicle_type: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Prompt for a keypress before exiting
    #[serde(default)]
    pub wait_on_exit: bool,
}

fn default_vehicle_type() -> String {
    VehicleKind::Truck.label().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_vehicle_type: default_vehicle_type(),
            output_format: OutputFormat::default(),
            wait_on_exit: false,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("avtopark");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific path, or create default if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Avtopark Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Default type:  {}", self.default_vehicle_type)?;
        writeln!(f, "Output format: {}", self.output_format)?;
        writeln!(f, "Wait on exit:  {}", self.wait_on_exit)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:   {}", path.display())?;
        }

        Ok(())
    }
}
