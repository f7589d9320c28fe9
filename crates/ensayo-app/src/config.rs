//! Configuration management for ensayo-lab
//!
//! Config stored at: ~/.config/ensayo-lab/config.json

use ensayo_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Store directory override
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Default reviewer name prefilled on new forms
    #[serde(default = "default_revisado_por")]
    pub revisado_por: String,

    /// Default approver name prefilled on new forms
    #[serde(default = "default_aprobado_por")]
    pub aprobado_por: String,
}

fn default_revisado_por() -> String {
    "FABIAN LA ROSA".to_string()
}

fn default_aprobado_por() -> String {
    "IRMA COAQUIRA".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            store_dir: None,
            revisado_por: default_revisado_por(),
            aprobado_por: default_aprobado_por(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("ensayo-lab");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the store directory path
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let store_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("ensayo-lab");
        Ok(store_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ensayo Lab Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Store dir:      {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Revisado por:   {}", self.revisado_por)?;
        writeln!(f, "Aprobado por:   {}", self.aprobado_por)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.revisado_por, "FABIAN LA ROSA");
        assert!(config.store_dir.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"output_format":"json"}"#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.aprobado_por, "IRMA COAQUIRA");
    }
}
