//! Configuration management for the Crop Recommendation service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with CROP_ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Locations of the pre-trained model artifacts
    pub artifacts: ArtifactConfig,

    /// Static asset configuration
    pub assets: AssetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArtifactConfig {
    /// Fitted min-max scaler (JSON)
    pub scaler_path: PathBuf,

    /// Fitted crop classifier (JSON)
    pub model_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetConfig {
    /// Directory served under /static
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CROP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("artifacts.scaler_path", "minmaxscaler.json")?
            .set_default("artifacts.model_path", "model.json")?
            .set_default("assets.static_dir", "static")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CROP_ prefix)
            .add_source(
                Environment::with_prefix("CROP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from("minmaxscaler.json"),
            model_path: PathBuf::from("model.json"),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            artifacts: ArtifactConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}
