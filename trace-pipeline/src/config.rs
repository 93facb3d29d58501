//! TRACE configuration
//!
//! Loads tunables from a TOML file. Every section and field is optional;
//! missing values take their defaults.
//!
//! ```toml
//! catalog_path = "catalog.json"
//!
//! [directory]
//! search_limit = 6
//! hydration_concurrency = 3
//!
//! [enrichment]
//! presence_probability = 0.6
//! boost = 15
//!
//! [ranking]
//! top_n = 3
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use trace_core::{load_catalog, seed_catalog, CatalogEntry, CatalogError};
use trace_directory::DirectoryConfig;

use crate::{EnrichmentConfig, RankingConfig};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete TRACE configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub directory: DirectoryConfig,
    pub enrichment: EnrichmentConfig,
    pub ranking: RankingConfig,
    /// JSON catalog replacing the embedded seed
    pub catalog_path: Option<PathBuf>,
}

impl TraceConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TraceConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.enrichment.presence_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid(format!(
                "enrichment.presence_probability must be within [0, 1], got {}",
                p
            )));
        }
        if self.ranking.top_n == 0 {
            return Err(ConfigError::Invalid("ranking.top_n must be positive".to_string()));
        }
        if self.directory.search_limit == 0 {
            return Err(ConfigError::Invalid(
                "directory.search_limit must be positive".to_string(),
            ));
        }
        if self.directory.hydration_concurrency == 0 {
            return Err(ConfigError::Invalid(
                "directory.hydration_concurrency must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The catalog this configuration selects
    pub fn catalog(&self) -> Result<Vec<CatalogEntry>, ConfigError> {
        match &self.catalog_path {
            Some(path) => Ok(load_catalog(path)?),
            None => Ok(seed_catalog().to_vec()),
        }
    }
}
