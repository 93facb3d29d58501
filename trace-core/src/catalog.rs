//! Static seed catalog
//!
//! A fixed, read-only set of candidate records used only when the live
//! directory path yields nothing. The embedded seed is parsed once on first
//! use; deployments may supply their own JSON file instead.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

/// A seed candidate record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub verified: bool,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Professional-network search link
    pub linkedin: String,
    /// Directory search link
    pub github: String,
    /// Avatar image URL
    pub image: String,
    /// Free-form experience, e.g. "5 years"
    pub experience: String,
}

impl CatalogEntry {
    /// Lower-cased name, role and skills joined for substring matching
    pub fn haystack(&self) -> String {
        let mut parts = Vec::with_capacity(self.skills.len() + 2);
        parts.push(self.name.as_str());
        parts.push(self.role.as_str());
        parts.extend(self.skills.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

/// Errors loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

static SEED_CATALOG: LazyLock<Vec<CatalogEntry>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../catalog/seed.json")).unwrap()
});

/// The embedded seed catalog
pub fn seed_catalog() -> &'static [CatalogEntry] {
    &SEED_CATALOG
}

/// Load a catalog from a JSON array on disk
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogEntry>, CatalogError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
