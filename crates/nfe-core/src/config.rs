//! Configuration structures for document loading and lookups.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NfeError, Result};

/// Main configuration for the nfe pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NfeConfig {
    /// Document loading configuration.
    pub loader: LoaderConfig,

    /// Municipality table configuration.
    pub municipalities: MunicipalityConfig,
}

/// Document loader configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Timeout for fetching remote documents, in seconds.
    pub http_timeout_secs: u64,

    /// User agent sent when fetching remote documents.
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: 30,
            user_agent: concat!("nfe-core/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Municipality code table configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MunicipalityConfig {
    /// JSON file mapping IBGE codes to names. Uses the bundled table when unset.
    pub path: Option<PathBuf>,
}

impl NfeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| NfeError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Use the municipality table at `path` instead of the bundled one.
    pub fn with_municipality_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.municipalities.path = Some(path.into());
        self
    }
}
