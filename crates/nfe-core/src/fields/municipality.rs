//! IBGE municipality code → name lookup.

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ResourceError;

const BUNDLED_JSON: &str = include_str!("../../resources/municipios.json");

lazy_static! {
    static ref BUNDLED: Option<MunicipalityTable> =
        match MunicipalityTable::from_json_str(BUNDLED_JSON) {
            Ok(table) => {
                debug!("Loaded bundled municipality table with {} entries", table.len());
                Some(table)
            }
            Err(e) => {
                warn!("Bundled municipality table is unreadable: {}", e);
                None
            }
        };
}

/// Municipality names keyed by seven-digit IBGE code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MunicipalityTable {
    names: HashMap<String, String>,
}

impl MunicipalityTable {
    /// Table compiled into the library, parsed once per process.
    pub fn bundled() -> Option<&'static MunicipalityTable> {
        BUNDLED.as_ref()
    }

    /// Load a JSON object of `"code": "name"` pairs.
    pub fn from_file(path: &Path) -> Result<Self, ResourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| ResourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table: Self = serde_json::from_str(&content).map_err(|source| ResourceError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded {} municipalities from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Name for `code`, if known.
    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for MunicipalityTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
