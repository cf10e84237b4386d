//! Document handle tying loading, normalization and field access together.

mod accessors;

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::NfeConfig;
use crate::error::Result;
use crate::fields::{catalog, resolve_text, Anchor, Field, MunicipalityTable};
use crate::normalize::{normalize, to_raw, Map, Value, TEXT_KEY};
use crate::xml::{self, parse_str, XmlElement};

/// Root element name of a bare invoice, as opposed to an `nfeProc` wrapper.
const INVOICE_ROOT: &str = "NFe";

/// A loaded NF-e document.
///
/// The normalized map is derived once at construction; accessors read it
/// without re-deriving anything.
#[derive(Debug)]
pub struct Nfe {
    config: NfeConfig,
    root: XmlElement,
    normalized: Map,
    municipalities: OnceLock<Option<MunicipalityTable>>,
}

impl Nfe {
    /// Load from a URL, inline XML (with declaration) or a file path.
    pub fn load(source: &str) -> Result<Self> {
        Self::load_with_config(source, NfeConfig::default())
    }

    pub fn load_with_config(source: &str, config: NfeConfig) -> Result<Self> {
        let root = xml::load(source, &config.loader)?;
        Ok(Self::from_element(root, config))
    }

    /// Parse markup directly, without source detection.
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        Ok(Self::from_element(parse_str(xml)?, NfeConfig::default()))
    }

    pub fn from_element(root: XmlElement, config: NfeConfig) -> Self {
        let normalized = match normalize(to_raw(&root)) {
            Value::Map(map) => map,
            other => {
                let mut map = Map::new();
                map.insert(TEXT_KEY.to_string(), other);
                map
            }
        };
        debug!("Normalized <{}> into {} top-level keys", root.name, normalized.len());

        Self {
            config,
            root,
            normalized,
            municipalities: OnceLock::new(),
        }
    }

    /// Use `table` for municipality names instead of the configured source.
    pub fn with_municipalities(self, table: MunicipalityTable) -> Self {
        Self {
            municipalities: OnceLock::from(Some(table)),
            ..self
        }
    }

    pub fn config(&self) -> &NfeConfig {
        &self.config
    }

    /// Name of the document's root element, e.g. `nfeProc` or `NFe`.
    pub fn root_name(&self) -> &str {
        &self.root.name
    }

    /// The parsed element tree.
    pub fn element(&self) -> &XmlElement {
        &self.root
    }

    /// Key-value form before attribute groups are merged.
    pub fn raw(&self) -> Value {
        to_raw(&self.root)
    }

    /// Normalized key-value form.
    pub fn to_map(&self) -> &Map {
        &self.normalized
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.normalized)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.normalized)?)
    }

    /// Dynamic object view of the normalized map.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.normalized)?)
    }

    /// Deserialize the normalized map into a caller-defined type.
    pub fn to_object<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.to_json_value()?)?)
    }

    /// Map a field anchor points at, if the document has it.
    pub fn anchor(&self, anchor: Anchor) -> Option<&Map> {
        match anchor {
            Anchor::Document => Some(&self.normalized),
            Anchor::Invoice if self.root.name == INVOICE_ROOT => Some(&self.normalized),
            Anchor::Invoice => self.normalized.get(INVOICE_ROOT).and_then(Value::as_map),
        }
    }

    /// Text at `path` below `anchor`.
    pub fn resolve(&self, anchor: Anchor, path: &[&str]) -> Option<&str> {
        resolve_text(self.anchor(anchor)?, path)
    }

    /// Resolve and decode a catalog field.
    pub fn field(&self, field: &Field) -> Option<String> {
        field.render(self.anchor(field.anchor)?, self.municipalities())
    }

    /// Every catalog field present in the document, by field name.
    pub fn summary(&self) -> IndexMap<&'static str, String> {
        catalog::ALL
            .iter()
            .filter_map(|field| self.field(field).map(|value| (field.name, value)))
            .collect()
    }

    /// Municipality table used for name lookups.
    ///
    /// A configured table is read on first use; when it cannot be loaded
    /// the lookups fall back to bare codes.
    pub fn municipalities(&self) -> Option<&MunicipalityTable> {
        if let Some(table) = self.municipalities.get() {
            return table.as_ref();
        }

        match &self.config.municipalities.path {
            None => MunicipalityTable::bundled(),
            Some(path) => self
                .municipalities
                .get_or_init(|| match MunicipalityTable::from_file(path) {
                    Ok(table) => Some(table),
                    Err(e) => {
                        warn!("Municipality names unavailable: {}", e);
                        None
                    }
                })
                .as_ref(),
        }
    }
}
