//! Declarative field lookups over a normalized document.
//!
//! Every named accessor is a [`Field`]: a key path from an [`Anchor`] plus
//! an optional decoding step. Missing keys resolve to `None`; NF-e layout
//! versions differ in which elements they carry, so absence is not an error.

pub mod catalog;
pub mod codes;
mod municipality;

pub use codes::CodeTable;
pub use municipality::MunicipalityTable;

use crate::normalize::{Map, Value, TEXT_KEY};

/// Where a field path starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The `NFe` envelope (`infNFe` and its signature).
    Invoice,
    /// The document root, e.g. the `nfeProc` content holding `protNFe`.
    Document,
}

/// How a resolved scalar is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decode {
    /// The text as found.
    Raw,
    /// `"<code> - <label>"`, or the bare code when unknown.
    Described(&'static CodeTable),
    /// The label alone, or the bare code when unknown.
    Label(&'static CodeTable),
    /// `"<code> - <name>"`, taking the name from the sibling `name_key`
    /// element when present and from the municipality table otherwise.
    Municipality { name_key: Option<&'static str> },
}

/// A named lookup into the normalized document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub anchor: Anchor,
    pub path: &'static [&'static str],
    pub decode: Decode,
}

impl Field {
    pub const fn raw(name: &'static str, anchor: Anchor, path: &'static [&'static str]) -> Self {
        Self {
            name,
            anchor,
            path,
            decode: Decode::Raw,
        }
    }

    pub const fn described(
        name: &'static str,
        anchor: Anchor,
        path: &'static [&'static str],
        table: &'static CodeTable,
    ) -> Self {
        Self {
            name,
            anchor,
            path,
            decode: Decode::Described(table),
        }
    }

    pub const fn label(
        name: &'static str,
        anchor: Anchor,
        path: &'static [&'static str],
        table: &'static CodeTable,
    ) -> Self {
        Self {
            name,
            anchor,
            path,
            decode: Decode::Label(table),
        }
    }

    pub const fn municipality(
        name: &'static str,
        anchor: Anchor,
        path: &'static [&'static str],
        name_key: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            anchor,
            path,
            decode: Decode::Municipality { name_key },
        }
    }

    /// Resolve the field under `base` and apply its decoding.
    pub fn render(&self, base: &Map, municipalities: Option<&MunicipalityTable>) -> Option<String> {
        let code = resolve_text(base, self.path)?;

        let rendered = match self.decode {
            Decode::Raw => code.to_string(),
            Decode::Described(table) => table.describe(code),
            Decode::Label(table) => table.label(code).unwrap_or(code).to_string(),
            Decode::Municipality { name_key } => {
                let embedded = name_key
                    .and_then(|key| self.sibling(base, key))
                    .filter(|name| !name.trim().is_empty());
                let name = embedded.or_else(|| municipalities.and_then(|t| t.name(code)));
                match name {
                    Some(name) => format!("{} - {}", code, name),
                    None => code.to_string(),
                }
            }
        };

        Some(rendered)
    }

    fn sibling<'a>(&self, base: &'a Map, key: &str) -> Option<&'a str> {
        let (_, parent) = self.path.split_last()?;
        let value = if parent.is_empty() {
            base.get(key)?
        } else {
            resolve(base, parent)?.get(key)?
        };
        text_of(value)
    }
}

/// Walk `path` from `root`, one map key per step.
pub fn resolve<'a>(root: &'a Map, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(root.get(*first)?, |current, key| current.get(key))
}

/// Like [`resolve`], but only succeeds on text leaves.
pub fn resolve_text<'a>(root: &'a Map, path: &[&str]) -> Option<&'a str> {
    resolve(root, path).and_then(text_of)
}

/// Text of a leaf, including an element whose text sits next to merged attributes.
fn text_of(value: &Value) -> Option<&str> {
    match value {
        Value::Text(text) => Some(text),
        Value::Map(map) => map.get(TEXT_KEY).and_then(Value::as_str),
        Value::List(_) => None,
    }
}
