//! Conversion of element trees into attribute-free key-value maps.
//!
//! Two steps: [`to_raw`] lays an element out the way SimpleXML-style
//! converters do, with attributes grouped under [`ATTRIBUTES_KEY`];
//! [`normalize`] then hoists every attribute group into the map that owns
//! it, so attributes and child elements read the same way.

mod value;

pub use value::{Map, Value};

use crate::xml::XmlElement;

/// Key holding an element's attributes in the raw form.
pub const ATTRIBUTES_KEY: &str = "@attributes";

/// Key holding the text of an element that also has attributes or children.
pub const TEXT_KEY: &str = "#text";

/// Convert an element into its raw key-value form.
///
/// The element's own name is not part of the result. An element without
/// attributes or children becomes its text, or an empty map when it has no
/// text either. Repeated siblings are collected into a [`Value::List`].
pub fn to_raw(element: &XmlElement) -> Value {
    if element.attributes.is_empty() && element.children.is_empty() {
        return match &element.text {
            Some(text) => Value::Text(text.clone()),
            None => Value::Map(Map::new()),
        };
    }

    let mut map = Map::new();

    if !element.attributes.is_empty() {
        let attributes = element
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), Value::Text(value.clone())))
            .collect();
        map.insert(ATTRIBUTES_KEY.to_string(), Value::Map(attributes));
    }

    for child in &element.children {
        let value = to_raw(child);
        match map.get_mut(&child.name) {
            Some(Value::List(items)) => items.push(value),
            Some(existing) => {
                let first = std::mem::replace(existing, Value::List(Vec::new()));
                *existing = Value::List(vec![first, value]);
            }
            None => {
                map.insert(child.name.clone(), value);
            }
        }
    }

    if let Some(text) = &element.text {
        map.insert(TEXT_KEY.to_string(), Value::Text(text.clone()));
    }

    Value::Map(map)
}

/// Merge attribute groups into their owning maps, at every depth.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Map(map) => Value::Map(normalize_map(map)),
        Value::List(items) => Value::List(items.into_iter().map(normalize).collect()),
        text @ Value::Text(_) => text,
    }
}

fn normalize_map(map: Map) -> Map {
    let mut merged = Map::with_capacity(map.len());
    let mut entries = Vec::with_capacity(map.len());

    for (key, value) in map {
        if key == ATTRIBUTES_KEY {
            // Attributes go first; a non-map group has nothing to hoist
            if let Value::Map(attributes) = value {
                merged.extend(normalize_map(attributes));
            }
        } else {
            entries.push((key, normalize(value)));
        }
    }

    // Child elements win a name clash but keep the attribute's slot
    merged.extend(entries);
    merged
}
