//! Work entries - the loosely typed input record and its defaulted form
//!
//! [`WorkEntry`] is what the document actually says, with every field
//! optional. [`NormalizedWork`] is what gets rendered. Building either one
//! never fails: a field of the wrong JSON type is treated as absent.

use crate::config::consts::render::DEFAULT_LINK_LABEL;
use serde_json::{Map, Value};

/// One link as written in the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLink {
    pub url: Option<String>,
    pub label: Option<String>,
}

/// One work entry as written in the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkEntry {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub links: Option<Vec<RawLink>>,
}

impl WorkEntry {
    /// Read the known fields out of a JSON value
    ///
    /// Anything that is not an object yields an entry with no fields.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            log::debug!(
                "Entry is a {}, not an object; using defaults",
                crate::jsonc::json_type_name(value)
            );
            return Self::default();
        };

        Self {
            title: field(object, "title", text),
            description: field(object, "description", text),
            image: field(object, "image", truthy_text),
            tags: field(object, "tags", |v| {
                v.as_array()
                    .map(|items| items.iter().filter_map(text).collect())
            }),
            links: field(object, "links", |v| {
                v.as_array()
                    .map(|items| items.iter().filter_map(RawLink::from_value).collect())
            }),
        }
    }
}

impl RawLink {
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            url: field(object, "url", truthy_text),
            label: field(object, "label", text),
        })
    }
}

/// Look up `key` and convert it, logging fields that had to be dropped
fn field<T>(
    object: &Map<String, Value>,
    key: &str,
    convert: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = object.get(key)?;
    let converted = convert(value);
    if converted.is_none() && !value.is_null() {
        log::debug!(
            "Ignoring '{}': unexpected {}",
            key,
            crate::jsonc::json_type_name(value)
        );
    }
    converted
}

/// Scalar text: strings as-is, numbers and booleans in JSON form
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Scalar text that is also truthy (non-empty, non-zero, `true`)
fn truthy_text(value: &Value) -> Option<String> {
    let truthy = match value {
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Bool(b) => *b,
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    };
    if truthy { text(value) } else { None }
}

/// A link ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLink {
    pub url: String,
    pub label: String,
}

/// A work entry with every default applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWork {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub links: Vec<NormalizedLink>,
}

impl NormalizedWork {
    /// Apply defaults to `entry`, which sits at zero-based `index` in the document
    pub fn from_entry(entry: WorkEntry, index: usize) -> Self {
        let links = entry
            .links
            .unwrap_or_default()
            .into_iter()
            .filter_map(|link| {
                let url = link.url.filter(|u| !u.is_empty())?;
                Some(NormalizedLink {
                    url,
                    label: link.label.unwrap_or_else(|| DEFAULT_LINK_LABEL.to_string()),
                })
            })
            .collect();

        Self {
            title: entry
                .title
                .unwrap_or_else(|| format!("Untitled #{}", index + 1)),
            description: entry.description.unwrap_or_default(),
            image: entry.image.filter(|i| !i.is_empty()),
            tags: entry.tags.unwrap_or_default(),
            links,
        }
    }

    pub fn from_value(value: &Value, index: usize) -> Self {
        Self::from_entry(WorkEntry::from_value(value), index)
    }
}

/// Normalize every entry, keeping document order
pub fn normalize_all(items: &[Value]) -> Vec<NormalizedWork> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| NormalizedWork::from_value(item, index))
        .collect()
}
