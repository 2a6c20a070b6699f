//! Proto configuration document.
//!
//! The on-disk document is free-form JSON edited by hand, so it is
//! validated here, once, at the boundary: object shapes are checked and each
//! prefix entry is collapsed from `string | string[]` into a single
//! canonical string. Lookups of individual keys fail only when that key is
//! actually needed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

pub const PATH_KEY: &str = "cueme.proto.path";
pub const PREFIX_KEY: &str = "cueme.proto.prefix";
pub const PROTOCOL_PATH_KEY: &str = "cueme.proto.protocol_path";

/// A `cueme.proto.prefix` entry as written in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefixValue {
    Text(String),
    Lines(Vec<String>),
    Invalid(Value),
}

impl PrefixValue {
    /// Canonical prefix text: lines joined with `\n`. `None` for invalid shapes.
    pub fn canonical(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Lines(lines) => Some(lines.join("\n")),
            Self::Invalid(_) => None,
        }
    }
}

/// Validated view of the configuration document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtoConfig {
    /// `"<platform>.<kind>"` to configured path; `None` when not a string.
    paths: BTreeMap<String, Option<String>>,
    /// `<kind>` to canonical prefix; `None` when the shape is invalid.
    prefixes: BTreeMap<String, Option<String>>,
    protocol_path: Option<String>,
}

impl ProtoConfig {
    /// Validate a parsed JSON document. `source` is only used in errors.
    pub fn from_value(value: Value, source: &Path) -> Result<Self> {
        let Value::Object(mut doc) = value else {
            return Err(Error::ConfigNotObject {
                path: source.to_path_buf(),
            });
        };

        let paths = take_object(&mut doc, PATH_KEY)?
            .into_iter()
            .map(|(key, value)| (key, value.as_str().map(str::to_string)))
            .collect();

        let prefixes = take_object(&mut doc, PREFIX_KEY)?
            .into_iter()
            .map(|(kind, value)| {
                let canonical = serde_json::from_value::<PrefixValue>(value)
                    .ok()
                    .and_then(|prefix| prefix.canonical());
                (kind, canonical)
            })
            .collect();

        let protocol_path = doc
            .get(PROTOCOL_PATH_KEY)
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            paths,
            prefixes,
            protocol_path,
        })
    }

    /// Raw configured path for a composite key. Blank values count as missing.
    pub fn target_path(&self, key: &str) -> Result<&str> {
        self.paths
            .get(key)
            .and_then(|value| value.as_deref())
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| Error::TargetPathNotConfigured {
                key: key.to_string(),
            })
    }

    /// Canonical prefix for `kind`.
    pub fn prefix(&self, kind: &str) -> Result<&str> {
        self.prefixes
            .get(kind)
            .and_then(|value| value.as_deref())
            .ok_or_else(|| Error::PrefixNotConfigured {
                kind: kind.to_string(),
            })
    }

    /// Raw protocol path, if set and not blank.
    pub fn protocol_path(&self) -> Option<&str> {
        self.protocol_path
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    /// Every target kind mentioned in the document, sorted and deduplicated.
    ///
    /// Kinds come from the second component of `"<platform>.<kind>"` path
    /// keys (keys with exactly one dot) and from all prefix keys.
    pub fn target_kinds(&self) -> Vec<String> {
        let mut kinds: BTreeSet<String> = self.prefixes.keys().cloned().collect();
        for key in self.paths.keys() {
            let mut parts = key.split('.');
            if let (Some(_), Some(kind), None) = (parts.next(), parts.next(), parts.next()) {
                kinds.insert(kind.to_string());
            }
        }
        kinds.into_iter().collect()
    }
}

/// Remove `field` from `doc`, requiring an object when present.
fn take_object(doc: &mut Map<String, Value>, field: &str) -> Result<Map<String, Value>> {
    match doc.remove(field) {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(Error::FieldNotObject {
            field: field.to_string(),
        }),
    }
}

/// Serializable shape of a freshly initialized document.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigDocument {
    #[serde(rename = "cueme.proto.path")]
    pub path: BTreeMap<String, String>,
    #[serde(rename = "cueme.proto.prefix")]
    pub prefix: BTreeMap<String, PrefixValue>,
    #[serde(rename = "cueme.proto.protocol_path")]
    pub protocol_path: String,
}
