// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Reserved-key partitioning.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{promote_string, truthy, Attributes, Metadata};

/// Keys promoted to top-level graph fields.
pub const GRAPH_RESERVED: &[&str] = &["label", "type"];
/// Keys promoted to top-level node fields.
pub const NODE_RESERVED: &[&str] = &["label"];
/// Keys promoted to top-level edge fields.
pub const EDGE_RESERVED: &[&str] = &["id", "label", "relation", "directed"];

/// Result of splitting a flat attribute map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Partitioned {
    /// Reserved keys found in the input, with their values.
    pub promoted: BTreeMap<&'static str, Value>,
    /// Everything else; `None` when nothing remained.
    pub metadata: Option<Metadata>,
}

impl Partitioned {
    /// Take a promoted value.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.promoted.remove(key)
    }

    /// Take a promoted value as a string field.
    pub fn take_string(&mut self, key: &str) -> Option<String> {
        self.take(key).map(promote_string)
    }

    /// Take a promoted value as a bool field.
    pub fn take_bool(&mut self, key: &str) -> Option<bool> {
        self.take(key).map(|value| match value {
            Value::Bool(b) => b,
            other => truthy(&other),
        })
    }
}

/// Split `attrs` into the `reserved` keys and the remaining metadata.
///
/// The input is never modified. An empty remainder yields `metadata: None`,
/// so a record never carries `"metadata": {}`.
pub fn partition(attrs: &Attributes, reserved: &[&'static str]) -> Partitioned {
    let mut promoted = BTreeMap::new();
    let mut metadata = Metadata::new();
    for (key, value) in attrs {
        match reserved.iter().find(|name| **name == key.as_str()) {
            Some(name) => {
                promoted.insert(*name, value.clone());
            }
            None => {
                metadata.insert(key.clone(), value.clone());
            }
        }
    }
    Partitioned {
        promoted,
        metadata: (!metadata.is_empty()).then_some(metadata),
    }
}
