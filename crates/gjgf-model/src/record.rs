// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Graph, node and edge records plus the single/multi graph envelopes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical node identifier (the stringified native node id).
pub type NodeId = String;

/// Flat attribute map read off a native graph, before reserved keys are promoted.
pub type Attributes = BTreeMap<String, Value>;

/// Free-form metadata attached to a record. Never empty when present.
pub type Metadata = BTreeMap<String, Value>;

/// One canonical graph body (the value under `"graph"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GraphRecord {
    /// Whether edges are directed by default.
    pub directed: bool,
    /// Optional graph label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Optional graph type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Remaining graph-level attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Nodes keyed by id.
    #[serde(default)]
    pub nodes: BTreeMap<NodeId, NodeRecord>,
    /// Edges in encounter order.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphRecord {
    /// Empty graph with the given directedness.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Wrap into the single-graph envelope.
    pub fn into_gjgf(self) -> Gjgf {
        Gjgf { graph: self }
    }
}

/// Canonical node body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NodeRecord {
    /// Optional node label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Remaining node attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Canonical edge body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeRecord {
    /// Source node id.
    pub source: NodeId,
    /// Target node id.
    pub target: NodeId,
    /// Optional caller-supplied edge id (any JSON value).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Optional edge label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Optional relation name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    /// Per-edge directedness override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
    /// Remaining edge attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl EdgeRecord {
    /// Bare edge between two node ids.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            id: None,
            label: None,
            relation: None,
            directed: None,
            metadata: None,
        }
    }
}

/// Single-graph envelope: `{"graph": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gjgf {
    /// The graph body.
    pub graph: GraphRecord,
}

/// Multi-graph envelope: `{"graphs": [...]}` (no per-item `"graph"` wrapper).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GjgfCollection {
    /// Graph bodies in input order.
    pub graphs: Vec<GraphRecord>,
}

/// One normalized graph body.
///
/// Bodies derived from a native graph are typed records. Bodies that arrived
/// as JSON (dict or text) are passed through untouched, so ids and shapes are
/// exactly what the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GraphBody {
    /// Built by an adapter from a native graph.
    Record(GraphRecord),
    /// Passed through from caller-supplied JSON.
    Json(Value),
}

impl GraphBody {
    /// The typed record, if this body came from an adapter.
    pub fn as_record(&self) -> Option<&GraphRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::Json(_) => None,
        }
    }

    /// The raw JSON, if this body was passed through.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Record(_) => None,
            Self::Json(value) => Some(value),
        }
    }

    /// JSON form of the body, as a renderer would embed it.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        match self {
            Self::Record(record) => serde_json::to_value(record),
            Self::Json(value) => Ok(value.clone()),
        }
    }
}

impl From<GraphRecord> for GraphBody {
    fn from(record: GraphRecord) -> Self {
        Self::Record(record)
    }
}

impl From<Value> for GraphBody {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_graph_serializes_without_optional_fields() {
        let gjgf = GraphRecord::new(true).into_gjgf();
        let value = serde_json::to_value(&gjgf).unwrap();
        assert_eq!(
            value,
            json!({"graph": {"directed": true, "nodes": {}, "edges": []}})
        );
    }

    #[test]
    fn type_field_uses_reserved_name_on_the_wire() {
        let mut record = GraphRecord::new(false);
        record.kind = Some("citation".into());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], json!("citation"));
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn edge_optional_fields_are_omitted() {
        let edge = EdgeRecord::new("a", "b");
        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(value, json!({"source": "a", "target": "b"}));
    }

    #[test]
    fn record_body_and_json_body_serialize_to_same_shape() {
        let record = GraphRecord::new(false);
        let as_json = serde_json::to_value(&record).unwrap();
        let a = GraphBody::from(record).to_value().unwrap();
        let b = GraphBody::from(as_json).to_value().unwrap();
        assert_eq!(a, b);
    }
}
