// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Incremental construction of one [`GraphRecord`].

use crate::partition::{partition, EDGE_RESERVED, GRAPH_RESERVED, NODE_RESERVED};
use crate::{Attributes, EdgeRecord, Gjgf, GraphRecord, NodeId, NodeRecord};

/// Build a node body from its flat attributes.
pub fn node_record(attrs: &Attributes) -> NodeRecord {
    let mut parts = partition(attrs, NODE_RESERVED);
    NodeRecord {
        label: parts.take_string("label"),
        metadata: parts.metadata,
    }
}

/// Build an edge body from its endpoints and flat attributes.
pub fn edge_record(
    source: impl Into<NodeId>,
    target: impl Into<NodeId>,
    attrs: &Attributes,
) -> EdgeRecord {
    let mut parts = partition(attrs, EDGE_RESERVED);
    EdgeRecord {
        source: source.into(),
        target: target.into(),
        id: parts.take("id"),
        label: parts.take_string("label"),
        relation: parts.take_string("relation"),
        directed: parts.take_bool("directed"),
        metadata: parts.metadata,
    }
}

/// Assembles one canonical graph record.
///
/// Adapters feed raw attribute maps in; the builder applies the reserved-key
/// split at each level. Inserting a node id twice replaces the earlier body.
#[derive(Debug, Clone)]
pub struct GjgfBuilder {
    record: GraphRecord,
}

impl GjgfBuilder {
    /// Start an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            record: GraphRecord::new(directed),
        }
    }

    /// Set graph-level attributes (`label`/`type` promoted, rest to metadata).
    pub fn graph_attributes(&mut self, attrs: &Attributes) -> &mut Self {
        let mut parts = partition(attrs, GRAPH_RESERVED);
        self.record.label = parts.take_string("label");
        self.record.kind = parts.take_string("type");
        self.record.metadata = parts.metadata;
        self
    }

    /// Insert a node.
    pub fn node(&mut self, id: impl Into<NodeId>, attrs: &Attributes) -> &mut Self {
        self.record.nodes.insert(id.into(), node_record(attrs));
        self
    }

    /// Append an edge.
    pub fn edge(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        attrs: &Attributes,
    ) -> &mut Self {
        self.record.edges.push(edge_record(source, target, attrs));
        self
    }

    /// Finish and return the graph body.
    pub fn build(self) -> GraphRecord {
        self.record
    }

    /// Finish and return the `{"graph": ...}` envelope.
    pub fn into_gjgf(self) -> Gjgf {
        self.record.into_gjgf()
    }
}
