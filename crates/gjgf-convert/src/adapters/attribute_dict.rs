// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Attribute-dict graphs: every attribute is copied unfiltered.

use gjgf_model::{stringify_id, Attributes, Gjgf, NodeId};
use gjgf_native::{AttrDict, DictGraph};
use serde_json::Value;

use crate::source::{extract, GraphSource};
use crate::SourceKind;

/// [`GraphSource`] over a [`DictGraph`].
#[derive(Debug, Clone, Copy)]
pub struct DictSource<'a>(pub &'a DictGraph);

impl<'a> GraphSource for DictSource<'a> {
    type Node = (&'a Value, &'a AttrDict);
    type Edge = (&'a Value, &'a Value, &'a AttrDict);

    fn kind(&self) -> SourceKind {
        SourceKind::AttributeDict
    }

    fn is_directed(&self) -> bool {
        self.0.is_directed()
    }

    fn graph_metadata(&self) -> Attributes {
        self.0.graph().clone()
    }

    fn nodes(&self) -> Vec<Self::Node> {
        self.0.nodes().collect()
    }

    fn edges(&self) -> Vec<Self::Edge> {
        self.0.edges().collect()
    }

    fn node_id(&self, node: &Self::Node) -> NodeId {
        stringify_id(node.0)
    }

    fn edge_endpoints(&self, edge: &Self::Edge) -> (NodeId, NodeId) {
        (stringify_id(edge.0), stringify_id(edge.1))
    }

    fn node_metadata(&self, node: &Self::Node) -> Attributes {
        node.1.clone()
    }

    fn edge_metadata(&self, edge: &Self::Edge) -> Attributes {
        edge.2.clone()
    }
}

/// Convert an attribute-dict graph.
pub fn dict_graph_to_gjgf(graph: &DictGraph) -> Gjgf {
    extract(&DictSource(graph)).into_gjgf()
}
