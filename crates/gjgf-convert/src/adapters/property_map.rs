// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Property-map graphs.
//!
//! Property maps read unset slots as zero, so zero-like values are treated
//! as absent: nodes keep non-sentinel scalars only, edges drop sentinels but
//! keep any other value.

use std::collections::BTreeMap;

use gjgf_model::{is_scalar, is_unset_sentinel, Attributes, Gjgf, NodeId};
use gjgf_native::property_map::{Edge, PropertyMap};
use gjgf_native::{PropertyGraph, Vertex};
use serde_json::Value;

use crate::source::{extract, GraphSource};
use crate::SourceKind;

/// [`GraphSource`] over a [`PropertyGraph`].
#[derive(Debug, Clone, Copy)]
pub struct PropertyMapSource<'a>(pub &'a PropertyGraph);

fn read_slots(
    maps: &BTreeMap<String, PropertyMap>,
    index: usize,
    keep: impl Fn(&Value) -> bool,
) -> Attributes {
    maps.iter()
        .map(|(name, map)| (name, map.get(index)))
        .filter(|(_, value)| keep(value))
        .map(|(name, value)| (name.clone(), value))
        .collect()
}

impl GraphSource for PropertyMapSource<'_> {
    type Node = Vertex;
    type Edge = Edge;

    fn kind(&self) -> SourceKind {
        SourceKind::PropertyMap
    }

    fn is_directed(&self) -> bool {
        self.0.is_directed()
    }

    fn graph_metadata(&self) -> Attributes {
        self.0.graph_properties().clone()
    }

    fn nodes(&self) -> Vec<Vertex> {
        self.0.vertices().collect()
    }

    fn edges(&self) -> Vec<Edge> {
        self.0.edges().collect()
    }

    fn node_id(&self, node: &Vertex) -> NodeId {
        node.to_string()
    }

    fn edge_endpoints(&self, edge: &Edge) -> (NodeId, NodeId) {
        (edge.source().to_string(), edge.target().to_string())
    }

    fn node_metadata(&self, node: &Vertex) -> Attributes {
        read_slots(self.0.vertex_properties(), node.0, |value| {
            is_scalar(value) && !is_unset_sentinel(value)
        })
    }

    fn edge_metadata(&self, edge: &Edge) -> Attributes {
        read_slots(self.0.edge_properties(), edge.index(), |value| {
            !is_unset_sentinel(value)
        })
    }
}

/// Convert a property-map graph.
pub fn property_graph_to_gjgf(graph: &PropertyGraph) -> Gjgf {
    extract(&PropertyMapSource(graph)).into_gjgf()
}
