// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Callback-traversal graphs.
//!
//! The graph carries no attributes of its own. Metadata arrives in a side
//! channel bundled after the graph: `[graph, graph_metadata?,
//! node_metadata?, edge_metadata?]`. Node metadata is keyed by the
//! stringified node id, edge metadata by [`edge_key`].
//!
//! The visitor callbacks are drained eagerly into vectors before any record
//! is built.

use std::collections::BTreeMap;

use gjgf_model::{Attributes, Gjgf, NodeId};
use gjgf_native::TraversalGraph;
use serde_json::{Map, Value};

use crate::source::{extract, GraphSource};
use crate::{GraphInput, SourceKind};

/// Side-channel key of the edge `(source, target)`.
///
/// Ids that themselves contain `", "` can collide; the format is kept as is
/// for compatibility with existing side-channel data.
pub fn edge_key(source: &str, target: &str) -> String {
    format!("({source}, {target})")
}

/// Metadata supplied next to a traversal graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideChannel {
    /// Graph-level attributes.
    pub graph: Attributes,
    /// Per-node attributes keyed by stringified node id.
    pub nodes: BTreeMap<String, Attributes>,
    /// Per-edge attributes keyed by [`edge_key`].
    pub edges: BTreeMap<String, Attributes>,
}

fn as_object(item: Option<&GraphInput>) -> Option<&Map<String, Value>> {
    match item {
        Some(GraphInput::Json(Value::Object(map))) => Some(map),
        _ => None,
    }
}

fn flatten(map: &Map<String, Value>) -> Attributes {
    map.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

// Entries that are not maps are ignored; a non-map table is empty.
fn keyed_tables(item: Option<&GraphInput>) -> BTreeMap<String, Attributes> {
    as_object(item)
        .map(|table| {
            table
                .iter()
                .filter_map(|(key, entry)| match entry {
                    Value::Object(attrs) => Some((key.clone(), flatten(attrs))),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

impl SideChannel {
    /// Read the side channel from the items that follow the graph in a
    /// bundle. Missing or malformed items count as empty.
    pub fn from_bundle(items: &[GraphInput]) -> Self {
        Self {
            graph: as_object(items.first()).map(flatten).unwrap_or_default(),
            nodes: keyed_tables(items.get(1)),
            edges: keyed_tables(items.get(2)),
        }
    }
}

/// [`GraphSource`] over a [`TraversalGraph`] and its side channel.
#[derive(Debug, Clone, Copy)]
pub struct TraversalSource<'a> {
    /// The graph.
    pub graph: &'a TraversalGraph,
    /// Its metadata.
    pub side_channel: &'a SideChannel,
}

impl GraphSource for TraversalSource<'_> {
    type Node = u64;
    type Edge = (u64, u64);

    fn kind(&self) -> SourceKind {
        SourceKind::CallbackTraversal
    }

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn graph_metadata(&self) -> Attributes {
        self.side_channel.graph.clone()
    }

    fn nodes(&self) -> Vec<u64> {
        let mut nodes = Vec::with_capacity(self.graph.number_of_nodes());
        self.graph.for_nodes(|u| nodes.push(u));
        nodes
    }

    fn edges(&self) -> Vec<(u64, u64)> {
        let mut edges = Vec::with_capacity(self.graph.number_of_edges());
        self.graph.for_edges(|u, v, _weight, _id| edges.push((u, v)));
        edges
    }

    fn node_id(&self, node: &u64) -> NodeId {
        node.to_string()
    }

    fn edge_endpoints(&self, edge: &(u64, u64)) -> (NodeId, NodeId) {
        (edge.0.to_string(), edge.1.to_string())
    }

    fn node_metadata(&self, node: &u64) -> Attributes {
        self.side_channel
            .nodes
            .get(&self.node_id(node))
            .cloned()
            .unwrap_or_default()
    }

    fn edge_metadata(&self, edge: &(u64, u64)) -> Attributes {
        let (source, target) = self.edge_endpoints(edge);
        self.side_channel
            .edges
            .get(&edge_key(&source, &target))
            .cloned()
            .unwrap_or_default()
    }
}

/// Convert a traversal graph with its side-channel metadata.
pub fn traversal_to_gjgf(graph: &TraversalGraph, side_channel: &SideChannel) -> Gjgf {
    extract(&TraversalSource {
        graph,
        side_channel,
    })
    .into_gjgf()
}
